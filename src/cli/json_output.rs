// src/cli/json_output.rs
//! JSON bodies printed by the subcommands when `--json` is given.
//!
//! Every body carries a `success` flag; lookups also carry a `status` of
//! `found`, `not_found` or `no_data` so callers can tell the two empty
//! outcomes apart.

use serde_json::{json, Value};

use crate::cli::handlers::HandlerError;
use crate::core::Lookup;
use crate::models::CredentialRecord;

pub fn generated(password: &str) -> Value {
    json!({
        "success": true,
        "password": password,
    })
}

pub fn saved(record: &CredentialRecord, generated: bool) -> Value {
    let mut body = json!({
        "success": true,
        "website": record.website,
        "email": record.email,
    });
    // Only echo the password back when the caller did not supply it
    if generated {
        body["password"] = Value::String(record.password.clone());
    }
    body
}

pub fn lookup(website: &str, lookup: &Lookup) -> Value {
    match lookup {
        Lookup::Found(record) => json!({
            "success": true,
            "status": "found",
            "website": record.website,
            "email": record.email,
            "password": record.password,
        }),
        Lookup::NotFound => json!({
            "success": false,
            "status": "not_found",
            "website": website,
        }),
        Lookup::NoData => json!({
            "success": false,
            "status": "no_data",
            "website": website,
        }),
    }
}

pub fn error(err: &HandlerError) -> Value {
    let kind = match err {
        HandlerError::Validation(_) => "validation",
        HandlerError::Store(_) => "store",
    };
    json!({
        "success": false,
        "error": kind,
        "message": err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::ValidationError;

    #[test]
    fn test_lookup_statuses() {
        let found = lookup(
            "example.com",
            &Lookup::Found(CredentialRecord::new("example.com", "a@b.com", "Xx1!")),
        );
        assert_eq!(found["status"], "found");
        assert_eq!(found["email"], "a@b.com");
        assert_eq!(found["password"], "Xx1!");

        let missing = lookup("unknown.com", &Lookup::NotFound);
        assert_eq!(missing["success"], false);
        assert_eq!(missing["status"], "not_found");

        let empty = lookup("unknown.com", &Lookup::NoData);
        assert_eq!(empty["status"], "no_data");
    }

    #[test]
    fn test_saved_hides_supplied_password() {
        let record = CredentialRecord::new("example.com", "a@b.com", "Xx1!");
        assert!(saved(&record, false).get("password").is_none());
        assert_eq!(saved(&record, true)["password"], "Xx1!");
    }

    #[test]
    fn test_validation_error_body() {
        let body = error(&HandlerError::Validation(ValidationError::MissingEmail));
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "validation");
        assert_eq!(body["message"], "Please enter an email address!");
    }
}

// src/cli/handlers.rs
use thiserror::Error;

use crate::core::{Config, CredentialStore, Lookup, StoreError};
use crate::generators::PasswordGenerator;
use crate::models::CredentialRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please don't leave Website or Password fields empty!")]
    MissingWebsiteOrPassword,

    #[error("Please enter an email address!")]
    MissingEmail,

    #[error("Please enter a website name to search!")]
    MissingWebsite,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// State shared by the generate, save and find handlers.
#[derive(Debug, Clone)]
pub struct Session {
    store: CredentialStore,
    default_email: String,
    generator: PasswordGenerator,
}

impl Session {
    pub fn new(store: CredentialStore, default_email: &str) -> Self {
        Self {
            store,
            default_email: default_email.to_string(),
            generator: PasswordGenerator::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(CredentialStore::new(&config.data_file), &config.default_email)
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn default_email(&self) -> &str {
        &self.default_email
    }
}

pub fn handle_generate(session: &Session) -> String {
    session.generator.generate_password()
}

/// Validate and persist one login. Nothing is read or written unless every
/// field is present.
pub fn handle_save(
    session: &Session,
    website: &str,
    email: &str,
    password: &str,
) -> Result<CredentialRecord, HandlerError> {
    let website = website.trim();
    let email = email.trim();

    if website.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingWebsiteOrPassword.into());
    }
    if email.is_empty() {
        return Err(ValidationError::MissingEmail.into());
    }

    let record = CredentialRecord::new(website, email, password);
    session.store.save(&record)?;
    Ok(record)
}

pub fn handle_find(session: &Session, website: &str) -> Result<Lookup, HandlerError> {
    let website = website.trim();
    if website.is_empty() {
        return Err(ValidationError::MissingWebsite.into());
    }

    Ok(session.store.find(website)?)
}

// src/cli/commands.rs
use clap::Subcommand;

use crate::cli::handlers::{handle_find, handle_generate, handle_save, HandlerError, Session};
use crate::cli::json_output;
use crate::core::Lookup;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Generate,

    /// Save the login for a website, replacing any previous one
    Save {
        /// Website name, used as the lookup key
        #[arg(required = true)]
        website: String,

        /// Email or username (defaults to DEFAULT_EMAIL)
        #[arg(long, short)]
        email: Option<String>,

        /// Password to store
        #[arg(long, short, conflicts_with = "generate")]
        password: Option<String>,

        /// Generate the password instead of passing one
        #[arg(long, short)]
        generate: bool,
    },

    /// Look up the login saved for a website
    Find {
        /// Exact website name
        #[arg(required = true)]
        website: String,
    },
}

/// Run one subcommand against the session and print its result.
pub fn run_command(session: &Session, command: CliCommand, json: bool) -> Result<(), HandlerError> {
    match command {
        CliCommand::Generate => {
            let password = handle_generate(session);
            if json {
                println!("{}", json_output::generated(&password));
            } else {
                println!("{}", password);
            }
        }

        CliCommand::Save { website, email, password, generate } => {
            let email = email.unwrap_or_else(|| session.default_email().to_string());
            let password = if generate {
                handle_generate(session)
            } else {
                password.unwrap_or_default()
            };

            let record = handle_save(session, &website, &email, &password)?;
            if json {
                println!("{}", json_output::saved(&record, generate));
            } else {
                if generate {
                    println!("Generated password: {}", record.password);
                }
                println!("Password for {} saved successfully!", record.website);
            }
        }

        CliCommand::Find { website } => {
            let lookup = handle_find(session, &website)?;
            if json {
                println!("{}", json_output::lookup(website.trim(), &lookup));
            } else {
                println!("{}", describe_lookup(website.trim(), &lookup));
            }
        }
    }

    Ok(())
}

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Run one subcommand and report its failure, returning the process exit code.
///
/// The not-found and no-data lookup outcomes are reported results, so they
/// exit with `EXIT_OK` like a success.
pub fn run_one_shot(session: &Session, command: CliCommand, json: bool) -> i32 {
    match run_command(session, command, json) {
        Ok(()) => EXIT_OK,
        Err(e) => {
            log::error!("Command failed: {}", e);
            if json {
                println!("{}", json_output::error(&e));
            } else {
                eprintln!("❌ {}", e);
            }
            EXIT_FAILURE
        }
    }
}

pub fn describe_lookup(website: &str, lookup: &Lookup) -> String {
    match lookup {
        Lookup::Found(record) => format!("Email: {}\nPassword: {}", record.email, record.password),
        Lookup::NotFound => format!("No password found for {}", website),
        Lookup::NoData => {
            "No password data found or file is corrupted. Save some passwords first!".to_string()
        }
    }
}

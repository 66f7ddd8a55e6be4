// src/cli/menu.rs
use console::style;
use inquire::{InquireError, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::commands::describe_lookup;
use crate::cli::handlers::{handle_find, handle_generate, handle_save, HandlerError, Session};
use crate::core::Lookup;

const GENERATE: &str = "🔐  Generate password";
const SAVE: &str = "💾  Save password";
const FIND: &str = "🔍  Find password";
const EXIT: &str = "❌  Exit";

// What the form remembers between actions
#[derive(Debug, Default)]
struct FormState {
    pending_password: Option<String>,
}

pub fn run_cli_menu(session: &Session, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSWORD KEEPER           ║");
    println!("╚══════════════════════════════════════╝");
    println!("Data file: {}", style(session.store().path().display()).dim());

    let mut form = FormState::default();

    while !should_exit.load(Ordering::SeqCst) {
        let selection = Select::new("Choose an option:", vec![GENERATE, SAVE, FIND, EXIT])
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc or Ctrl+C to exit.")
            .prompt_skippable();

        let result = match selection {
            Ok(Some(GENERATE)) => {
                let password = handle_generate(session);
                println!("\nGenerated password: {}\n", style(&password).green().bold());
                form.pending_password = Some(password);
                Ok(())
            }
            Ok(Some(SAVE)) => save_entry(session, &mut form),
            Ok(Some(FIND)) => find_entry(session),
            Ok(Some(_)) | Ok(None) => break,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {}
            Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => break,
            Err(e) => return Err(Box::new(e)),
        }
    }

    log::info!("Interactive session closed");
    println!("👋 Goodbye!");
    Ok(())
}

fn save_entry(session: &Session, form: &mut FormState) -> Result<(), InquireError> {
    let website = match Text::new("Website:").prompt_skippable()? {
        Some(website) => website,
        None => return Ok(()),
    };

    let email = match Text::new("Email/Username:")
        .with_initial_value(session.default_email())
        .prompt_skippable()?
    {
        Some(email) => email,
        None => return Ok(()),
    };

    let pending = form.pending_password.clone().unwrap_or_default();
    let password = match Text::new("Password:")
        .with_initial_value(&pending)
        .with_help_message("Leave as is to use the last generated password")
        .prompt_skippable()?
    {
        Some(password) => password,
        None => return Ok(()),
    };

    match handle_save(session, &website, &email, &password) {
        Ok(record) => {
            form.pending_password = None;
            println!("✅ Password for {} saved successfully!\n", style(&record.website).bold());
        }
        Err(e) => report(&e),
    }
    Ok(())
}

fn find_entry(session: &Session) -> Result<(), InquireError> {
    let website = match Text::new("Website:").prompt_skippable()? {
        Some(website) => website,
        None => return Ok(()),
    };

    match handle_find(session, &website) {
        Ok(lookup @ Lookup::Found(_)) => {
            println!("\n{}\n", describe_lookup(website.trim(), &lookup));
        }
        Ok(lookup) => {
            println!("ℹ️  {}\n", style(describe_lookup(website.trim(), &lookup)).yellow());
        }
        Err(e) => report(&e),
    }
    Ok(())
}

fn report(err: &HandlerError) {
    match err {
        HandlerError::Validation(e) => {
            println!("⚠️  {}\n", style(e).yellow());
        }
        HandlerError::Store(e) => {
            log::error!("Operation failed: {}", e);
            eprintln!("❌ {}\n", style(format!("Something went wrong: {}", e)).red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CredentialStore;

    #[test]
    fn test_menu_returns_without_prompting_once_exit_requested() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(CredentialStore::new(dir.path().join("data.json")), "me@example.com");
        let should_exit = Arc::new(AtomicBool::new(true));

        assert!(run_cli_menu(&session, should_exit).is_ok());
        assert!(!session.store().path().exists());
    }
}

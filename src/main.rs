use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::Args;
use crate::cli::handlers::Session;
use crate::core::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(data_file) = &args.data_file {
        config.data_file = data_file.clone();
    }

    logging::init_logging(&config)?;
    log::info!("Starting password keeper with data file {}", config.data_file.display());
    log::debug!("Loaded config: {:?}", config);

    let session = Session::from_config(&config);

    // One-shot command mode
    if let Some(command) = args.command {
        let code = cli::commands::run_one_shot(&session, command, args.json);
        if code != cli::commands::EXIT_OK {
            process::exit(code);
        }
        return Ok(());
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("Ctrl+C received. Closing after the current prompt...");
            should_exit.store(true, Ordering::SeqCst);
        })?;
    }

    // Interactive form
    cli::menu::run_cli_menu(&session, should_exit).map_err(|e| {
        log::error!("Interactive menu failed: {}", e);
        e
    })?;

    log::info!("Password keeper shut down");
    Ok(())
}

// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod handlers;
pub mod json_output;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate, save and look up website passwords", long_about = None)]
pub struct Args {
    /// Print command results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path of the JSON data file (overrides DATA_FILE)
    #[arg(long, short = 'f', global = true)]
    pub data_file: Option<PathBuf>,

    /// Command to execute; without one the interactive form starts
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_interactive() {
        let args = Args::try_parse_from(["rust_passkeeper"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "rust_passkeeper",
            "find",
            "example.com",
            "--json",
            "--data-file",
            "/tmp/x.json",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(args.data_file, Some(PathBuf::from("/tmp/x.json")));
        match args.command {
            Some(CliCommand::Find { website }) => assert_eq!(website, "example.com"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_save_password_and_generate_conflict() {
        let result = Args::try_parse_from([
            "rust_passkeeper",
            "save",
            "example.com",
            "--password",
            "abc",
            "--generate",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_defaults() {
        let args = Args::try_parse_from(["rust_passkeeper", "save", "example.com", "-g"]).unwrap();
        match args.command {
            Some(CliCommand::Save { website, email, password, generate }) => {
                assert_eq!(website, "example.com");
                assert!(email.is_none());
                assert!(password.is_none());
                assert!(generate);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}

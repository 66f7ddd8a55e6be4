// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_LOG_FILE: &str = "passkeeper.log";

// Runtime configuration, built from defaults and environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Storage
    pub data_file: PathBuf,

    // Form defaults
    pub default_email: String,

    // Logging
    pub log_level: LevelFilter,
    /// `None` sends log output to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            default_email: DEFAULT_EMAIL.to_string(),
            log_level: LevelFilter::Info,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Storage
        if let Some(path) = lookup("DATA_FILE") {
            if !path.trim().is_empty() {
                config.data_file = PathBuf::from(path);
            }
        }

        // Form defaults
        if let Some(email) = lookup("DEFAULT_EMAIL") {
            config.default_email = email.trim().to_string();
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = if file.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(file))
            };
        }

        config
    }
}

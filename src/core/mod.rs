// src/core/mod.rs

pub mod config;
pub mod store;

pub use config::Config;
pub use store::{CredentialStore, Lookup, StoreError};

// src/core/store.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::CredentialRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Data file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializeError(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

// On-disk shape of one entry; the website is the enclosing object key
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredCredential {
    email: String,
    password: String,
}

/// Result of reading the data file.
#[derive(Debug)]
pub enum StoreLoad {
    Loaded(StoredMap),
    /// Missing file, or a file holding nothing but whitespace.
    Absent,
    Corrupt(serde_json::Error),
}

/// Top-level object of the data file.
///
/// Entries are kept as raw JSON so a save rewrites every other website
/// exactly as it was read, extra fields included.
#[derive(Debug, Default)]
pub struct StoredMap(Map<String, Value>);

impl StoredMap {
    /// The entry for `website`, or `None` when it is absent or lacks a
    /// string `email` / `password`.
    pub fn get(&self, website: &str) -> Option<CredentialRecord> {
        let value = self.0.get(website)?;
        match StoredCredential::deserialize(value) {
            Ok(stored) => Some(CredentialRecord::new(website, &stored.email, &stored.password)),
            Err(e) => {
                log::warn!("Entry for '{}' is malformed: {}", website, e);
                None
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn websites(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Outcome of a lookup by website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(CredentialRecord),
    NotFound,
    /// The data file is missing, empty or unreadable as JSON.
    NoData,
}

/// JSON-file backed map of website -> credentials.
///
/// Every operation reads the whole file and, for saves, rewrites it in full.
/// There is no locking; a single process is expected to own the file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<StoreLoad> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Data file {} does not exist yet", self.path.display());
                return Ok(StoreLoad::Absent);
            }
            Err(e) => return Err(StoreError::IoError(e)),
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            log::debug!("Data file {} is empty", self.path.display());
            return Ok(StoreLoad::Absent);
        }

        // Invalid UTF-8 is a parse failure like any other
        match serde_json::from_slice::<Map<String, Value>>(&content) {
            Ok(map) => Ok(StoreLoad::Loaded(StoredMap(map))),
            Err(e) => {
                log::warn!("Data file {} could not be parsed: {}", self.path.display(), e);
                Ok(StoreLoad::Corrupt(e))
            }
        }
    }

    /// Merge one record into the file, replacing any entry for the same website.
    pub fn save(&self, record: &CredentialRecord) -> Result<()> {
        let mut map = match self.load()? {
            StoreLoad::Loaded(StoredMap(map)) => map,
            StoreLoad::Absent => Map::new(),
            StoreLoad::Corrupt(source) => {
                return Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let entry = serde_json::to_value(StoredCredential {
            email: record.email.clone(),
            password: record.password.clone(),
        })
        .map_err(StoreError::SerializeError)?;

        let replaced = map.insert(record.website.clone(), entry).is_some();

        self.write(&map)?;

        if replaced {
            log::info!("Replaced credentials for '{}'", record.website);
        } else {
            log::info!("Stored credentials for '{}'", record.website);
        }
        Ok(())
    }

    /// Exact, case-sensitive lookup. Never touches the file on disk.
    pub fn find(&self, website: &str) -> Result<Lookup> {
        let lookup = match self.load()? {
            StoreLoad::Loaded(map) => match map.get(website) {
                Some(record) => Lookup::Found(record),
                None => Lookup::NotFound,
            },
            StoreLoad::Absent | StoreLoad::Corrupt(_) => Lookup::NoData,
        };

        log::debug!("Lookup for '{}': {:?}", website, LookupKind::from(&lookup));
        Ok(lookup)
    }

    fn write(&self, map: &Map<String, Value>) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        map.serialize(&mut serializer)
            .map_err(StoreError::SerializeError)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, buf)?;
        Ok(())
    }
}

// Keeps passwords out of the debug log
#[derive(Debug)]
enum LookupKind {
    Found,
    NotFound,
    NoData,
}

impl From<&Lookup> for LookupKind {
    fn from(lookup: &Lookup) -> Self {
        match lookup {
            Lookup::Found(_) => LookupKind::Found,
            Lookup::NotFound => LookupKind::NotFound,
            Lookup::NoData => LookupKind::NoData,
        }
    }
}

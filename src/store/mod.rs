//! Origin-scoped key-value persistence.
//!
//! The browser build talks to `localStorage`; everything else (tests, native
//! tooling) uses [`MemoryStore`]. Keys are shared with whatever else the page
//! stores, so nothing here is prefixed.

use std::{error::Error, fmt::Display};

pub mod entry;
mod memory;

#[cfg(target_family = "wasm")]
mod local;

pub use entry::{JsonEntry, RawEntry};
#[cfg(target_family = "wasm")]
pub use local::LocalStore;
pub use memory::MemoryStore;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
    fn len(&self) -> Result<usize, StoreError>;
    /// Every key currently in the store, in no particular order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[derive(Debug)]
pub enum StoreError {
    Backend(String),
    Serialize {
        key: String,
        error: serde_json::Error,
    },
    Deserialize {
        key: String,
        error: serde_json::Error,
    },
    Parse {
        key: String,
        value: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Backend(message) => write!(f, "Backend: {message}"),
            StoreError::Serialize { key, error } => write!(f, "Serialize '{key}': {error}"),
            StoreError::Deserialize { key, error } => write!(f, "Deserialize '{key}': {error}"),
            StoreError::Parse { key, value } => {
                write!(f, "Parse '{key}': unexpected value '{value}'")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Serialize { error, .. } | StoreError::Deserialize { error, .. } => {
                Some(error)
            }
            StoreError::Backend(_) | StoreError::Parse { .. } => None,
        }
    }
}

//! Persistence adapter for in-progress form input
//!
//! The whole record is written as JSON under one key after every change and
//! read back once on load. Anything unreadable is treated as absent.

use regform_types::FormData;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::resolver;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "formData";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage rejected the write: {0}")]
    Write(String),

    #[error("failed to encode form data")]
    Encode(#[from] serde_json::Error),
}

/// Synchronous string key-value store (browser `localStorage` or in-memory)
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Backend name for log output
    fn name(&self) -> &'static str;
}

/// In-memory storage backend
///
/// Used natively and in tests; contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage, e.g. a snapshot left by an earlier visit
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self { items }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(|s| s.as_str())
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Reads the stored snapshot, falling back to defaults silently
///
/// Absent keys, read failures, malformed JSON and wrongly typed values all
/// produce `FormData::default()`. The result already satisfies the
/// country/city invariant.
pub fn load<S: Storage + ?Sized>(storage: &S, key: &str) -> FormData {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(backend = storage.name(), key, "no saved form data, using defaults");
            return FormData::default();
        }
        Err(e) => {
            warn!(backend = storage.name(), key, error = %e, "could not read saved form data");
            return FormData::default();
        }
    };

    match serde_json::from_str::<FormData>(&raw) {
        Ok(mut data) => {
            resolver::resolve(&mut data);
            data
        }
        Err(e) => {
            debug!(backend = storage.name(), key, error = %e, "discarding malformed form data");
            FormData::default()
        }
    }
}

/// Writes the full record under `key`
pub fn save<S: Storage + ?Sized>(
    storage: &mut S,
    key: &str,
    data: &FormData,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string(data)?;
    storage.set_item(key, &json)
}

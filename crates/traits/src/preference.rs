//! Persisted user preferences.
//!
//! The engine only ever reads the template preference; writing happens from
//! application code (or the CLI) outside a render call.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Key under which the preferred template id is stored.
pub const TEMPLATE_PREFERENCE_KEY: &str = "folio.template";

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Preference store lock poisoned")]
    LockPoisoned,

    #[error("Failed to persist preferences to '{path}': {message}")]
    PersistFailed { path: String, message: String },

    #[error("Corrupt preference file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string key/value store that survives between sessions.
pub trait PreferenceStore: Send + Sync + Debug {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a store holding one value.
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: RwLock::new(values),
        }
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| PreferenceError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

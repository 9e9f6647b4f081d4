//! Implements an in-memory key/value store.

use std::collections::HashMap;

use crate::Error;

use super::{KeyValueStore, validate_key};

/// Keeps values in memory. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        validate_key(key)?;

        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        validate_key(key)?;

        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

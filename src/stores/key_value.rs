//! Defines the key/value storage trait.

use crate::Error;

/// Stores string values under string keys, like a browser's local storage.
pub trait KeyValueStore {
    /// Retrieve the value stored under `key`, or `None` if the key was never set.
    ///
    /// # Errors
    /// Implementers should return [Error::StorageReadFailure] if the backend
    /// could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Replace the value stored under `key`.
    ///
    /// Readers must either see the old value or the new value, never a mix.
    ///
    /// # Errors
    /// Implementers should return [Error::StorageWriteFailure] if the backend
    /// could not be written to.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

/// Check that `key` only uses ASCII letters, digits, `-` and `_`.
///
/// # Errors
/// Returns [Error::InvalidStorageKey] for empty keys or keys with other characters.
pub fn validate_key(key: &str) -> Result<(), Error> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if is_valid {
        Ok(())
    } else {
        Err(Error::InvalidStorageKey(key.to_owned()))
    }
}

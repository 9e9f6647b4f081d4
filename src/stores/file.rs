//! Implements a key/value store backed by JSON files in a directory.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::Error;

use super::{KeyValueStore, validate_key};

/// Stores each key as `<key>.json` inside a data directory.
///
/// Writes go to a temporary file that is then renamed over the target, so a
/// crash mid-write leaves the previous value in place.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`.
    ///
    /// The directory is created on the first write if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the stored files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file that holds the value for `key`.
    ///
    /// # Errors
    /// Returns [Error::InvalidStorageKey] if `key` is not a valid key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, Error> {
        validate_key(key)?;

        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!("Read {} bytes from {}", text.len(), path.display());
                Ok(Some(text))
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Error::StorageReadFailure(format!(
                "{}: {error}",
                path.display()
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;
        let temp_path = self.root.join(format!("{key}.json.tmp"));

        write_then_rename(&self.root, &temp_path, &path, value)
            .map_err(|error| Error::StorageWriteFailure(format!("{}: {error}", path.display())))?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());

        Ok(())
    }
}

fn write_then_rename(root: &Path, temp_path: &Path, path: &Path, value: &str) -> io::Result<()> {
    fs::create_dir_all(root)?;

    let mut file = fs::File::create(temp_path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()?;

    fs::rename(temp_path, path)
}

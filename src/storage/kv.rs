//! String-keyed local storage.
//!
//! A [`KeyValueStore`] holds whole string values under string keys. The
//! [`FileStore`] keeps one file per key in a directory; the [`MemoryStore`]
//! keeps everything in process.

use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
};

/// An error raised by a [`KeyValueStore`].
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    /// The key cannot be mapped onto the backing store.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// An I/O error occurred.
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

/// A local string-keyed store of string values.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;
}

/// A directory backed store keeping each key in `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at the given directory.
    ///
    /// The directory is created on first write.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KvError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(KvError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|source| KvError::Io {
            path: self.root.clone(),
            source,
        })?;

        // Write a sibling first so a failed write leaves the old value intact.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|source| KvError::Io {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &path).map_err(|source| KvError::Io { path, source })?;

        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}

/// An in-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

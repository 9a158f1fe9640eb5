//! Key-value store interface and implementations
//!
//! The roster lives under a single key as one serialized document. Stores
//! hold opaque string values; parsing is the caller's concern.

use crate::error::{Result, RosterError};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Trait for durable key-value storage operations
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`, returning whether it was present
    fn remove_item(&self, key: &str) -> Result<bool>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        (**self).remove_item(key)
    }
}

/// File-backed store: one `<key>.json` document per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `data_dir`; the directory is created on first write
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the document backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(RosterError::ConfigurationError {
                message: format!("Invalid storage key: {:?}", key),
            }
            .into());
        }
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RosterError::StorageReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let write_failed = |e: std::io::Error| RosterError::StorageWriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        };

        std::fs::create_dir_all(&self.data_dir).map_err(write_failed)?;

        // Write beside the target and rename so readers never see a partial document
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value).map_err(write_failed)?;
        std::fs::rename(&tmp_path, &path).map_err(write_failed)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(RosterError::StorageWriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            }
            .into()),
        }
    }
}

/// In-memory store, used for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|_| RosterError::InternalError {
                message: "Failed to acquire store read lock".to_string(),
            })?;

        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| RosterError::InternalError {
                message: "Failed to acquire store write lock".to_string(),
            })?;

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        let mut items = self
            .items
            .write()
            .map_err(|_| RosterError::InternalError {
                message: "Failed to acquire store write lock".to_string(),
            })?;

        Ok(items.remove(key).is_some())
    }
}

//! Key-value persistence adapter.
//!
//! The stores treat persistence as best-effort: serialization failures,
//! missing entries, and I/O errors are logged and reported as `None` or
//! `false`, never propagated to the caller. Two backends are provided,
//! a file-per-key store for durable data and an in-memory store for
//! tests and ephemeral sessions.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::STORE_FILE_EXTENSION;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Durable key-value backend.
///
/// Object-safe so stores can be wired against any backend (or a mock).
/// Values are opaque strings; JSON framing lives in [`KeyValueStoreExt`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under a key, `None` if absent or unreadable
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Write the raw value under a key, `false` on failure
    fn set_raw(&self, key: &str, value: &str) -> bool;

    /// Remove a key. Removing an absent key counts as success.
    fn remove(&self, key: &str) -> bool;
}

/// JSON helpers over any [`KeyValueStore`].
///
/// Deserialization failures are logged and reported as `None`, matching
/// the backend's own failure policy.
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize the value under a key
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to deserialize stored value");
                None
            }
        }
    }

    /// Serialize and write a value under a key
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(json) => self.set_raw(key, &json),
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to serialize value");
                false
            }
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Keys map to file names, so only a conservative character set is allowed.
fn valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// File-per-key store under a data directory.
///
/// The durable backend the production wiring uses. Writes are whole-file
/// replacements with no versioning: two processes sharing a data
/// directory overwrite each other, last write wins (single-writer
/// assumption).
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::error!(dir = %dir.display(), error = %e, "Failed to create data directory");
        }
        Self { dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, STORE_FILE_EXTENSION))
    }

    /// Directory this store persists into
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        if !valid_key(key) {
            tracing::error!(key = %key, "Rejected invalid storage key");
            return None;
        }
        match fs::read_to_string(self.entry_path(key)) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to read stored entry");
                None
            }
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> bool {
        if !valid_key(key) {
            tracing::error!(key = %key, "Rejected invalid storage key");
            return false;
        }
        match fs::write(self.entry_path(key), value) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to write stored entry");
                false
            }
        }
    }

    fn remove(&self, key: &str) -> bool {
        if !valid_key(key) {
            tracing::error!(key = %key, "Rejected invalid storage key");
            return false;
        }
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to remove stored entry");
                false
            }
        }
    }
}

/// In-memory store backed by a `HashMap`.
///
/// Used by tests and anywhere durability is not wanted.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> bool {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        true
    }
}

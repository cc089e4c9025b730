//! Key-value persistence for form snapshots.
//!
//! [`StorageBackend`] stores raw bytes by key. [`SnapshotStore`] wraps a
//! backend with a fixed key and JSON (de)serialization so the form core
//! never deals with bytes or a specific host storage API.

mod memory;
mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use crate::error::StorageError;
use crate::store::Snapshot;

/// Key under which snapshots are stored unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "formData";

/// Backend trait for key-value storage.
///
/// Implementations handle raw byte storage/retrieval.
pub trait StorageBackend: Send + Sync {
    /// Get raw bytes for a key.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Set raw bytes for a key, replacing any previous value.
    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed snapshot storage under a single key.
#[derive(Clone)]
pub struct SnapshotStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl SnapshotStore {
    /// Create a store writing to `key` on the given backend.
    pub fn new(backend: impl StorageBackend + 'static, key: impl Into<String>) -> Self {
        Self::from_shared(Arc::new(backend), key)
    }

    /// Create a store over a backend shared with other stores.
    pub fn from_shared(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The key snapshots are stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored snapshot, if any.
    pub fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        match self.backend.get_bytes(&self.key)? {
            Some(bytes) => Ok(Some(
                serde_json::from_slice(&bytes).map_err(StorageError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Store a snapshot, replacing the previous one.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(snapshot).map_err(StorageError::Serialization)?;
        self.backend.set_bytes(&self.key, bytes)
    }

    /// Remove the stored snapshot.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.delete(&self.key)
    }
}

impl std::fmt::Debug for SnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotStore").field("key", &self.key).finish_non_exhaustive()
    }
}

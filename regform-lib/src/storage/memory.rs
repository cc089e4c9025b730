//! In-memory storage backend using DashMap

use dashmap::DashMap;

use super::StorageBackend;
use crate::error::StorageError;

/// An in-memory backend backed by a concurrent hash map.
///
/// Data is lost when the process exits. An optional byte quota makes
/// writes fail the way a full browser store would.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: DashMap<String, Vec<u8>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    /// Creates a new empty backend with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that rejects writes once the stored values would
    /// exceed `bytes` in total.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            store: DashMap::new(),
            quota: Some(bytes),
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn used_excluding(&self, key: &str) -> usize {
        self.store
            .iter()
            .filter(|entry| entry.key() != key)
            .map(|entry| entry.value().len())
            .sum()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.store.get(key).map(|entry| entry.value().clone()))
    }

    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let available = quota.saturating_sub(self.used_excluding(key));
            if value.len() > available {
                return Err(StorageError::QuotaExceeded {
                    requested: value.len(),
                    available,
                });
            }
        }
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key);
        Ok(())
    }
}

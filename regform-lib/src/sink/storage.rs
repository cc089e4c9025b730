//! Sink that writes submissions to key-value storage.

use super::SubmissionSink;
use crate::error::SinkError;
use crate::storage::SnapshotStore;
use crate::store::Snapshot;

/// Persists each submitted snapshot under the store's fixed key and
/// restores it on load.
#[derive(Debug, Clone)]
pub struct StorageSink {
    store: SnapshotStore,
}

impl StorageSink {
    /// Create a sink over a snapshot store.
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// The underlying snapshot store.
    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }
}

impl SubmissionSink for StorageSink {
    fn persist(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.store.save(snapshot)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SinkError> {
        Ok(self.store.load()?)
    }

    fn name(&self) -> &'static str {
        "storage"
    }
}

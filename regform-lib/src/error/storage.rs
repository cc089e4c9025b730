//! Storage error types

/// Errors that can occur while reading or writing the key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// SQLite backend failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Writing the value would exceed the backend's capacity.
    #[error("quota exceeded: {requested} bytes requested, {available} bytes available")]
    QuotaExceeded {
        /// Size of the rejected value.
        requested: usize,
        /// Remaining capacity at the time of the write.
        available: usize,
    },

    /// The snapshot could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),

    /// The stored bytes are not a valid snapshot.
    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),
}

impl StorageError {
    /// Returns `true` if the backend rejected the write for lack of space.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}

//! Sink error types

use super::StorageError;

/// Errors that can occur while forwarding a snapshot to an external sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The backing key-value store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The sink could not render the snapshot for output.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

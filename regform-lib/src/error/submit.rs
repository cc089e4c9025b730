//! Submission error types

use super::SinkError;

/// Errors that abort a submission after validation passed.
///
/// Validation failures are not errors; they are returned as an
/// [`ErrorMap`](crate::validation::ErrorMap) inside the submit outcome.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The sink rejected the validated snapshot.
    #[error("failed to persist submission: {0}")]
    Persist(#[from] SinkError),
}

//! Submission handling.
//!
//! A two-state machine: `Idle` until a snapshot passes validation and the
//! sink accepts it, then `Submitted`. Every attempt re-runs validation.

use crate::error::SubmitError;
use crate::schema::Schema;
use crate::sink::SubmissionSink;
use crate::store::Snapshot;
use crate::validation::{ErrorMap, validate};

/// Submission state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No accepted submission for the current data.
    #[default]
    Idle,
    /// The last attempt was validated and persisted.
    Submitted,
}

/// Result of a submission attempt that did not fail in the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Snapshot was valid and forwarded to the sink.
    Submitted,
    /// One or more fields failed; nothing was written.
    Invalid(ErrorMap),
    /// Snapshot equals the last persisted one and the duplicate guard is on;
    /// nothing was written and the handler is `Submitted`.
    Duplicate,
}

impl SubmitOutcome {
    /// Check if the snapshot passed validation.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// Validation errors, if the attempt was rejected.
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Runs validation and forwards valid snapshots to a sink.
#[derive(Debug, Default)]
pub struct SubmissionHandler {
    state: SubmissionState,
    deduplicate: bool,
    last_persisted: Option<Snapshot>,
    attempts: u64,
    writes: u64,
}

impl SubmissionHandler {
    /// Create a handler that writes on every valid submit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the duplicate guard.
    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.deduplicate = enabled;
        self
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Number of submit attempts, valid or not.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Number of snapshots the sink accepted.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// The last snapshot the sink accepted.
    pub fn last_persisted(&self) -> Option<&Snapshot> {
        self.last_persisted.as_ref()
    }

    /// Validate `snapshot` and, if valid, forward it to `sink`.
    ///
    /// Validation failures return `Ok(SubmitOutcome::Invalid)` and leave the
    /// handler `Idle`. A sink failure returns `Err` and also leaves it `Idle`.
    pub fn submit<S>(
        &mut self,
        schema: &Schema,
        snapshot: &Snapshot,
        sink: &mut S,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        S: SubmissionSink + ?Sized,
    {
        self.attempts += 1;

        let errors = validate(schema, snapshot);
        if errors.is_invalid() {
            log::debug!("submission rejected: {} invalid fields", errors.len());
            self.state = SubmissionState::Idle;
            return Ok(SubmitOutcome::Invalid(errors));
        }

        if self.deduplicate && self.last_persisted.as_ref() == Some(snapshot) {
            log::debug!("submission unchanged since last write, skipping {} sink", sink.name());
            self.state = SubmissionState::Submitted;
            return Ok(SubmitOutcome::Duplicate);
        }

        if let Err(e) = sink.persist(snapshot) {
            log::warn!("{} sink rejected submission: {}", sink.name(), e);
            self.state = SubmissionState::Idle;
            return Err(e.into());
        }

        self.writes += 1;
        self.state = SubmissionState::Submitted;
        self.last_persisted = Some(snapshot.clone());
        log::info!("submission accepted by {} sink", sink.name());
        Ok(SubmitOutcome::Submitted)
    }

    /// Record a snapshot the sink already holds, e.g. one restored on mount.
    pub fn remember_persisted(&mut self, snapshot: Snapshot) {
        self.last_persisted = Some(snapshot);
    }

    /// Return to `Idle`.
    ///
    /// The last persisted snapshot is kept: the sink still holds it.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SinkError, StorageError};

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<Snapshot>,
        fail: bool,
    }

    impl SubmissionSink for RecordingSink {
        fn persist(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Storage(StorageError::QuotaExceeded {
                    requested: 10,
                    available: 0,
                }));
            }
            self.writes.push(snapshot.clone());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn schema() -> Schema {
        Schema::builder()
            .field("name")
            .required("Name is required")
            .build()
            .unwrap()
    }

    #[test]
    fn test_invalid_stays_idle_without_write() {
        let mut handler = SubmissionHandler::new();
        let mut sink = RecordingSink::default();

        let outcome = handler.submit(&schema(), &Snapshot::new(), &mut sink).unwrap();

        assert_eq!(outcome.errors().unwrap().get("name"), Some("Name is required"));
        assert_eq!(handler.state(), SubmissionState::Idle);
        assert!(sink.writes.is_empty());
    }

    #[test]
    fn test_valid_transitions_to_submitted() {
        let mut handler = SubmissionHandler::new();
        let mut sink = RecordingSink::default();
        let snapshot = Snapshot::new().with("name", "Ana");

        let outcome = handler.submit(&schema(), &snapshot, &mut sink).unwrap();

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(handler.state(), SubmissionState::Submitted);
        assert_eq!(sink.writes, vec![snapshot]);
    }

    #[test]
    fn test_repeat_submit_writes_twice_by_default() {
        let mut handler = SubmissionHandler::new();
        let mut sink = RecordingSink::default();
        let snapshot = Snapshot::new().with("name", "Ana");

        handler.submit(&schema(), &snapshot, &mut sink).unwrap();
        handler.submit(&schema(), &snapshot, &mut sink).unwrap();

        assert_eq!(sink.writes.len(), 2);
        assert_eq!(handler.writes(), 2);
    }

    #[test]
    fn test_duplicate_guard_skips_unchanged_snapshot() {
        let mut handler = SubmissionHandler::new().with_deduplication(true);
        let mut sink = RecordingSink::default();
        let snapshot = Snapshot::new().with("name", "Ana");

        handler.submit(&schema(), &snapshot, &mut sink).unwrap();
        let second = handler.submit(&schema(), &snapshot, &mut sink).unwrap();
        let changed = Snapshot::new().with("name", "Bea");
        let third = handler.submit(&schema(), &changed, &mut sink).unwrap();

        assert_eq!(second, SubmitOutcome::Duplicate);
        assert_eq!(third, SubmitOutcome::Submitted);
        assert_eq!(sink.writes.len(), 2);
        assert_eq!(handler.attempts(), 3);
    }

    #[test]
    fn test_duplicate_guard_survives_invalid_attempt() {
        let mut handler = SubmissionHandler::new().with_deduplication(true);
        let mut sink = RecordingSink::default();
        let snapshot = Snapshot::new().with("name", "Ana");

        handler.submit(&schema(), &snapshot, &mut sink).unwrap();
        handler.submit(&schema(), &Snapshot::new(), &mut sink).unwrap();
        assert_eq!(handler.state(), SubmissionState::Idle);

        let again = handler.submit(&schema(), &snapshot, &mut sink).unwrap();

        assert_eq!(again, SubmitOutcome::Duplicate);
        assert_eq!(handler.state(), SubmissionState::Submitted);
        assert_eq!(sink.writes.len(), 1);
    }

    #[test]
    fn test_remembered_snapshot_counts_as_persisted() {
        let mut handler = SubmissionHandler::new().with_deduplication(true);
        let mut sink = RecordingSink::default();
        let snapshot = Snapshot::new().with("name", "Ana");
        handler.remember_persisted(snapshot.clone());

        let outcome = handler.submit(&schema(), &snapshot, &mut sink).unwrap();

        assert_eq!(outcome, SubmitOutcome::Duplicate);
        assert_eq!(handler.writes(), 0);
        assert!(sink.writes.is_empty());
    }

    #[test]
    fn test_sink_failure_stays_idle() {
        let mut handler = SubmissionHandler::new();
        let mut sink = RecordingSink {
            fail: true,
            ..Default::default()
        };

        let result = handler.submit(&schema(), &Snapshot::new().with("name", "Ana"), &mut sink);

        assert!(matches!(result, Err(SubmitError::Persist(_))));
        assert_eq!(handler.state(), SubmissionState::Idle);
        assert!(handler.last_persisted().is_none());
    }

    #[test]
    fn test_invalid_after_submitted_returns_to_idle() {
        let mut handler = SubmissionHandler::new();
        let mut sink = RecordingSink::default();

        handler
            .submit(&schema(), &Snapshot::new().with("name", "Ana"), &mut sink)
            .unwrap();
        handler.submit(&schema(), &Snapshot::new(), &mut sink).unwrap();

        assert_eq!(handler.state(), SubmissionState::Idle);
        assert_eq!(sink.writes.len(), 1);
    }
}

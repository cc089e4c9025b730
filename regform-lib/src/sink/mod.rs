//! Destinations for validated submissions.

mod logger;
mod storage;

pub use logger::LogSink;
pub use storage::StorageSink;

use crate::error::SinkError;
use crate::store::Snapshot;

/// Receiver of successfully validated snapshots.
///
/// A sink may also supply a previously persisted snapshot so the form can
/// be restored on mount.
pub trait SubmissionSink {
    /// Forward a validated snapshot.
    fn persist(&mut self, snapshot: &Snapshot) -> Result<(), SinkError>;

    /// Previously persisted snapshot, if the sink keeps one.
    fn load(&self) -> Result<Option<Snapshot>, SinkError> {
        Ok(None)
    }

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn persist(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        (**self).persist(snapshot)
    }

    fn load(&self) -> Result<Option<Snapshot>, SinkError> {
        (**self).load()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

//! Sink that writes submissions to the log.

use super::SubmissionSink;
use crate::error::SinkError;
use crate::store::Snapshot;

/// Logs each submitted snapshot as a JSON object at `info`.
#[derive(Debug, Clone, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for LogSink {
    fn persist(&mut self, snapshot: &Snapshot) -> Result<(), SinkError> {
        let json = serde_json::to_string(snapshot)?;
        log::info!(target: "regform::submission", "{}", json);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

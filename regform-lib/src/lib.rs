//! Registration form logic
//!
//! Declarative field schemas, a form state store with explicit observers,
//! a pure validator, and a submission handler that forwards validated
//! snapshots to a log or key-value sink.

pub mod error;
pub mod form;
pub mod forms;
pub mod schema;
pub mod sink;
pub mod storage;
pub mod store;
pub mod submit;
pub mod validation;

pub use form::{Form, FormConfig, FormWarning, ValidationMode};
pub use schema::{FieldDefinition, Rule, RuleKind, Schema};
pub use store::{FormStore, Snapshot};
pub use submit::{SubmissionHandler, SubmissionState, SubmitOutcome};
pub use validation::{ErrorMap, FieldError, validate, validate_field};

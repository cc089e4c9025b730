//! Form controller.
//!
//! [`Form`] ties a schema, a store, a submission handler and a sink
//! together. It is the surface a presentation layer binds to: input and
//! blur events go in, error messages and warnings come out.

mod config;

pub use config::{FormConfig, ValidationMode};

use crate::error::SubmitError;
use crate::schema::Schema;
use crate::sink::SubmissionSink;
use crate::store::{FormStore, Snapshot, StoreEvent, SubscriptionId};
use crate::submit::{SubmissionHandler, SubmissionState, SubmitOutcome};
use crate::validation::{ErrorMap, validate};

/// A problem that is not tied to a single field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormWarning {
    /// The saved snapshot could not be restored; the form started empty.
    #[error("Saved values could not be restored: {0}")]
    LoadFailed(String),
    /// The validated snapshot could not be saved.
    #[error("Your submission could not be saved: {0}")]
    PersistFailed(String),
}

/// One mounted form instance.
pub struct Form<S> {
    schema: Schema,
    store: FormStore,
    handler: SubmissionHandler,
    sink: S,
    config: FormConfig,
    errors: ErrorMap,
    submit_attempted: bool,
    warning: Option<FormWarning>,
}

impl<S: SubmissionSink> Form<S> {
    /// Mount a form, restoring saved values from the sink if configured.
    pub fn mount(schema: Schema, sink: S, config: FormConfig) -> Self {
        let mut store = FormStore::new(&schema);
        let mut handler = SubmissionHandler::new().with_deduplication(config.deduplicate);
        let mut warning = None;

        if config.hydrate_on_mount {
            match sink.load() {
                Ok(Some(saved)) => {
                    handler.remember_persisted(saved.clone());
                    store.hydrate(saved);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("failed to restore form from {} sink: {}", sink.name(), e);
                    warning = Some(FormWarning::LoadFailed(e.to_string()));
                }
            }
        }

        Self {
            schema,
            store,
            handler,
            sink,
            config,
            errors: ErrorMap::new(),
            submit_attempted: false,
            warning,
        }
    }

    /// The form's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The form's configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Read access to the value store.
    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// The submission sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Current value of a field.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.store.get(field)
    }

    /// Copy of all current values.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Register an observer on the value store.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent, &Snapshot) + 'static) -> SubscriptionId {
        self.store.subscribe(observer)
    }

    /// Remove a store observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Handle an input event.
    ///
    /// In `OnBlur` mode an edit still re-validates when a touched field
    /// compares itself against the edited one.
    pub fn input(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let recheck = self.config.validation_mode == ValidationMode::OnChange
            || self.submit_attempted
            || self.has_touched_dependent(&field);

        self.store.set(field, value);
        if recheck {
            self.revalidate();
        }
    }

    /// Handle a blur event.
    pub fn blur(&mut self, field: impl Into<String>) {
        self.store.touch(field);
        if self.config.validation_mode == ValidationMode::OnBlur {
            self.revalidate();
        }
    }

    /// Restore values from a snapshot, as if loaded from storage.
    pub fn hydrate(&mut self, snapshot: Snapshot) {
        self.store.hydrate(snapshot);
        if self.submit_attempted {
            self.revalidate();
        }
    }

    /// Recompute the error map from the current values.
    pub fn validate(&mut self) -> &ErrorMap {
        self.revalidate();
        &self.errors
    }

    /// The most recently computed error map.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The error to display next to a field.
    ///
    /// Errors are shown once the field was touched or a submit was attempted.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.submit_attempted || self.store.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Handle a submit request.
    ///
    /// Sink failures are also recorded as a [`FormWarning`].
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.submit_attempted = true;
        self.warning = None;

        let snapshot = self.store.snapshot();
        let result = self.handler.submit(&self.schema, &snapshot, &mut self.sink);

        match &result {
            Ok(SubmitOutcome::Invalid(errors)) => self.errors = errors.clone(),
            Ok(_) => {
                self.errors = ErrorMap::new();
                self.store.clear_dirty();
            }
            Err(SubmitError::Persist(e)) => {
                self.errors = ErrorMap::new();
                self.warning = Some(FormWarning::PersistFailed(e.to_string()));
            }
        }

        result
    }

    /// Submission state.
    pub fn state(&self) -> SubmissionState {
        self.handler.state()
    }

    /// The submission handler.
    pub fn handler(&self) -> &SubmissionHandler {
        &self.handler
    }

    /// The current non-field warning, if any.
    pub fn warning(&self) -> Option<&FormWarning> {
        self.warning.as_ref()
    }

    /// Dismiss the current warning.
    pub fn clear_warning(&mut self) {
        self.warning = None;
    }

    /// Clear values, touched state, errors and submission state.
    pub fn reset(&mut self) {
        self.store.reset();
        self.handler.reset();
        self.errors = ErrorMap::new();
        self.submit_attempted = false;
        self.warning = None;
    }

    fn has_touched_dependent(&self, field: &str) -> bool {
        self.config.validation_mode == ValidationMode::OnBlur
            && self
                .schema
                .dependents_of(field)
                .any(|dependent| self.store.is_touched(dependent))
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.schema, self.store.values());
    }
}

impl<S> std::fmt::Debug for Form<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("store", &self.store)
            .field("state", &self.handler.state())
            .field("errors", &self.errors)
            .field("warning", &self.warning)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::StorageSink;
    use crate::storage::{MemoryBackend, SnapshotStore, StorageBackend};

    fn schema() -> Schema {
        Schema::builder()
            .field("name")
            .required("Name is required")
            .min_length(2, "Name must be at least 2 characters")
            .field("email")
            .required("Email is required")
            .email("Invalid email")
            .build()
            .unwrap()
    }

    fn storage_sink() -> StorageSink {
        StorageSink::new(SnapshotStore::new(MemoryBackend::new(), "formData"))
    }

    #[test]
    fn test_errors_hidden_until_touched_or_submitted() {
        let mut form = Form::mount(
            schema(),
            storage_sink(),
            FormConfig::default().with_validation_mode(ValidationMode::OnChange),
        );

        form.input("name", "A");
        assert_eq!(form.errors().get("name"), Some("Name must be at least 2 characters"));
        assert_eq!(form.visible_error("name"), None);

        form.blur("name");
        assert_eq!(form.visible_error("name"), Some("Name must be at least 2 characters"));
        assert_eq!(form.visible_error("email"), None);
    }

    #[test]
    fn test_on_submit_mode_does_not_validate_on_input() {
        let mut form = Form::mount(schema(), storage_sink(), FormConfig::default());
        form.input("name", "A");
        form.blur("name");
        assert!(form.errors().is_valid());
    }

    #[test]
    fn test_on_blur_mode_validates_on_blur() {
        let mut form = Form::mount(
            schema(),
            storage_sink(),
            FormConfig::default().with_validation_mode(ValidationMode::OnBlur),
        );
        form.input("email", "nope");
        assert!(form.errors().is_valid());
        form.blur("email");
        assert_eq!(form.visible_error("email"), Some("Invalid email"));
    }

    #[test]
    fn test_on_blur_mode_rechecks_touched_confirmation() {
        let schema = Schema::builder()
            .field("password")
            .required("Password is required")
            .field("confirmPassword")
            .equals_field("password", "Passwords must match")
            .build()
            .unwrap();
        let mut form = Form::mount(
            schema,
            storage_sink(),
            FormConfig::default().with_validation_mode(ValidationMode::OnBlur),
        );
        form.input("password", "password1");
        form.input("confirmPassword", "password1");
        form.blur("confirmPassword");
        assert!(form.errors().is_valid());

        form.input("password", "password2");

        assert_eq!(form.visible_error("confirmPassword"), Some("Passwords must match"));
        assert_eq!(form.visible_error("password"), None);
    }

    #[test]
    fn test_on_blur_mode_ignores_untouched_confirmation() {
        let schema = Schema::builder()
            .field("password")
            .field("confirmPassword")
            .equals_field("password", "Passwords must match")
            .build()
            .unwrap();
        let mut form = Form::mount(
            schema,
            storage_sink(),
            FormConfig::default().with_validation_mode(ValidationMode::OnBlur),
        );

        form.input("password", "password1");

        assert!(form.errors().is_valid());
    }

    #[test]
    fn test_errors_update_on_input_after_failed_submit() {
        let mut form = Form::mount(schema(), storage_sink(), FormConfig::default());

        let outcome = form.submit().unwrap();
        assert!(!outcome.is_accepted());
        assert_eq!(form.visible_error("email"), Some("Email is required"));

        form.input("email", "ana@example.com");
        assert_eq!(form.visible_error("email"), None);
        assert_eq!(form.visible_error("name"), Some("Name is required"));
    }

    #[test]
    fn test_mount_hydrates_from_sink() {
        let sink = storage_sink();
        sink.store()
            .save(&Snapshot::new().with("name", "Ana"))
            .unwrap();

        let form = Form::mount(schema(), sink, FormConfig::default());

        assert_eq!(form.value("name"), Some("Ana"));
        assert_eq!(form.value("email"), Some(""));
        assert!(form.warning().is_none());
    }

    #[test]
    fn test_mount_skips_hydration_when_disabled() {
        let sink = storage_sink();
        sink.store()
            .save(&Snapshot::new().with("name", "Ana"))
            .unwrap();

        let form = Form::mount(schema(), sink, FormConfig::default().with_hydrate_on_mount(false));

        assert_eq!(form.value("name"), Some(""));
    }

    #[test]
    fn test_corrupt_saved_values_start_empty_with_warning() {
        let backend = std::sync::Arc::new(MemoryBackend::new());
        backend.set_bytes("formData", b"{".to_vec()).unwrap();
        let sink = StorageSink::new(SnapshotStore::from_shared(backend, "formData"));

        let form = Form::mount(schema(), sink, FormConfig::default());

        assert_eq!(form.value("name"), Some(""));
        assert!(matches!(form.warning(), Some(FormWarning::LoadFailed(_))));
    }

    #[test]
    fn test_persist_failure_sets_warning() {
        let sink = StorageSink::new(SnapshotStore::new(MemoryBackend::with_quota(8), "formData"));
        let mut form = Form::mount(schema(), sink, FormConfig::default());
        form.input("name", "Ana");
        form.input("email", "ana@example.com");

        assert!(form.submit().is_err());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(matches!(form.warning(), Some(FormWarning::PersistFailed(_))));

        form.clear_warning();
        assert!(form.warning().is_none());
    }

    #[test]
    fn test_reset() {
        let mut form = Form::mount(schema(), storage_sink(), FormConfig::default());
        form.input("name", "Ana");
        form.input("email", "ana@example.com");
        form.submit().unwrap();
        assert_eq!(form.state(), SubmissionState::Submitted);

        form.reset();

        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.value("name"), Some(""));
        assert!(form.errors().is_valid());
    }
}

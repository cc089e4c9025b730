//! Form configuration

use crate::storage::DEFAULT_STORAGE_KEY;

/// When the error map is recomputed outside of submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Only on submit, then on every change after the first attempt.
    #[default]
    OnSubmit,
    /// Also when a field loses focus.
    OnBlur,
    /// On every edit.
    OnChange,
}

/// Configuration for a [`Form`](super::Form).
///
/// # Example
///
/// ```
/// use regform_lib::form::{FormConfig, ValidationMode};
///
/// let config = FormConfig::default()
///     .with_storage_key("signup")
///     .with_validation_mode(ValidationMode::OnBlur)
///     .with_deduplication(true);
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Key the storage sink writes under.
    ///
    /// Default: `formData`
    pub storage_key: String,

    /// When to re-run validation besides submit.
    ///
    /// Default: [`ValidationMode::OnSubmit`]
    pub validation_mode: ValidationMode,

    /// Skip the sink write when a valid submit repeats the last persisted
    /// snapshot.
    ///
    /// Default: off
    pub deduplicate: bool,

    /// Restore values from the sink when the form is mounted.
    ///
    /// Default: on
    pub hydrate_on_mount: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            validation_mode: ValidationMode::default(),
            deduplicate: false,
            hydrate_on_mount: true,
        }
    }
}

impl FormConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the validation mode.
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    /// Enables or disables the duplicate submission guard.
    pub fn with_deduplication(mut self, enabled: bool) -> Self {
        self.deduplicate = enabled;
        self
    }

    /// Enables or disables hydration on mount.
    pub fn with_hydrate_on_mount(mut self, enabled: bool) -> Self {
        self.hydrate_on_mount = enabled;
        self
    }
}

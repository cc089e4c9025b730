//! Validation results.

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name.
    pub field: String,
    /// Error message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Field name to failure message, one entry per invalid field.
///
/// Entries are kept in schema declaration order. An empty map means the
/// snapshot is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: Vec<FieldError>,
}

impl ErrorMap {
    /// Creates an empty (valid) map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Check if a field failed.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`ErrorMap::is_valid`].
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|e| (e.field.as_str(), e.message.as_str()))
    }

    pub(crate) fn push(&mut self, error: FieldError) {
        debug_assert!(!self.contains(&error.field));
        self.errors.push(error);
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

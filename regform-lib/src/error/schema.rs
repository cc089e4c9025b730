//! Schema construction error types

/// Errors that can occur while building a form schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two fields were declared with the same name.
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// An equality rule references a field the schema does not declare.
    #[error("Field '{field}' must equal undeclared field '{reference}'")]
    UnknownReference {
        /// The field carrying the equality rule.
        field: String,
        /// The referenced field name.
        reference: String,
    },

    /// An equality rule references its own field.
    #[error("Field '{0}' cannot be compared with itself")]
    SelfReference(String),

    /// A pattern rule could not be compiled.
    #[error("Invalid pattern for field '{field}': {message}")]
    InvalidPattern {
        /// The field carrying the pattern rule.
        field: String,
        /// Compiler error message.
        message: String,
    },

    /// A field name was empty.
    #[error("Field names must not be empty")]
    EmptyFieldName,
}

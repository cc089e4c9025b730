//! Declarative form schemas.
//!
//! A schema is an ordered list of field definitions, each carrying an
//! ordered list of rules. Schemas are built once with a fluent API and never
//! mutated afterwards.
//!
//! # Example
//!
//! ```
//! use regform_lib::schema::Schema;
//!
//! let schema = Schema::builder()
//!     .field("password")
//!         .required("Password is required")
//!         .min_length(8, "Password must be at least 8 characters")
//!     .field("confirmPassword")
//!         .required("Please confirm your password")
//!         .equals_field("password", "Passwords must match")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! ```

mod field;
mod rule;

pub use field::FieldDefinition;
pub use rule::{Rule, RuleKind};

use std::collections::HashSet;

use regex::Regex;

use crate::error::SchemaError;

/// An immutable, ordered set of field definitions.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldDefinition>,
}

impl Schema {
    /// Starts building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns `true` if the schema declares a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of fields whose equality rules reference `name`.
    pub fn dependents_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.rules().iter().any(|r| r.reference() == Some(name)))
            .map(|f| f.name())
    }
}

/// Builder for a [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDefinition>,
    error: Option<SchemaError>,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and starts declaring its rules.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            schema: self,
            field: FieldDefinition::new(name),
        }
    }

    /// Validates the collected definitions and produces the schema.
    pub fn build(self) -> Result<Schema, SchemaError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name().is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateField(field.name().to_string()));
            }
        }

        for field in &self.fields {
            for reference in field.rules().iter().filter_map(Rule::reference) {
                if reference == field.name() {
                    return Err(SchemaError::SelfReference(field.name().to_string()));
                }
                if !seen.contains(reference) {
                    return Err(SchemaError::UnknownReference {
                        field: field.name().to_string(),
                        reference: reference.to_string(),
                    });
                }
            }
        }

        Ok(Schema {
            fields: self.fields,
        })
    }

    fn record_error(&mut self, err: SchemaError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

/// Builder for adding rules to a single field.
///
/// Rules are evaluated in the order they are added.
#[derive(Debug)]
pub struct FieldBuilder {
    schema: SchemaBuilder,
    field: FieldDefinition,
}

impl FieldBuilder {
    /// Sets the human-readable label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.set_label(label.into());
        self
    }

    /// Sets the placeholder hint.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field.set_placeholder(placeholder.into());
        self
    }

    /// Adds a rule.
    pub fn rule(mut self, kind: RuleKind, msg: impl Into<String>) -> Self {
        self.field.push_rule(Rule::new(kind, msg));
        self
    }

    /// Require the field to be non-empty and not whitespace only.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(RuleKind::Required, msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(RuleKind::MinLength(min), msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(RuleKind::MaxLength(max), msg)
    }

    /// Require the value to match a regex pattern.
    ///
    /// An invalid pattern is reported by [`FieldBuilder::build`].
    pub fn pattern(mut self, pattern: &str, msg: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(re) => self.rule(RuleKind::Matches(re), msg),
            Err(e) => {
                let err = SchemaError::InvalidPattern {
                    field: self.field.name().to_string(),
                    message: e.to_string(),
                };
                self.schema.record_error(err);
                self
            }
        }
    }

    /// Require a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(RuleKind::Email, msg)
    }

    /// Require the value to equal another field's current value.
    pub fn equals_field(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        self.rule(RuleKind::EqualsField(other.into()), msg)
    }

    /// Require the value to be one of `options`.
    pub fn one_of<I, S>(self, options: I, msg: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        self.rule(RuleKind::OneOf(options), msg)
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        self.finalize().field(name)
    }

    /// Finalize and build the schema.
    pub fn build(self) -> Result<Schema, SchemaError> {
        self.finalize().build()
    }

    fn finalize(self) -> SchemaBuilder {
        let mut schema = self.schema;
        schema.fields.push(self.field);
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_preserves_declaration_order() {
        let schema = Schema::builder()
            .field("b")
            .field("a")
            .field("c")
            .build()
            .unwrap();

        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_rules_keep_declared_order() {
        let schema = Schema::builder()
            .field("email")
            .email("Invalid email")
            .required("Email is required")
            .build()
            .unwrap();

        let rules = schema.field("email").unwrap().rules();
        assert_eq!(rules[0].kind().name(), "email");
        assert_eq!(rules[1].message(), "Email is required");
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = Schema::builder().field("name").field("name").build().unwrap_err();
        assert_eq!(err, SchemaError::DuplicateField("name".into()));
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let err = Schema::builder()
            .field("confirm")
            .equals_field("password", "must match")
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownReference { .. }));
    }

    #[test]
    fn test_forward_reference_allowed() {
        let schema = Schema::builder()
            .field("confirm")
            .equals_field("password", "must match")
            .field("password")
            .build();
        assert!(schema.is_ok());
    }

    #[test]
    fn test_self_reference_rejected() {
        let err = Schema::builder()
            .field("password")
            .equals_field("password", "must match")
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::SelfReference("password".into()));
    }

    #[test]
    fn test_invalid_pattern_reported_at_build() {
        let err = Schema::builder()
            .field("zip")
            .pattern("([0-9]", "bad zip")
            .field("city")
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPattern { field, .. } if field == "zip"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Schema::builder().field("").build().unwrap_err();
        assert_eq!(err, SchemaError::EmptyFieldName);
    }

    #[test]
    fn test_field_metadata() {
        let schema = Schema::builder()
            .field("gender")
            .label("Gender")
            .placeholder("Please Select")
            .required("Gender is required")
            .one_of(["Male", "Female", "Other"], "Please select a gender")
            .field("comments")
            .build()
            .unwrap();

        let gender = schema.field("gender").unwrap();
        assert_eq!(gender.label(), "Gender");
        assert_eq!(gender.placeholder(), Some("Please Select"));
        assert!(gender.is_required());
        assert_eq!(gender.options().unwrap().len(), 3);

        let comments = schema.field("comments").unwrap();
        assert_eq!(comments.label(), "comments");
        assert!(!comments.is_required());
    }

    #[test]
    fn test_dependents_of() {
        let schema = Schema::builder()
            .field("password")
            .field("confirmPassword")
            .equals_field("password", "must match")
            .build()
            .unwrap();

        let deps: Vec<_> = schema.dependents_of("password").collect();
        assert_eq!(deps, ["confirmPassword"]);
        assert_eq!(schema.dependents_of("confirmPassword").count(), 0);
    }
}

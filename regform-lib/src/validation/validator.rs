//! Rule evaluation.

use email_address::{EmailAddress, Options};

use crate::schema::{FieldDefinition, Rule, RuleKind, Schema};
use crate::store::Snapshot;

use super::result::{ErrorMap, FieldError};

/// Validate every field of `schema` against `snapshot`.
///
/// Rules run in declared order and stop at the first failure per field.
/// An empty value only runs `Required` and `EqualsField` rules.
/// Whitespace is not empty: it fails `Required` and still runs format rules.
pub fn validate(schema: &Schema, snapshot: &Snapshot) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in schema.fields() {
        if let Some(error) = check_field(field, snapshot) {
            errors.push(error);
        }
    }
    errors
}

/// Validate a single field.
///
/// Returns `None` if the field passes or is not declared by the schema.
pub fn validate_field(schema: &Schema, snapshot: &Snapshot, name: &str) -> Option<FieldError> {
    schema.field(name).and_then(|field| check_field(field, snapshot))
}

fn check_field(field: &FieldDefinition, snapshot: &Snapshot) -> Option<FieldError> {
    let value = snapshot.value_or_empty(field.name());
    let empty = value.is_empty();

    field
        .rules()
        .iter()
        .filter(|rule| !empty || rule.kind().applies_to_empty())
        .find(|rule| !passes(rule, value, snapshot))
        .map(|rule| FieldError::new(field.name(), rule.message()))
}

fn passes(rule: &Rule, value: &str, snapshot: &Snapshot) -> bool {
    match rule.kind() {
        RuleKind::Required => !value.trim().is_empty(),
        RuleKind::MinLength(min) => value.chars().count() >= *min,
        RuleKind::MaxLength(max) => value.chars().count() <= *max,
        RuleKind::Matches(re) => re.is_match(value),
        RuleKind::Email => is_plain_email(value),
        RuleKind::EqualsField(other) => snapshot.get(other) == Some(value),
        RuleKind::OneOf(options) => options.iter().any(|o| o == value),
    }
}

/// A bare `local@domain` address: no display name, no `[ip]` domain and no
/// quoted local part.
fn is_plain_email(value: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal();
    match EmailAddress::parse_with_options(value, options) {
        Ok(address) => !address.local_part().starts_with('"'),
        Err(_) => false,
    }
}

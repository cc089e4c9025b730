//! Validation rules attached to a field.

use regex::Regex;

/// The predicate half of a rule.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Value must not be empty or whitespace only.
    Required,
    /// Value must have at least this many characters.
    MinLength(usize),
    /// Value must have at most this many characters.
    MaxLength(usize),
    /// Value must match the pattern.
    Matches(Regex),
    /// Value must be a well-formed email address.
    Email,
    /// Value must equal the current value of the named field.
    EqualsField(String),
    /// Value must be one of the listed options.
    OneOf(Vec<String>),
}

impl RuleKind {
    /// Short name used in logs and listings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::Matches(_) => "matches",
            Self::Email => "email",
            Self::EqualsField(_) => "equals_field",
            Self::OneOf(_) => "one_of",
        }
    }

    /// Whether this rule still runs when the value is empty.
    ///
    /// Empty optional fields skip format rules, but an empty value can still
    /// be missing or mismatch its reference.
    pub(crate) fn applies_to_empty(&self) -> bool {
        matches!(self, Self::Required | Self::EqualsField(_))
    }
}

/// A predicate paired with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    message: String,
}

impl Rule {
    /// Creates a rule from a kind and failure message.
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the predicate.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the referenced field name for equality rules.
    pub fn reference(&self) -> Option<&str> {
        match &self.kind {
            RuleKind::EqualsField(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            RuleKind::MinLength(n) | RuleKind::MaxLength(n) => {
                write!(f, "{}({}): {}", self.kind.name(), n, self.message)
            }
            RuleKind::Matches(re) => write!(f, "{}(/{}/): {}", self.kind.name(), re, self.message),
            RuleKind::EqualsField(other) => {
                write!(f, "{}({}): {}", self.kind.name(), other, self.message)
            }
            RuleKind::OneOf(options) => {
                write!(f, "{}({}): {}", self.kind.name(), options.join("|"), self.message)
            }
            RuleKind::Required | RuleKind::Email => write!(f, "{}: {}", self.kind.name(), self.message),
        }
    }
}

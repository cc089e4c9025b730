//! Field definitions.

use super::Rule;

/// Static description of one form field.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    name: String,
    label: String,
    placeholder: Option<String>,
    rules: Vec<Rule>,
}

impl FieldDefinition {
    /// Creates a field with no rules, labelled by its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            placeholder: None,
            rules: Vec::new(),
        }
    }

    /// Field name, unique within a schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Placeholder hint, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns `true` if any rule makes this field mandatory.
    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule.kind(), super::RuleKind::Required))
    }

    /// Options for select-style fields.
    pub fn options(&self) -> Option<&[String]> {
        self.rules.iter().find_map(|rule| match rule.kind() {
            super::RuleKind::OneOf(options) => Some(options.as_slice()),
            _ => None,
        })
    }

    pub(super) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(super) fn set_placeholder(&mut self, placeholder: String) {
        self.placeholder = Some(placeholder);
    }

    pub(super) fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }
}

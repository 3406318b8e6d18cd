//! Form State - Runtime Values and Validity
//!
//! Snapshot of one mounted form. Updates never mutate a snapshot in place:
//! [`FormRuntimeState::on_field_edited`] returns the next one.

use ahash::AHashMap;

use crate::domain::field::{ActionButton, Enablement};
use crate::domain::form::FormDefinition;
use crate::error::{Result, UnknownFieldSnafu};

/// Values and validity flags of a rendered form
#[derive(Debug, Clone)]
pub struct FormRuntimeState {
    definition: FormDefinition,
    /// Edited values by label; unedited fields fall back to their initial value
    values: AHashMap<String, String>,
    /// Validity by label, recorded on edit
    invalid: AHashMap<String, bool>,
}

impl FormRuntimeState {
    /// State of a freshly mounted form: nothing edited, nothing invalid
    pub fn new(definition: FormDefinition) -> Self {
        Self {
            definition,
            values: AHashMap::new(),
            invalid: AHashMap::new(),
        }
    }

    // ==================== Getters ====================

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Current value of a field, or `None` for an unknown label
    pub fn value(&self, label: &str) -> Option<&str> {
        if let Some(value) = self.values.get(label) {
            return Some(value.as_str());
        }
        self.definition.text_field(label).map(|field| field.initial())
    }

    /// Whether the field has been edited at least once
    pub fn is_edited(&self, label: &str) -> bool {
        self.values.contains_key(label)
    }

    /// Whether the last edit of the field failed validation
    pub fn is_invalid(&self, label: &str) -> bool {
        self.invalid.get(label).copied().unwrap_or(false)
    }

    /// Whether any field is currently flagged invalid
    pub fn has_errors(&self) -> bool {
        self.invalid.values().any(|invalid| *invalid)
    }

    /// Labels of the invalid fields, in definition order
    pub fn invalid_labels(&self) -> Vec<&str> {
        self.definition
            .text_fields()
            .map(|field| field.label())
            .filter(|label| self.is_invalid(label))
            .collect()
    }

    /// Message to display under the field, present only while it is invalid
    pub fn error_message(&self, label: &str) -> Option<&str> {
        if !self.is_invalid(label) {
            return None;
        }
        self.definition
            .text_field(label)
            .and_then(|field| field.message())
    }

    // ==================== Updates ====================

    /// Record a new value for `label` and recompute its validity.
    ///
    /// Other fields are left untouched.
    pub fn on_field_edited(&self, label: &str, new_value: impl Into<String>) -> Result<Self> {
        let Some(field) = self.definition.text_field(label) else {
            return UnknownFieldSnafu { label }.fail();
        };

        let new_value = new_value.into();
        let invalid = !field.is_valid(&new_value);
        tracing::debug!(label, invalid, "field edited");

        let mut next = self.clone();
        next.values.insert(label.to_string(), new_value);
        next.invalid.insert(label.to_string(), invalid);
        Ok(next)
    }

    /// Effective enablement of a button.
    ///
    /// Gated buttons need their predicate to hold and no invalid field;
    /// plain buttons are always enabled.
    pub fn effective_button_enabled(&self, button: &ActionButton) -> bool {
        match button.enablement() {
            Enablement::Always => true,
            Enablement::Gated(is_enabled) => is_enabled() && !self.has_errors(),
        }
    }
}

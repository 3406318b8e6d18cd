//! Form - Builder and Frozen Definition
//!
//! A [`FormBuilder`] collects field descriptors in order and is consumed by
//! [`FormBuilder::build`]. The resulting [`FormDefinition`] is shared and
//! never changes afterwards.

use std::sync::Arc;

use ahash::AHashSet;

use crate::domain::field::{ActionButton, ButtonStyle, FieldDescriptor, TextField};
use crate::error::{DuplicateLabelSnafu, DuplicateTitleSnafu, Result};
use crate::i18n::Locale;

/// Append-only collector of form fields
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    fields: Vec<FieldDescriptor>,
    locale: Locale,
}

impl FormBuilder {
    /// Create an empty builder using the default locale for built-in messages
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder whose built-in error messages use `locale`
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            fields: Vec::new(),
            locale,
        }
    }

    /// Append any descriptor
    pub fn field(mut self, field: impl Into<FieldDescriptor>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Append a text field
    pub fn text_field(self, field: TextField) -> Self {
        self.field(field)
    }

    /// Append an email field with the built-in message
    pub fn email_field(self, label: impl Into<String>) -> Self {
        let field = TextField::email_in(label, self.locale);
        self.field(field)
    }

    /// Append a numeric field (initial value "0") with the built-in message
    pub fn numeric_field(self, label: impl Into<String>) -> Self {
        let field = TextField::numeric_in(label, self.locale);
        self.field(field)
    }

    /// Append an always-enabled button
    pub fn button(
        self,
        title: impl Into<String>,
        style: ButtonStyle,
        on_activate: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.field(ActionButton::new(title, style, on_activate))
    }

    /// Append a button gated on `is_enabled` and on the validity of the form
    pub fn gated_button(
        self,
        title: impl Into<String>,
        style: ButtonStyle,
        on_activate: impl Fn() + Send + Sync + 'static,
        is_enabled: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.field(ActionButton::new(title, style, on_activate).enabled_when(is_enabled))
    }

    /// Locale used for built-in messages
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Number of descriptors collected so far
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Freeze the collected fields.
    ///
    /// Labels of text fields and titles of buttons must be unique, since
    /// edits and activations address them by name. Fails with
    /// [`Error::DuplicateLabel`](crate::error::Error::DuplicateLabel) or
    /// [`Error::DuplicateTitle`](crate::error::Error::DuplicateTitle).
    pub fn build(self) -> Result<FormDefinition> {
        let mut labels = AHashSet::with_capacity(self.fields.len());
        let mut titles = AHashSet::new();
        for field in self.fields.iter() {
            match field {
                FieldDescriptor::Text(text) if !labels.insert(text.label()) => {
                    return DuplicateLabelSnafu {
                        label: text.label(),
                    }
                    .fail();
                }
                FieldDescriptor::Button(button) if !titles.insert(button.title()) => {
                    return DuplicateTitleSnafu {
                        title: button.title(),
                    }
                    .fail();
                }
                _ => {}
            }
        }

        tracing::debug!(fields = self.fields.len(), "form definition built");

        Ok(FormDefinition {
            fields: self.fields.into(),
        })
    }
}

/// Ordered, immutable list of field descriptors
#[derive(Debug, Clone)]
pub struct FormDefinition {
    fields: Arc<[FieldDescriptor]>,
}

impl FormDefinition {
    /// Build a definition from a script applied to a fresh builder
    pub fn from_script(script: impl FnOnce(FormBuilder) -> FormBuilder) -> Result<Self> {
        script(FormBuilder::new()).build()
    }

    /// All descriptors in definition order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Text fields in definition order
    pub fn text_fields(&self) -> impl Iterator<Item = &TextField> {
        self.fields.iter().filter_map(FieldDescriptor::as_text)
    }

    /// Buttons in definition order
    pub fn buttons(&self) -> impl Iterator<Item = &ActionButton> {
        self.fields.iter().filter_map(FieldDescriptor::as_button)
    }

    /// Find a text field by label
    pub fn text_field(&self, label: &str) -> Option<&TextField> {
        self.text_fields().find(|field| field.label() == label)
    }

    /// Find a button by title
    pub fn button(&self, title: &str) -> Option<&ActionButton> {
        self.buttons().find(|button| button.title() == title)
    }

    /// Whether two handles point at the same frozen field list
    pub fn same_as(&self, other: &FormDefinition) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validator::NonBlank;
    use crate::error::Error;

    #[test]
    fn build_keeps_insertion_order() {
        let form = FormBuilder::with_locale(Locale::EnUS)
            .text_field(TextField::new("Nombre", NonBlank))
            .email_field("Email")
            .numeric_field("Edad")
            .button("Enviar", ButtonStyle::default(), || {})
            .gated_button("Deshabilitar", ButtonStyle::gated(), || {}, || true)
            .build()
            .expect("form builds");

        let kinds: Vec<_> = form
            .fields()
            .iter()
            .map(|field| match field {
                FieldDescriptor::Text(text) => text.label().to_string(),
                FieldDescriptor::Button(button) => format!("[{}]", button.title()),
            })
            .collect();
        assert_eq!(kinds, vec!["Nombre", "Email", "Edad", "[Enviar]", "[Deshabilitar]"]);
        assert_eq!(form.text_fields().count(), 3);
        assert_eq!(form.buttons().count(), 2);
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let result = FormBuilder::new()
            .text_field(TextField::new("Email", NonBlank))
            .email_field("Email")
            .build();

        assert!(matches!(result, Err(Error::DuplicateLabel { label }) if label == "Email"));
    }

    #[test]
    fn duplicate_button_titles_are_rejected() {
        let result = FormBuilder::new()
            .button("Go", ButtonStyle::default(), || {})
            .gated_button("Go", ButtonStyle::gated(), || {}, || false)
            .build();

        assert!(matches!(result, Err(Error::DuplicateTitle { title }) if title == "Go"));
    }

    #[test]
    fn buttons_may_share_titles_with_fields() {
        let form = FormBuilder::new()
            .text_field(TextField::new("Enviar", NonBlank))
            .button("Enviar", ButtonStyle::default(), || {})
            .build();
        assert!(form.is_ok());
    }

    #[test]
    fn built_definition_is_not_affected_by_later_appends() {
        let builder = FormBuilder::new().text_field(TextField::new("Nombre", NonBlank));
        let first = builder.clone().build().expect("first build");

        let second = builder
            .text_field(TextField::new("Apellido", NonBlank))
            .build()
            .expect("second build");

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert!(first.text_field("Apellido").is_none());
        assert!(!first.same_as(&second));
    }

    #[test]
    fn from_script_applies_the_script() {
        let form = FormDefinition::from_script(|form| {
            form.text_field(TextField::new("Name", NonBlank))
                .gated_button("Send", ButtonStyle::gated(), || {}, || true)
        })
        .expect("form builds");

        assert!(form.text_field("Name").is_some());
        assert!(form.button("Send").is_some());
        assert!(form.button("Missing").is_none());
    }

    #[test]
    fn empty_form_builds() {
        let form = FormBuilder::new().build().expect("empty form builds");
        assert!(form.is_empty());
    }
}

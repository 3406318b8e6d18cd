//! Snapshot - What a Renderer Draws
//!
//! A flat, owned picture of a form at one instant. Renderers (GPUI, the
//! console) draw snapshots and never look at validators or predicates.

use crate::domain::field::{ButtonStyle, FieldDescriptor};
use crate::state::form_state::FormRuntimeState;

/// A text input as it should be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub label: String,
    pub value: String,
    /// Whether the error indicator is shown
    pub invalid: bool,
    /// Message under the input, only while invalid
    pub error: Option<String>,
}

/// A button as it should be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonEntry {
    pub title: String,
    pub style: ButtonStyle,
    pub enabled: bool,
}

/// One drawable entry, in definition order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotEntry {
    Text(TextEntry),
    Button(ButtonEntry),
}

/// Drawable picture of a whole form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub entries: Vec<SnapshotEntry>,
}

impl FormSnapshot {
    /// Capture the current state; button predicates are evaluated now
    pub fn capture(state: &FormRuntimeState) -> Self {
        let entries = state
            .definition()
            .fields()
            .iter()
            .map(|field| match field {
                FieldDescriptor::Text(text) => {
                    let label = text.label();
                    SnapshotEntry::Text(TextEntry {
                        label: label.to_string(),
                        value: state.value(label).unwrap_or_default().to_string(),
                        invalid: state.is_invalid(label),
                        error: state.error_message(label).map(str::to_string),
                    })
                }
                FieldDescriptor::Button(button) => SnapshotEntry::Button(ButtonEntry {
                    title: button.title().to_string(),
                    style: *button.style(),
                    enabled: state.effective_button_enabled(button),
                }),
            })
            .collect();

        Self { entries }
    }

    pub fn text(&self, label: &str) -> Option<&TextEntry> {
        self.entries.iter().find_map(|entry| match entry {
            SnapshotEntry::Text(text) if text.label == label => Some(text),
            _ => None,
        })
    }

    pub fn button(&self, title: &str) -> Option<&ButtonEntry> {
        self.entries.iter().find_map(|entry| match entry {
            SnapshotEntry::Button(button) if button.title == title => Some(button),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::TextField;
    use crate::domain::form::FormBuilder;
    use crate::domain::validator::NonBlank;

    #[test]
    fn capture_follows_definition_order_and_state() {
        let definition = FormBuilder::new()
            .text_field(TextField::new("Nombre", NonBlank).error_message("Debe ingresar un nombre"))
            .text_field(TextField::new("Nota", NonBlank))
            .gated_button("Enviar", ButtonStyle::gated(), || {}, || true)
            .build()
            .expect("form builds");
        let state = FormRuntimeState::new(definition)
            .on_field_edited("Nombre", " ")
            .and_then(|state| state.on_field_edited("Nota", ""))
            .expect("edits");

        let snapshot = FormSnapshot::capture(&state);
        assert_eq!(snapshot.entries.len(), 3);

        let nombre = snapshot.text("Nombre").expect("Nombre");
        assert_eq!(nombre.value, " ");
        assert!(nombre.invalid);
        assert_eq!(nombre.error.as_deref(), Some("Debe ingresar un nombre"));

        // Invalid without a message still shows the indicator
        let nota = snapshot.text("Nota").expect("Nota");
        assert!(nota.invalid);
        assert_eq!(nota.error, None);

        let enviar = snapshot.button("Enviar").expect("Enviar");
        assert!(!enviar.enabled);
        assert!(matches!(snapshot.entries[2], SnapshotEntry::Button(_)));
    }
}

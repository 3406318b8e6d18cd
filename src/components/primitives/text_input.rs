//! TextInput Component
//!
//! Single-line input editing at the end of its value. Emits
//! [`InputEvent::Change`] after every edit.

use gpui::{
    Context, ElementId, Entity, EventEmitter, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::FormColors;

/// Events emitted by [`TextInput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Change,
}

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    invalid: bool,
    focus_handle: FocusHandle,
}

impl EventEmitter<InputEvent> for TextInput {}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            invalid: false,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Set the value without emitting a change
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Show or hide the error border
    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => {
                if self.value.pop().is_none() {
                    return;
                }
            }
            "enter" | "tab" | "escape" => return,
            _ => match &keystroke.key_char {
                Some(text) if !text.chars().any(char::is_control) => self.value.push_str(text),
                _ => return,
            },
        }

        cx.emit(InputEvent::Change);
        cx.notify();
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if self.invalid {
            FormColors::border_error()
        } else if is_focused {
            FormColors::border_focus()
        } else {
            FormColors::input_border()
        };

        let (display_text, text_color) = if self.value.is_empty() {
            (self.placeholder.clone(), FormColors::input_placeholder())
        } else {
            (SharedString::from(self.value.clone()), FormColors::text_primary())
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .px_3()
            .py_2()
            .h(px(36.0))
            .bg(FormColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .w_full()
            .child(display_text)
    }
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}

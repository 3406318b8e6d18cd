//! Validated Text Field
//!
//! Label, input and an error line shown only while the field is invalid.

use gpui::{
    App, Entity, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px,
};

use crate::components::primitives::text_input::TextInput;
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

#[derive(IntoElement)]
pub struct ValidatedTextField {
    label: SharedString,
    input: Entity<TextInput>,
    error: Option<SharedString>,
}

impl ValidatedTextField {
    pub fn new(label: impl Into<SharedString>, input: Entity<TextInput>) -> Self {
        Self {
            label: label.into(),
            input,
            error: None,
        }
    }

    /// Message under the input; `None` hides the line
    pub fn error(mut self, error: Option<impl Into<SharedString>>) -> Self {
        self.error = error.map(Into::into);
        self
    }
}

impl RenderOnce for ValidatedTextField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .w_full()
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(FormColors::text_secondary())
                    .child(self.label),
            )
            .child(self.input)
            .children(self.error.map(|error| {
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(FormColors::text_error())
                    .child(error)
            }))
    }
}

//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::domain::field::ButtonStyle;
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

/// A button drawn with the colors of a [`ButtonStyle`]
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    style: ButtonStyle,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            style: ButtonStyle::default(),
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button colors
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler; never called while disabled
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let background = if self.disabled {
            self.style.disabled_background
        } else {
            self.style.background
        };

        let mut element = div()
            .id(self.id)
            .w_full()
            .px(px(16.0))
            .py(px(8.0))
            .flex()
            .justify_center()
            .bg(FormColors::of(background))
            .text_color(FormColors::of(self.style.text_color))
            .text_size(px(Typography::TEXT_SM))
            .rounded_md()
            .child(self.label);

        if !self.disabled {
            element = element.cursor_pointer().hover(|s| s.opacity(0.9));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

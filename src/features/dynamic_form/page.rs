//! Dynamic Form Page
//!
//! GPUI view over a [`FormController`]: one validated input per text field
//! and one button per action button, in definition order.

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window, div, prelude::*, px,
};

use crate::components::composite::validated_text_field::ValidatedTextField;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{InputEvent, TextInput, text_input};
use crate::constants::FORM_CONTENT_WIDTH;
use crate::domain::form::FormDefinition;
use crate::features::dynamic_form::FormController;
use crate::i18n::{Locale, t, t_format};
use crate::state::SnapshotEntry;
use crate::theme::colors::FormColors;
use crate::theme::typography::Typography;

/// Dynamic form page component
pub struct DynamicFormPage {
    title: SharedString,
    locale: Locale,
    controller: FormController,
    inputs: Vec<(String, Entity<TextInput>)>,
    _subscriptions: Vec<Subscription>,
}

impl DynamicFormPage {
    pub fn new(
        title: impl Into<SharedString>,
        definition: FormDefinition,
        locale: Locale,
        history_capacity: usize,
        cx: &mut Context<Self>,
    ) -> Self {
        let controller = FormController::new(definition, history_capacity);
        let mut inputs = Vec::new();
        let mut subscriptions = Vec::new();

        for (index, field) in controller.definition().text_fields().enumerate() {
            let label = field.label().to_string();
            let input = text_input(("form-input", index), field.initial(), label.clone(), cx);

            // Forward every keystroke to the controller
            let edited = label.clone();
            subscriptions.push(cx.subscribe(&input, move |this, input, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = input.read(cx).value().to_string();
                    this.edit(&edited, value, cx);
                }
            }));

            inputs.push((label, input));
        }

        Self {
            title: title.into(),
            locale,
            controller,
            inputs,
            _subscriptions: subscriptions,
        }
    }

    fn input(&self, label: &str) -> Option<&Entity<TextInput>> {
        self.inputs
            .iter()
            .find(|(input_label, _)| input_label == label)
            .map(|(_, input)| input)
    }

    fn edit(&mut self, label: &str, value: String, cx: &mut Context<Self>) {
        if let Err(err) = self.controller.edit(label, value) {
            tracing::error!(label, error = %err, "edit rejected");
            return;
        }

        let invalid = self.controller.state().is_invalid(label);
        if let Some(input) = self.input(label) {
            input.update(cx, |input, _cx| input.set_invalid(invalid));
        }
        cx.notify();
    }

    fn activate(&mut self, title: &str, cx: &mut Context<Self>) {
        if let Err(err) = self.controller.activate(title) {
            tracing::warn!(title, error = %err, "activation failed");
        }
        cx.notify();
    }

    fn reset(&mut self, cx: &mut Context<Self>) {
        self.controller.reset();

        let state = self.controller.state();
        for (label, input) in &self.inputs {
            let value = state.value(label).unwrap_or_default().to_string();
            input.update(cx, |input, cx| {
                input.set_value(value);
                input.set_invalid(false);
                cx.notify();
            });
        }
        cx.notify();
    }
}

impl Render for DynamicFormPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let snapshot = self.controller.snapshot();
        let mut entries = Vec::with_capacity(snapshot.entries.len());

        for (index, entry) in snapshot.entries.into_iter().enumerate() {
            match entry {
                SnapshotEntry::Text(text) => {
                    let Some(input) = self.input(&text.label).cloned() else {
                        continue;
                    };
                    entries.push(
                        ValidatedTextField::new(text.label, input)
                            .error(text.error)
                            .into_any_element(),
                    );
                }
                SnapshotEntry::Button(button) => {
                    let title = button.title.clone();
                    entries.push(
                        Button::new(("form-button", index), button.title)
                            .style(button.style)
                            .disabled(!button.enabled)
                            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                                this.activate(&title, cx);
                            }))
                            .into_any_element(),
                    );
                }
            }
        }

        let activations = self.controller.history().total().to_string();
        let activations = t_format(
            self.locale,
            "page.activations",
            &[("count", activations.as_str())],
        );

        div()
            .size_full()
            .flex()
            .justify_center()
            .bg(FormColors::background())
            .child(
                div()
                    .w(px(FORM_CONTENT_WIDTH))
                    .mt(px(24.0))
                    .p(px(16.0))
                    .flex()
                    .flex_col()
                    .gap(px(Typography::FIELD_GAP))
                    .bg(FormColors::content_bg())
                    .rounded_md()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XL))
                            .text_color(FormColors::text_primary())
                            .child(self.title.clone()),
                    )
                    .children(entries)
                    .child(
                        div()
                            .id("form-reset")
                            .flex()
                            .justify_between()
                            .text_size(px(Typography::TEXT_XS))
                            .text_color(FormColors::text_secondary())
                            .child(activations)
                            .child(
                                div()
                                    .id("form-reset-link")
                                    .cursor_pointer()
                                    .child(t(self.locale, "page.reset"))
                                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                        this.reset(cx);
                                    })),
                            ),
                    ),
            )
    }
}

//! Dynamic Form Controller
//!
//! Binds a frozen form definition to one mounted instance: applies edits,
//! activates buttons and tells observers about every change so the
//! presentation layer can re-render.

use crate::domain::form::FormDefinition;
use crate::error::{ButtonDisabledSnafu, Result, UnknownButtonSnafu};
use crate::eventing::FormEvent;
use crate::state::{ActivationHistory, FormRuntimeState, FormSnapshot};

/// Handle returned by [`FormController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&FormEvent, &FormRuntimeState) + 'static>;

/// Owner of the runtime state of one mounted form
pub struct FormController {
    mounted: FormRuntimeState,
    state: FormRuntimeState,
    history: ActivationHistory,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl FormController {
    /// Mount a form
    pub fn new(definition: FormDefinition, history_capacity: usize) -> Self {
        let mounted = FormRuntimeState::new(definition);
        Self {
            state: mounted.clone(),
            mounted,
            history: ActivationHistory::new(history_capacity),
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    // ==================== Getters ====================

    pub fn definition(&self) -> &FormDefinition {
        self.state.definition()
    }

    pub fn state(&self) -> &FormRuntimeState {
        &self.state
    }

    pub fn history(&self) -> &ActivationHistory {
        &self.history
    }

    /// Drawable picture of the current state
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::capture(&self.state)
    }

    /// Effective enablement of the first button titled `title`
    pub fn is_button_enabled(&self, title: &str) -> Result<bool> {
        let Some(button) = self.definition().button(title) else {
            return UnknownButtonSnafu { title }.fail();
        };
        Ok(self.state.effective_button_enabled(button))
    }

    // ==================== Observers ====================

    /// Register an observer called after every change
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&FormEvent, &FormRuntimeState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: FormEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event, &self.state);
        }
    }

    // ==================== Updates ====================

    /// Apply a user edit to a field
    pub fn edit(&mut self, label: &str, value: impl Into<String>) -> Result<()> {
        self.state = self.state.on_field_edited(label, value)?;
        let invalid = self.state.is_invalid(label);
        self.notify(FormEvent::edited(label, invalid));
        Ok(())
    }

    /// Activate the first button titled `title`.
    ///
    /// The handler runs exactly once, and only while the button is enabled.
    pub fn activate(&mut self, title: &str) -> Result<()> {
        let Some(button) = self.state.definition().button(title) else {
            return UnknownButtonSnafu { title }.fail();
        };

        if !self.state.effective_button_enabled(button) {
            tracing::warn!(title, "activation of a disabled button ignored");
            return ButtonDisabledSnafu { title }.fail();
        }

        button.activate();
        tracing::info!(title, "button activated");

        self.history.push_now(title);
        self.notify(FormEvent::activated(title));
        Ok(())
    }

    /// Discard every edit and go back to the mount state
    pub fn reset(&mut self) {
        self.state = self.mounted.clone();
        self.history.clear();
        tracing::debug!("form reset");
        self.notify(FormEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::field::{ButtonStyle, TextField};
    use crate::domain::form::FormBuilder;
    use crate::domain::validator::NonBlank;
    use crate::error::Error;

    fn name_form(clicks: Arc<AtomicUsize>) -> FormDefinition {
        FormBuilder::new()
            .text_field(TextField::new("Name", NonBlank))
            .gated_button(
                "Send",
                ButtonStyle::gated(),
                move || {
                    clicks.fetch_add(1, Ordering::SeqCst);
                },
                || true,
            )
            .build()
            .expect("form builds")
    }

    #[test]
    fn typing_a_name_enables_the_gated_button() {
        let mut form = FormController::new(name_form(Arc::default()), 10);

        form.edit("Name", "").expect("edit");
        assert_eq!(form.is_button_enabled("Send").ok(), Some(false));
        assert!(!form.snapshot().button("Send").expect("Send").enabled);

        form.edit("Name", "David").expect("edit");
        assert_eq!(form.is_button_enabled("Send").ok(), Some(true));
        assert!(form.snapshot().button("Send").expect("Send").enabled);
    }

    #[test]
    fn activation_runs_handler_once_and_records_history() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let mut form = FormController::new(name_form(clicks.clone()), 10);

        form.activate("Send").expect("activate");
        form.activate("Send").expect("activate");

        assert_eq!(clicks.load(Ordering::SeqCst), 2);
        assert_eq!(form.history().len(), 2);
        assert_eq!(form.history().last().map(|r| r.title.as_str()), Some("Send"));
    }

    #[test]
    fn disabled_button_does_not_run_handler() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let mut form = FormController::new(name_form(clicks.clone()), 10);
        form.edit("Name", "  ").expect("edit");

        let result = form.activate("Send");

        assert!(matches!(result, Err(Error::ButtonDisabled { title }) if title == "Send"));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
        assert!(form.history().is_empty());
    }

    #[test]
    fn unknown_targets_are_errors() {
        let mut form = FormController::new(name_form(Arc::default()), 10);
        assert!(matches!(form.activate("Nope"), Err(Error::UnknownButton { .. })));
        assert!(matches!(form.edit("Nope", "x"), Err(Error::UnknownField { .. })));
        assert!(matches!(form.is_button_enabled("Nope"), Err(Error::UnknownButton { .. })));
    }

    #[test]
    fn observers_see_every_change() {
        let mut form = FormController::new(name_form(Arc::default()), 10);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = form.subscribe(move |event, state| {
            sink.borrow_mut()
                .push((event.clone(), state.value("Name").unwrap_or_default().to_string()));
        });

        form.edit("Name", "").expect("edit");
        form.edit("Name", "Ana").expect("edit");
        form.activate("Send").expect("activate");
        form.reset();

        assert_eq!(
            *seen.borrow(),
            vec![
                (FormEvent::edited("Name", true), String::new()),
                (FormEvent::edited("Name", false), "Ana".to_string()),
                (FormEvent::activated("Send"), "Ana".to_string()),
                (FormEvent::Reset, String::new()),
            ]
        );

        assert!(form.unsubscribe(id));
        assert!(!form.unsubscribe(id));
        form.edit("Name", "Luis").expect("edit");
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn reset_restores_mount_state() {
        let mut form = FormController::new(name_form(Arc::default()), 10);
        form.edit("Name", "").expect("edit");
        assert!(form.activate("Send").is_err());
        form.edit("Name", "Eva").expect("edit");
        form.activate("Send").expect("activate");

        form.reset();

        assert!(!form.state().is_edited("Name"));
        assert!(!form.state().has_errors());
        assert!(form.history().is_empty());
    }

    #[test]
    fn history_is_bounded() {
        let mut form = FormController::new(name_form(Arc::default()), 2);
        for _ in 0..5 {
            form.activate("Send").expect("activate");
        }
        assert_eq!(form.history().len(), 2);
        assert_eq!(form.history().total(), 5);
    }

    #[test]
    fn live_definition_is_unchanged_by_builder_reuse() {
        let builder = FormBuilder::new().text_field(TextField::new("Name", NonBlank));
        let form = FormController::new(builder.clone().build().expect("build"), 10);

        let _larger = builder
            .text_field(TextField::new("Extra", NonBlank))
            .build()
            .expect("build");

        assert_eq!(form.definition().len(), 1);
        assert_eq!(form.snapshot().entries.len(), 1);
    }
}

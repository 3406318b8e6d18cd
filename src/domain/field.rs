//! Field - Form Field Descriptors
//!
//! Immutable descriptions of the inputs and actions of a form, independent
//! of how a presentation layer draws them.

use std::fmt;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::validator::{EmailAddress, Integer, Validator};
use crate::i18n::{self, Locale};

/// Side-effecting handler run when a button is activated
pub type ActivateHandler = Arc<dyn Fn() + Send + Sync>;

/// Predicate deciding whether a gated button is interactive
pub type EnabledPredicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// An RGB color packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const GRAY: Color = Color(0x888888);
    pub const BLUE: Color = Color(0x0000ff);
    pub const RED: Color = Color(0xff0000);
    pub const GREEN: Color = Color(0x00ff00);

    /// The packed `0xRRGGBB` value
    pub fn hex(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Colors of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ButtonStyle {
    /// Background while enabled
    pub background: Color,
    /// Background while disabled
    pub disabled_background: Color,
    /// Title color
    pub text_color: Color,
}

impl ButtonStyle {
    /// Style with the given background and the default disabled/text colors
    pub fn with_background(background: Color) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }

    /// Default style of gated buttons
    pub fn gated() -> Self {
        Self::with_background(Color::RED)
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: Color::BLUE,
            disabled_background: Color::GRAY,
            text_color: Color::WHITE,
        }
    }
}

/// An editable text input with its validation rule
#[derive(Clone)]
pub struct TextField {
    label: String,
    initial_value: String,
    validator: Arc<dyn Validator>,
    error_message: Option<String>,
}

impl TextField {
    /// Create a text field with an empty initial value and no error message
    pub fn new(label: impl Into<String>, validator: impl Validator + 'static) -> Self {
        Self {
            label: label.into(),
            initial_value: String::new(),
            validator: Arc::new(validator),
            error_message: None,
        }
    }

    /// Email field using the default locale's error message
    pub fn email(label: impl Into<String>) -> Self {
        Self::email_in(label, Locale::default())
    }

    /// Email field with the error message of `locale`
    pub fn email_in(label: impl Into<String>, locale: Locale) -> Self {
        Self::new(label, EmailAddress).error_message(i18n::t(locale, "form.invalid_email"))
    }

    /// Numeric field (initial value "0") using the default locale's error message
    pub fn numeric(label: impl Into<String>) -> Self {
        Self::numeric_in(label, Locale::default())
    }

    /// Numeric field with the error message of `locale`
    pub fn numeric_in(label: impl Into<String>, locale: Locale) -> Self {
        Self::new(label, Integer)
            .initial_value("0")
            .error_message(i18n::t(locale, "form.invalid_numeric"))
    }

    /// Set the initial value
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Replace the validator
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Set the message shown while the value is invalid
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Remove the error message
    pub fn without_error_message(mut self) -> Self {
        self.error_message = None;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn initial(&self) -> &str {
        &self.initial_value
    }

    pub fn message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Validate a value; a panicking validator counts as invalid
    pub fn is_valid(&self, value: &str) -> bool {
        crate::domain::validator::validate_contained(self.validator.as_ref(), &self.label, value)
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("label", &self.label)
            .field("initial_value", &self.initial_value)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

/// How a button decides whether it is interactive
#[derive(Clone)]
pub enum Enablement {
    /// Always enabled, whatever the validity of the form
    Always,
    /// Enabled while the predicate holds and no field is invalid
    Gated(EnabledPredicate),
}

impl fmt::Debug for Enablement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Enablement::Always => f.write_str("Always"),
            Enablement::Gated(_) => f.write_str("Gated"),
        }
    }
}

/// An activatable control of the form
#[derive(Clone)]
pub struct ActionButton {
    title: String,
    style: ButtonStyle,
    on_activate: ActivateHandler,
    enablement: Enablement,
}

impl ActionButton {
    /// Create an always-enabled button
    pub fn new(
        title: impl Into<String>,
        style: ButtonStyle,
        on_activate: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            style,
            on_activate: Arc::new(on_activate),
            enablement: Enablement::Always,
        }
    }

    /// Gate the button on a predicate and on the validity of the form
    pub fn enabled_when(mut self, is_enabled: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.enablement = Enablement::Gated(Arc::new(is_enabled));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn enablement(&self) -> &Enablement {
        &self.enablement
    }

    /// Run the activation handler once
    pub fn activate(&self) {
        (self.on_activate)();
    }
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("enablement", &self.enablement)
            .finish_non_exhaustive()
    }
}

/// One entry of a form definition
#[derive(Debug, Clone)]
pub enum FieldDescriptor {
    Text(TextField),
    Button(ActionButton),
}

impl FieldDescriptor {
    pub fn as_text(&self) -> Option<&TextField> {
        match self {
            FieldDescriptor::Text(field) => Some(field),
            FieldDescriptor::Button(_) => None,
        }
    }

    pub fn as_button(&self) -> Option<&ActionButton> {
        match self {
            FieldDescriptor::Button(button) => Some(button),
            FieldDescriptor::Text(_) => None,
        }
    }
}

impl From<TextField> for FieldDescriptor {
    fn from(field: TextField) -> Self {
        FieldDescriptor::Text(field)
    }
}

impl From<ActionButton> for FieldDescriptor {
    fn from(button: ActionButton) -> Self {
        FieldDescriptor::Button(button)
    }
}

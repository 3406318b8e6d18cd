//! Schema - Declarative Form Files
//!
//! A form described in TOML or JSON and turned into [`FormBuilder`] calls.
//! Buttons declared in a file have no behavior of their own; activating one
//! is logged.
//!
//! ```toml
//! title = "Registro"
//!
//! [[fields]]
//! kind = "text"
//! label = "Nombre"
//! rule = { type = "non_blank" }
//! error_message = "Debe ingresar un nombre"
//!
//! [[fields]]
//! kind = "numeric"
//! label = "Edad"
//! min = 1
//! max = 90
//!
//! [[fields]]
//! kind = "gated_button"
//! title = "Enviar"
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::field::{ButtonStyle, TextField};
use crate::domain::form::{FormBuilder, FormDefinition};
use crate::domain::validator::{AnyValue, EmailAddress, IntRange, Integer, MinLength, NonBlank};
use crate::error::{Error, Result};
use crate::i18n::Locale;

/// A whole form
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FormSchema {
    /// Title shown above the form
    #[serde(default)]
    pub title: Option<String>,
    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// Validation rule of a plain text field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleSchema {
    #[default]
    Any,
    NonBlank,
    MinLength {
        min: usize,
    },
    Integer,
    IntRange {
        min: i64,
        max: i64,
    },
    Email,
}

/// One field of a form file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSchema {
    Text {
        label: String,
        #[serde(default)]
        initial_value: String,
        #[serde(default)]
        rule: RuleSchema,
        #[serde(default)]
        error_message: Option<String>,
    },
    Email {
        label: String,
        #[serde(default)]
        initial_value: Option<String>,
        #[serde(default)]
        error_message: Option<String>,
    },
    Numeric {
        label: String,
        #[serde(default)]
        initial_value: Option<String>,
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
        #[serde(default)]
        error_message: Option<String>,
    },
    Button {
        title: String,
        #[serde(default)]
        style: Option<ButtonStyle>,
    },
    GatedButton {
        title: String,
        #[serde(default)]
        style: Option<ButtonStyle>,
        /// Constant result of the button's own enablement predicate
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
}

fn default_enabled() -> bool {
    true
}

impl RuleSchema {
    fn apply(&self, field: TextField) -> Result<TextField> {
        let field = match self {
            RuleSchema::Any => field.validator(AnyValue),
            RuleSchema::NonBlank => field.validator(NonBlank),
            RuleSchema::MinLength { min } => field.validator(MinLength::new(*min)),
            RuleSchema::Integer => field.validator(Integer),
            RuleSchema::IntRange { min, max } => field.validator(int_range(Some(*min), Some(*max))?),
            RuleSchema::Email => field.validator(EmailAddress),
        };
        Ok(field)
    }
}

fn int_range(min: Option<i64>, max: Option<i64>) -> Result<IntRange> {
    let min = min.unwrap_or(i64::MIN);
    let max = max.unwrap_or(i64::MAX);
    if min > max {
        return Err(Error::Invalid {
            message: format!("Empty range: min {min} is greater than max {max}"),
        });
    }
    Ok(IntRange::new(min..=max))
}

fn logging_handler(title: &str) -> impl Fn() + Send + Sync + 'static {
    let title = title.to_string();
    move || tracing::info!(title = %title, "button activated")
}

impl FieldSchema {
    /// Append this field to a builder
    pub fn append_to(&self, builder: FormBuilder) -> Result<FormBuilder> {
        let locale = builder.locale();
        let builder = match self {
            FieldSchema::Text {
                label,
                initial_value,
                rule,
                error_message,
            } => {
                let mut field = rule
                    .apply(TextField::new(label.as_str(), AnyValue))?
                    .initial_value(initial_value.as_str());
                if let Some(message) = error_message {
                    field = field.error_message(message.as_str());
                }
                builder.text_field(field)
            }
            FieldSchema::Email {
                label,
                initial_value,
                error_message,
            } => {
                let field = TextField::email_in(label.as_str(), locale);
                builder.text_field(customize(field, initial_value, error_message))
            }
            FieldSchema::Numeric {
                label,
                initial_value,
                min,
                max,
                error_message,
            } => {
                let mut field = TextField::numeric_in(label.as_str(), locale);
                if min.is_some() || max.is_some() {
                    field = field.validator(int_range(*min, *max)?);
                }
                builder.text_field(customize(field, initial_value, error_message))
            }
            FieldSchema::Button { title, style } => builder.button(
                title.as_str(),
                style.unwrap_or_default(),
                logging_handler(title),
            ),
            FieldSchema::GatedButton {
                title,
                style,
                enabled,
            } => {
                let enabled = *enabled;
                builder.gated_button(
                    title.as_str(),
                    style.unwrap_or_else(ButtonStyle::gated),
                    logging_handler(title),
                    move || enabled,
                )
            }
        };
        Ok(builder)
    }
}

fn customize(
    mut field: TextField,
    initial_value: &Option<String>,
    error_message: &Option<String>,
) -> TextField {
    if let Some(value) = initial_value {
        field = field.initial_value(value.as_str());
    }
    if let Some(message) = error_message {
        field = field.error_message(message.as_str());
    }
    field
}

impl FormSchema {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the frozen definition; built-in messages use `locale`
    pub fn build(&self, locale: Locale) -> Result<FormDefinition> {
        let builder = self
            .fields
            .iter()
            .try_fold(FormBuilder::with_locale(locale), |builder, field| {
                field.append_to(builder)
            })?;
        builder.build()
    }

    /// JSON Schema describing form files
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(FormSchema);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

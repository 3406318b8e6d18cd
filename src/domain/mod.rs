//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe forms independently of how
//! they are drawn.

pub mod config;
pub mod field;
pub mod form;
pub mod schema;
pub mod validator;

pub use field::{ActionButton, ButtonStyle, Color, Enablement, FieldDescriptor, TextField};
pub use form::{FormBuilder, FormDefinition};
pub use validator::{AnyValue, EmailAddress, IntRange, Integer, MinLength, NonBlank, Validator};

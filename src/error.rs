//! Error types for compose-patterns
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Validation failures are not errors: they are tracked per field in
//! [`FormRuntimeState`](crate::state::FormRuntimeState).

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (settings and schema files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Two text fields of one form share a label
    #[snafu(display("Duplicate field label: {label}"))]
    DuplicateLabel { label: String },

    /// Two buttons of one form share a title
    #[snafu(display("Duplicate button title: {title}"))]
    DuplicateTitle { title: String },

    /// Edit addressed to a label the form does not define
    #[snafu(display("Unknown field: {label}"))]
    UnknownField { label: String },

    /// Activation addressed to a button the form does not define
    #[snafu(display("Unknown button: {title}"))]
    UnknownButton { title: String },

    /// Activation of a button whose effective enablement is false
    #[snafu(display("Button is disabled: {title}"))]
    ButtonDisabled { title: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Config - Application Settings

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HISTORY_CAPACITY, DEFAULT_LOG_FILTER};
use crate::i18n::Locale;

/// Main application settings, stored as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Locale of built-in messages and demo labels
    pub locale: Locale,
    /// Tracing filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Number of button activations kept per mounted form
    pub history_capacity: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            locale: Locale::detect(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

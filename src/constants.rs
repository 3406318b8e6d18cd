//! Constants
//!
//! Centralized names, defaults and layout values.

/// Application name used for directories and window titles
pub const APP_NAME: &str = "compose-patterns";

/// Project directory qualifiers (see `directories::ProjectDirs`)
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "davidmerchan";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "compose-patterns.log";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Activation history capacity
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

/// Width of form inputs and buttons
pub const FORM_CONTENT_WIDTH: f32 = 400.0;

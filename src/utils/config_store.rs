//! ConfigStore - Local Settings and Form Schema Files

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::constants::SETTINGS_FILE;
use crate::domain::config::AppSettings;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;

/// File formats understood by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(FileFormat::Toml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(Error::Invalid {
                message: format!("Unsupported file type: {}", path.display()),
            }),
        }
    }
}

/// Load a TOML or JSON file; a missing file yields `T::default()`
pub fn load_file<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let format = FileFormat::from_path(path)?;

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let value = match format {
        FileFormat::Toml => toml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(value)
}

/// Load a TOML or JSON file that must exist
pub fn load_required<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let value = match format {
        FileFormat::Toml => toml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(value)
}

/// Save a value as TOML or JSON, creating parent directories
pub fn save_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = match FileFormat::from_path(path)? {
        FileFormat::Toml => toml::to_string_pretty(value)?,
        FileFormat::Json => serde_json::to_string_pretty(value)?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Location of the settings file
pub fn settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Load settings from the config directory
pub fn load_settings() -> Result<AppSettings> {
    let path = settings_path()?;
    let settings = load_file(&path)?;
    tracing::info!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Save settings to the config directory
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    save_file(&settings_path()?, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings: AppSettings = load_file(&dir.path().join("settings.toml")).expect("load");
        assert_eq!(settings.history_capacity, crate::constants::DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.toml");
        let settings = AppSettings {
            locale: Locale::EsES,
            log_filter: "debug".to_string(),
            history_capacity: 5,
        };

        save_file(&path, &settings).expect("save");
        let loaded: AppSettings = load_file(&path).expect("load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load_file::<AppSettings>(&dir.path().join("settings.yaml"));
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").expect("write");
        let result = load_file::<AppSettings>(&path);
        assert!(matches!(result, Err(Error::Json { .. })));
    }
}

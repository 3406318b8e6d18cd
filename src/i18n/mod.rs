//! i18n - Internationalization Module
//!
//! Thin wrapper over `rust-i18n` with a typed locale. Translations live in
//! `locales/*.yml`.

use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Spanish (Spain)
    #[serde(rename = "es")]
    EsES,
}

impl Locale {
    /// Locale code used by the translation files
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::EsES => "es",
        }
    }

    /// Parse a locale tag such as `es`, `es-ES` or `en_US.UTF-8`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Locale::EnUS),
            "es" => Some(Locale::EsES),
            _ => None,
        }
    }

    /// Best supported match for the user's system locale
    pub fn detect() -> Self {
        let system = locale_config::Locale::user_default();
        system
            .tags()
            .find_map(|(_, tag)| Self::from_tag(tag.as_ref()))
            .unwrap_or_default()
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    rust_i18n::t!(key, locale = locale.code()).into_owned()
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_format(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(locale, key);

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result
}

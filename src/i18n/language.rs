//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a lightweight handle that
//! validates against the registry instead of hardcoding an enum variant
//! per supported language.

use crate::i18n::{LanguageConfig, LanguageRegistry, LocaleStrings};
use anyhow::{bail, Result};

/// A validated language.
///
/// This type represents a language that has been validated against the registry.
/// It ensures that only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Language code as used in translation file names (e.g., "en", "zh-TW")
    code: &'static str,
}

impl Language {
    /// Constant for English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Constant for Traditional Chinese.
    pub const TRADITIONAL_CHINESE: Language = Language { code: "zh-TW" };

    /// Constant for Japanese.
    pub const JAPANESE: Language = Language { code: "jp" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The language code (e.g., "en", "zh-TW")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    ///
    /// # Example
    /// ```ignore
    /// let chinese = Language::from_code("zh-TW")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (fallback) language.
    ///
    /// This is the language whose translation table is guaranteed complete,
    /// and which every lookup falls back to for missing keys.
    ///
    /// # Returns
    /// The canonical Language (English).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the language whose table is kept warm alongside the active one.
    ///
    /// # Returns
    /// `Some(Language)` if the registry marks a language for preloading,
    /// `None` otherwise.
    pub fn preloaded() -> Option<Language> {
        LanguageRegistry::get()
            .preloaded()
            .map(|config| Language { code: config.code })
    }

    /// Get the language code.
    ///
    /// # Returns
    /// The language code as a static string (e.g., "en", "zh-TW").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Returns
    /// A reference to the `LanguageConfig` for this language.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    ///
    /// # Returns
    /// The language name in English (e.g., "English", "Japanese").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    ///
    /// # Returns
    /// The language name in its native form (e.g., "English", "日本語").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the localized UI strings for this language.
    ///
    /// # Returns
    /// The static notice strings (empty month, load failure) in this language.
    pub fn strings(&self) -> &'static LocaleStrings {
        &self.config().strings
    }

    /// Get the date format pattern for this language.
    ///
    /// # Returns
    /// A `chrono` format string for rendering publication dates.
    pub fn date_format(&self) -> &'static str {
        self.config().date_format
    }

    /// Check if this is the canonical language.
    ///
    /// # Returns
    /// `true` if this is the fallback language, `false` otherwise.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

//! Locale registry: single source of truth for all supported locales.
//!
//! This module provides a centralized registry of every locale the site
//! supports. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use crate::i18n::strings::{
    LocaleStrings, ENGLISH_STRINGS, JAPANESE_STRINGS, TRADITIONAL_CHINESE_STRINGS,
};
use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata for one locale: its code, display names, role in
/// fallback resolution, date formatting, and the static notice strings
/// shown on catalog pages.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Locale code used in resource file names and the persisted
    /// preference (e.g., "en", "zh-TW", "jp")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Traditional Chinese")
    pub name: &'static str,

    /// Native name shown in the language selector (e.g., "繁體中文")
    pub native_name: &'static str,

    /// Whether this is the canonical locale that every lookup falls back
    /// to (exactly one entry should be canonical)
    pub is_canonical: bool,

    /// Whether this locale's resource is fetched on every load cycle even
    /// when it is not the active locale, keeping its table warm
    pub preload: bool,

    /// Whether this locale is enabled for selection
    pub enabled: bool,

    /// chrono format string used to display publication dates in this
    /// locale (the browser's `toLocaleDateString()` analogue)
    pub date_format: &'static str,

    /// Static notice strings for catalog pages in this locale
    pub strings: LocaleStrings,
}

/// Global locale registry singleton.
///
/// Contains all supported locales and provides methods to query them.
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the locale exists
    /// * `None` if the code is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled locales, in selector display order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical locale configuration.
    ///
    /// The canonical locale is the last fallback step of every lookup and
    /// the default preference. There should be exactly one.
    ///
    /// # Panics
    /// Panics if no canonical locale is found or if multiple are defined
    /// (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical locale found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical locales found in registry"),
        }
    }

    /// Get the locale whose table is kept warm on every load cycle, if
    /// one is designated.
    pub fn preloaded(&self) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.preload)
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// The site ships English (canonical), Traditional Chinese (kept warm for
/// the primary audience) and Japanese.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            preload: false,
            enabled: true,
            date_format: "%-m/%-d/%Y",
            strings: ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "zh-TW",
            name: "Traditional Chinese",
            native_name: "繁體中文",
            is_canonical: false,
            preload: true,
            enabled: true,
            date_format: "%Y/%m/%d",
            strings: TRADITIONAL_CHINESE_STRINGS,
        },
        LanguageConfig {
            code: "jp",
            name: "Japanese",
            native_name: "日本語",
            is_canonical: false,
            preload: false,
            enabled: true,
            date_format: "%Y/%m/%d",
            strings: JAPANESE_STRINGS,
        },
    ]
}

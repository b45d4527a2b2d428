//! Persistent language preference.
//!
//! The selected language survives across runs in a small plain-text file
//! holding a single language code. Loading is infallible: anything wrong
//! with the file (missing, unreadable, unknown code) falls back to the
//! canonical language so startup never blocks on preference state.

use crate::i18n::Language;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File-backed store for the user's language choice.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not need to exist yet; it is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved language preference.
    ///
    /// # Returns
    /// The stored language, or the canonical language when no valid
    /// preference is stored. This never fails: a missing file means no
    /// preference, and a corrupt or unknown code is treated the same way
    /// (with a warning) rather than aborting startup.
    pub fn load(&self) -> Language {
        let raw = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Language::canonical(),
        };

        let code = raw.trim();
        if code.is_empty() {
            return Language::canonical();
        }

        match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                warn!(
                    "Stored language preference '{}' is not usable ({}), falling back to {}",
                    code,
                    e,
                    Language::canonical().code()
                );
                Language::canonical()
            }
        }
    }

    /// Persist the given language as the preference.
    ///
    /// Creates parent directories as needed.
    pub fn save(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create preference directory {}",
                    parent.display()
                ))?;
            }
        }

        fs::write(&self.path, format!("{}\n", language.code())).context(format!(
            "Failed to save language preference to {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

use crate::config::Config;
use crate::i18n::{Language, LanguageRegistry, PreferenceStore};
use crate::page::{Action, Document, Element, Handler};
use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::{info, warn};

/// One locale's translation table: translation key to display string.
pub type TranslationMap = HashMap<String, String>;

/// Outcome of a single locale resource fetch within a load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Fetched and stored.
    Loaded,
    /// Attempted but failed; the table is absent.
    Absent,
    /// Not attempted this cycle (covered by another fetch, or not applicable).
    Skipped,
}

/// What a load cycle did: which language ended up active and how each
/// constituent fetch went. Loading never fails outright; the report is
/// how callers observe partial outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub active: Language,
    pub primary: FetchOutcome,
    pub english: FetchOutcome,
    pub secondary: FetchOutcome,
}

/// Owns the active language and the loaded translation tables, and applies
/// them to a page.
///
/// Lookup is two-tier: the active language's table first, then the
/// canonical (English) table. Keys missing from both leave the page's
/// existing text untouched, so a page degrades to its authored text rather
/// than showing raw keys.
pub struct TranslationResolver {
    current: Language,
    tables: HashMap<String, TranslationMap>,
    store: PreferenceStore,
    locales_base_url: String,
}

impl TranslationResolver {
    /// Create a resolver, reading the persisted language preference once.
    pub fn new(config: &Config) -> Self {
        let store = PreferenceStore::new(&config.language_file);
        let current = store.load();
        Self {
            current,
            tables: HashMap::new(),
            store,
            locales_base_url: config.locales_base_url.clone(),
        }
    }

    /// The currently active language.
    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Whether a table for the given language code has been loaded.
    pub fn has_table(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    fn resource_url(&self, language: Language) -> String {
        format!(
            "{}/{}.json",
            self.locales_base_url.trim_end_matches('/'),
            language.code()
        )
    }

    async fn fetch_table(
        &self,
        client: &reqwest::Client,
        language: Language,
    ) -> Result<TranslationMap> {
        let url = self.resource_url(language);

        let response = client
            .get(&url)
            .send()
            .await
            .context(format!("Failed to fetch translations from {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Translation request failed ({}) for {}",
                response.status(),
                url
            );
        }

        let table: TranslationMap = response
            .json()
            .await
            .context(format!("Failed to parse translations from {}", url))?;

        Ok(table)
    }

    /// Run one load cycle for the active language.
    ///
    /// The primary fetch decides whether the active language survives: on
    /// failure the resolver logs it, resets to the canonical language and
    /// attempts the canonical table as a last resort (if that also fails,
    /// lookups simply find nothing and pages keep their authored text).
    /// Afterwards the canonical and secondary-fallback tables are loaded
    /// best-effort, conditioned on the possibly-reset active language;
    /// their failures are swallowed and never change the active language.
    ///
    /// # Returns
    /// A report of the cycle. This method never fails.
    pub async fn load_translations(&mut self, client: &reqwest::Client) -> LoadReport {
        let mut primary = FetchOutcome::Skipped;
        let mut english = FetchOutcome::Skipped;
        let mut secondary = FetchOutcome::Skipped;

        let canonical = Language::canonical();

        // Primary fetch. Its outcome must be known before the best-effort
        // loads run, because they key off the (possibly reset) active
        // language.
        match self.fetch_table(client, self.current).await {
            Ok(table) => {
                self.tables.insert(self.current.code().to_string(), table);
                primary = FetchOutcome::Loaded;
            }
            Err(e) => {
                warn!(
                    "Error loading translations for '{}': {}",
                    self.current.code(),
                    e
                );
                primary = FetchOutcome::Absent;
                self.current = canonical;
                match self.fetch_table(client, canonical).await {
                    Ok(table) => {
                        self.tables.insert(canonical.code().to_string(), table);
                        english = FetchOutcome::Loaded;
                    }
                    Err(e) => {
                        warn!(
                            "Last-resort load of '{}' translations failed: {}",
                            canonical.code(),
                            e
                        );
                        english = FetchOutcome::Absent;
                    }
                }
            }
        }

        // Best-effort co-loads, independent of each other.
        let want_english = self.current != canonical;
        let preload = Language::preloaded().filter(|p| *p != self.current);

        let (english_result, secondary_result) = futures::join!(
            async {
                if want_english {
                    Some(self.fetch_table(client, canonical).await)
                } else {
                    None
                }
            },
            async {
                match preload {
                    Some(language) => Some((language, self.fetch_table(client, language).await)),
                    None => None,
                }
            }
        );

        if let Some(result) = english_result {
            match result {
                Ok(table) => {
                    self.tables.insert(canonical.code().to_string(), table);
                    english = FetchOutcome::Loaded;
                }
                Err(e) => {
                    warn!("Skipping '{}' translations: {}", canonical.code(), e);
                    english = FetchOutcome::Absent;
                }
            }
        }

        if let Some((language, result)) = secondary_result {
            match result {
                Ok(table) => {
                    self.tables.insert(language.code().to_string(), table);
                    secondary = FetchOutcome::Loaded;
                }
                Err(e) => {
                    warn!("Skipping '{}' translations: {}", language.code(), e);
                    secondary = FetchOutcome::Absent;
                }
            }
        }

        LoadReport {
            active: self.current,
            primary,
            english,
            secondary,
        }
    }

    /// Resolve a translation key against the active language, falling back
    /// to the canonical table.
    ///
    /// # Returns
    /// `Some(text)` when either table has the key, `None` otherwise.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(text) = self
            .tables
            .get(self.current.code())
            .and_then(|table| table.get(key))
        {
            return Some(text.as_str());
        }
        self.tables
            .get(Language::canonical().code())
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Apply the loaded tables to a page.
    ///
    /// Every element tagged `data-i18n` gets its text replaced by the
    /// resolved string; elements tagged `data-i18n-placeholder` get their
    /// `placeholder` attribute replaced instead. The document title resolves
    /// through the same two-tier lookup against its own key attribute.
    /// Unresolvable keys leave the existing content alone. Idempotent for a
    /// fixed table and page.
    pub fn apply_translations(&self, document: &mut Document) {
        document.body_mut().for_each_element_mut(&mut |el| {
            let text_key = el.attr("data-i18n").map(str::to_string);
            if let Some(key) = text_key {
                if let Some(text) = self.lookup(&key) {
                    el.set_text(text);
                }
            }

            let placeholder_key = el.attr("data-i18n-placeholder").map(str::to_string);
            if let Some(key) = placeholder_key {
                if let Some(text) = self.lookup(&key) {
                    el.set_attr("placeholder", text);
                }
            }
        });

        let title = document.title_element_mut();
        let title_key = title.attr("data-i18n").map(str::to_string);
        if let Some(key) = title_key {
            if let Some(text) = self.lookup(&key) {
                title.set_text(text);
            }
        }
    }

    /// Wire up the language selector, if the page has one.
    ///
    /// Rebuilds the option list from the registry's enabled languages (one
    /// option per language, value = code, label = native name), selects the
    /// active language, and binds the change event to a language switch.
    /// Pages without a selector are left untouched.
    pub fn setup_language_selector(&self, document: &mut Document) {
        let select = match document.body_mut().find_by_id_mut("language-select") {
            Some(select) => select,
            None => return,
        };

        select.clear_children();
        for config in LanguageRegistry::get().list_enabled() {
            select.append(
                Element::new("option")
                    .with_attr("value", config.code)
                    .with_text(config.native_name),
            );
        }
        select.set_attr("value", self.current.code());
        select.on_change = Some(Handler::new(Action::SwitchLanguage));
    }

    /// Switch the active language, as the selector's change event does:
    /// validate the code, persist it, reload translations (awaited), then
    /// re-apply them to the page.
    ///
    /// The user's choice is persisted before loading, so a load that falls
    /// back to the canonical language still leaves the stored preference at
    /// the selected code for the next page load to retry.
    ///
    /// # Returns
    /// The load report, or an error if the code is not a supported language
    /// or the preference could not be persisted. On a persist failure the
    /// page is left untouched; no load or re-apply runs.
    pub async fn change_language(
        &mut self,
        client: &reqwest::Client,
        code: &str,
        document: &mut Document,
    ) -> Result<LoadReport> {
        let language = Language::from_code(code)?;
        self.current = language;

        self.store
            .save(language)
            .context("Failed to persist language preference")?;

        let report = self.load_translations(client).await;
        self.apply_translations(document);

        info!(
            "Language changed to '{}' (active: '{}')",
            code,
            report.active.code()
        );
        Ok(report)
    }
}

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Content endpoints
    pub locales_base_url: String,
    pub data_base_url: String,

    // Link targets
    pub watch_url_base: String,
    pub search_page_url: String,

    // Local state
    pub language_file: String,

    // HTTP
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Content endpoints - where translation tables and monthly
            // catalog files are served from
            locales_base_url: std::env::var("LOCALES_BASE_URL")
                .context("LOCALES_BASE_URL not set")?,
            data_base_url: std::env::var("DATA_BASE_URL").context("DATA_BASE_URL not set")?,

            // Link targets
            watch_url_base: std::env::var("WATCH_URL_BASE")
                .unwrap_or_else(|_| "https://www.youtube.com/watch?v=".to_string()),
            search_page_url: std::env::var("SEARCH_PAGE_URL")
                .unwrap_or_else(|_| "../pages/search_results.html".to_string()),

            // Local state
            language_file: std::env::var("LANGUAGE_FILE")
                .unwrap_or_else(|_| "data/language.txt".to_string()),

            // HTTP
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

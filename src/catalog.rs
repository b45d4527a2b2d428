use crate::config::Config;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use url::form_urlencoded;

/// Where in the catalog hierarchy a page points: category, sub-category,
/// year and zero-padded month, straight from the page's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCoordinate {
    pub category: String,
    pub sub_category: String,
    pub year: String,
    pub month: String,
}

impl CatalogCoordinate {
    /// Parse a coordinate from a page query string.
    ///
    /// Values are taken as-is from the `cat`, `sub`, `y` and `m` parameters
    /// (first occurrence wins, like `URLSearchParams`); only the month is
    /// normalized, by zero-padding to two characters. Missing parameters
    /// become empty strings. Nothing is validated here: a nonsense
    /// coordinate just produces a data URL whose fetch fails remotely.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut category = None;
        let mut sub_category = None;
        let mut year = None;
        let mut month = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "cat" => &mut category,
                "sub" => &mut sub_category,
                "y" => &mut year,
                "m" => &mut month,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            category: category.unwrap_or_default(),
            sub_category: sub_category.unwrap_or_default(),
            year: year.unwrap_or_default(),
            month: pad_month(&month.unwrap_or_default()),
        }
    }

    /// The URL of this coordinate's monthly data file.
    pub fn data_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}.json",
            base_url.trim_end_matches('/'),
            self.category,
            self.sub_category,
            self.year,
            self.month
        )
    }
}

/// Zero-pad a month string to width 2. Longer strings pass through
/// unchanged ("3" becomes "03", "11" and "123" stay as they are).
pub fn pad_month(raw: &str) -> String {
    if raw.chars().count() >= 2 {
        raw.to_string()
    } else {
        format!("{:0>2}", raw)
    }
}

/// One catalog item as stored in the monthly JSON files. Unknown fields
/// (description, channel title, playlist id) are ignored on parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    pub published_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Why a month's catalog data could not be produced.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed ({status}) for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Failed to fetch catalog data from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse catalog data from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetch the entry list for one catalog coordinate.
///
/// # Returns
/// The entries in source order. An empty list is a valid outcome, not an
/// error. A non-OK response is an error carrying the HTTP status and the
/// requested URL.
pub async fn fetch_month(
    client: &reqwest::Client,
    config: &Config,
    coordinate: &CatalogCoordinate,
) -> Result<Vec<VideoEntry>, CatalogError> {
    let url = coordinate.data_url(&config.data_base_url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| CatalogError::Request {
            url: url.clone(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(CatalogError::Status {
            status: response.status(),
            url,
        });
    }

    let entries: Vec<VideoEntry> =
        response
            .json()
            .await
            .map_err(|source| CatalogError::Parse {
                url: url.clone(),
                source,
            })?;

    info!("Fetched {} catalog entries from {}", entries.len(), url);
    Ok(entries)
}

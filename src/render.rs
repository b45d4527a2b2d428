use crate::catalog::{fetch_month, CatalogCoordinate, CatalogError, VideoEntry};
use crate::config::Config;
use crate::i18n::Language;
use crate::page::{Action, Document, Element, Handler};
use chrono::DateTime;
use tracing::{error, info, warn};
use url::form_urlencoded;

/// How a month page render ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// Entries rendered into the list container.
    Rendered(usize),
    /// The month exists but has no entries; an informational notice was shown.
    Empty,
    /// The fetch or parse failed; an error notice was shown.
    Failed,
}

/// Build the search-results URL for one tag. The tag is already lowercased
/// by the caller; this only takes care of encoding it into the `tag` query
/// parameter.
fn search_url(config: &Config, tag: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("tag", tag)
        .finish();
    format!("{}?{}", config.search_page_url, query)
}

/// Localize a publication timestamp for display.
///
/// Timestamps arrive as RFC 3339 strings; anything unparsable is shown
/// verbatim rather than dropped.
fn format_published_date(raw: &str, language: Language) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format(language.date_format()).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Render one catalog entry as a self-contained grid cell.
///
/// The cell is a link to the entry's video page (thumbnail, title,
/// localized date) followed, when the entry has tags, by a row of tag
/// chips. Each chip keeps the tag's original casing as its label while its
/// `data-tag` matching key is lowercased, and clicking it navigates to the
/// search-results page for that tag instead of following the video link
/// (the chip suppresses the link default and stops the event).
pub fn render_video_item(entry: &VideoEntry, language: Language, config: &Config) -> Element {
    let watch_url = format!("{}{}", config.watch_url_base, entry.video_id);

    let link = Element::new("a")
        .with_attr("href", watch_url)
        .with_attr("target", "_blank")
        .with_child(
            Element::new("img")
                .with_attr("src", &entry.thumbnail)
                .with_attr("alt", &entry.title)
                .with_attr("width", "320"),
        )
        .with_child(
            Element::new("p")
                .with_attr("class", "video-title")
                .with_text(&entry.title),
        )
        .with_child(
            Element::new("p")
                .with_attr("class", "video-date")
                .with_text(format_published_date(&entry.published_at, language)),
        );

    let mut item = Element::new("div")
        .with_attr("class", "video-item")
        .with_child(link);

    if !entry.tags.is_empty() {
        let mut tag_row = Element::new("div").with_attr("class", "video-tags");
        for tag in &entry.tags {
            let key = tag.to_lowercase();
            tag_row = tag_row.with_child(
                Element::new("span")
                    .with_attr("data-tag", &key)
                    .with_on_click(
                        Handler::new(Action::Navigate(search_url(config, &key)))
                            .with_prevent_default()
                            .with_stop_propagation(),
                    )
                    .with_text(tag),
            );
        }
        item = item.with_child(tag_row);
    }

    item
}

fn notice(text: &str) -> Element {
    Element::new("p")
        .with_attr("style", "text-align: center; margin-top: 50px;")
        .with_text(text)
}

fn error_notice(language: Language, err: &CatalogError) -> Vec<Element> {
    let strings = language.strings();
    vec![
        Element::new("p")
            .with_attr("style", "text-align: center; margin-top: 50px; color: red;")
            .with_text(strings.load_failed),
        Element::new("p")
            .with_attr("style", "text-align: center; color: red;")
            .with_text(strings.load_error_detail.replace("{error}", &err.to_string())),
    ]
}

/// Fetch a month's entries and render them into the page's list container.
///
/// Entries render in source order. An empty month shows a single localized
/// notice; any fetch, status or parse failure shows a localized error
/// message carrying the underlying error text. Failures are terminal for
/// the page load (no retry) and are absorbed here rather than propagated.
pub async fn render_month_page(
    client: &reqwest::Client,
    config: &Config,
    language: Language,
    coordinate: &CatalogCoordinate,
    document: &mut Document,
) -> CatalogOutcome {
    let result = fetch_month(client, config, coordinate).await;

    let container = match document.body_mut().find_by_id_mut("video-list") {
        Some(container) => container,
        None => {
            warn!("Page has no video list container, nothing to render");
            return CatalogOutcome::Failed;
        }
    };

    let entries = match result {
        Ok(entries) => entries,
        Err(e) => {
            error!("Error fetching or parsing video data: {}", e);
            container.clear_children();
            for el in error_notice(language, &e) {
                container.append(el);
            }
            return CatalogOutcome::Failed;
        }
    };

    if entries.is_empty() {
        container.clear_children();
        container.append(notice(language.strings().empty_month));
        return CatalogOutcome::Empty;
    }

    container.clear_children();
    for entry in &entries {
        container.append(render_video_item(entry, language, config));
    }
    info!("Rendered {} video entries", entries.len());
    CatalogOutcome::Rendered(entries.len())
}

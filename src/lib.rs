//! Rendering layer for a static video-catalog site.
//!
//! Builds localized monthly catalog pages: query parameters select a
//! category/month coordinate, the matching JSON document is fetched and
//! rendered into a video grid, and UI text is translated through locale
//! tables with English fallback.

pub mod catalog;
pub mod config;
pub mod i18n;
pub mod page;
pub mod render;
pub mod translation;

pub use catalog::{CatalogCoordinate, VideoEntry};
pub use config::Config;
pub use i18n::Language;
pub use page::Document;
pub use render::CatalogOutcome;
pub use translation::TranslationResolver;

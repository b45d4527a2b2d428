use anyhow::{Context, Result};
use tracing::info;

use video_catalog_renderer::catalog::CatalogCoordinate;
use video_catalog_renderer::config::Config;
use video_catalog_renderer::page;
use video_catalog_renderer::render;
use video_catalog_renderer::translation::TranslationResolver;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production/GitHub Actions)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("video_catalog_renderer=info".parse()?),
        )
        .init();

    info!("Starting catalog page render");

    // Load configuration from environment
    let config = Config::from_env()?;

    // The page address arrives as the first argument, e.g.
    // "cat=videos&sub=normal&y=2025&m=3"
    let query = std::env::args().nth(1).unwrap_or_default();
    let coordinate = CatalogCoordinate::from_query(&query);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        .user_agent(concat!("video-catalog-renderer/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    // Step 1: Build the page shell and wire the language selector
    let mut resolver = TranslationResolver::new(&config);
    let mut document = page::catalog_shell();
    resolver.setup_language_selector(&mut document);

    // Step 2: Load translations for the stored language preference and
    // localize the page
    info!(
        "Loading translations for '{}'",
        resolver.current_language().code()
    );
    let report = resolver.load_translations(&client).await;
    info!(
        "Translation load for '{}': primary {:?}, english {:?}, secondary {:?}",
        report.active.code(),
        report.primary,
        report.english,
        report.secondary
    );
    resolver.apply_translations(&mut document);

    // Step 3: Fetch the month's entries and render the grid
    info!(
        "Rendering catalog month {}/{}/{}/{}",
        coordinate.category, coordinate.sub_category, coordinate.year, coordinate.month
    );
    let outcome = render::render_month_page(
        &client,
        &config,
        resolver.current_language(),
        &coordinate,
        &mut document,
    )
    .await;
    info!("Render outcome: {:?}", outcome);

    println!("{}", document.to_html());
    Ok(())
}

use anyhow::{Context, Result};
use language_selector::config::SelectorConfig;
use language_selector::i18n::{InMemoryCatalog, LanguageCode, LanguageSelector, QueryParams};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_selector=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = SelectorConfig::from_env()?;
    info!(
        "Starting language selector for {} ({} languages)",
        config.translation_key,
        config.languages.len()
    );

    let catalog = Arc::new(InMemoryCatalog::builtin(config.locale.clone()));
    if let Some(dir) = &config.catalog_dir {
        let loaded = catalog
            .load_dir(dir, &config.translation_key)
            .with_context(|| format!("Failed to load catalog from {}", dir.display()))?;
        info!("Loaded {} locales from {}", loaded, dir.display());
    }

    // The query string plays the role of the page URL
    let query = std::env::var("SELECTOR_QUERY").unwrap_or_default();

    let mut selector = LanguageSelector::builder(config)
        .catalog(catalog)
        .parameters(QueryParams::parse(&query))
        .build()?;

    let coverage = selector.validate_coverage();
    for warning in &coverage.warnings {
        warn!("{}", warning);
    }
    for error in &coverage.errors {
        warn!("{}", error);
    }

    // Arguments are selections: a language code, or `#N` for a visible index
    for arg in std::env::args().skip(1) {
        if let Some(index) = arg.strip_prefix('#') {
            let index: usize = index
                .parse()
                .with_context(|| format!("Invalid selection index: {}", arg))?;
            selector.select_by_index(index)?;
        } else {
            selector.select(Some(LanguageCode::from(arg)));
        }
    }

    let snapshot = selector.snapshot();
    let entries: Vec<_> = snapshot
        .shortlist
        .iter()
        .map(|code| {
            serde_json::json!({
                "code": code,
                "name": selector.display_name(code),
                "region": selector.region_code(code),
                "flag": selector.flag(code),
            })
        })
        .collect();

    let output = serde_json::json!({
        "active": snapshot.active,
        "selected_index": snapshot.selected_index,
        "detection": selector.has_language_detection(),
        "shortlist": entries,
        "metrics": selector.metrics(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    selector.teardown();
    Ok(())
}

//! Loot-filter inspection binary.
//!
//! Reads one filter file, extracts divination-card rarities, and
//! prints the result as JSON. Meant for debugging filters, not as the
//! orchestration layer of an application.

use divcard_parser::{parse_filter_with_stats, read_filter};
use divcard_types::ParseResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FILTER_PATH_ENV: &str = "DIVCARD_FILTER_PATH";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Filter path from argument, falling back to the env var
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(FILTER_PATH_ENV).ok())
        .ok_or("usage: divcard <path-to.filter> (or set DIVCARD_FILTER_PATH)")?;

    tracing::info!("Reading loot filter: {}", path);
    let content = read_filter(&path)?;

    let (result, stats) = parse_filter_with_stats(&content);
    report(&result, stats.tier_blocks, stats.ignored_blocks);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn report(result: &ParseResult, tier_blocks: usize, ignored_blocks: usize) {
    if !result.has_divination_section {
        tracing::warn!("No usable divination-card section in this filter");
        return;
    }

    tracing::info!(
        "Found divination section: {} tier blocks ({} ignored), {} cards with derived rarity",
        tier_blocks,
        ignored_blocks,
        result.total_cards()
    );
}

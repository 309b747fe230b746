//! Scraping module for listing page retrieval and record extraction
//!
//! This module contains the core pipeline:
//! - Best-effort HTTP fetching of numbered listing pages
//! - Card extraction with selector fallback chains
//! - Per-card record parsing with field-level fallbacks
//! - The sequential page loop with inter-page throttling

mod coordinator;
mod extractor;
mod fetcher;
mod parser;
mod selectors;

pub use coordinator::Scraper;
pub use extractor::CardExtractor;
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use parser::{MovieRecord, RecordParser};

use crate::config::Config;
use crate::MarqueeError;

/// Runs a complete scrape with the given configuration
///
/// Builds the HTTP client and selector chains, walks pages 1 through
/// `site.page-count`, and returns the retained records in page-then-card
/// order. Individual page failures are logged and skipped.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Vec<MovieRecord>)` - Accumulated records, possibly empty
/// * `Err(MarqueeError)` - Setup failed (bad base URL, selector, or client)
pub async fn scrape(config: Config) -> Result<Vec<MovieRecord>, MarqueeError> {
    let scraper = Scraper::new(config)?;
    Ok(scraper.run().await)
}

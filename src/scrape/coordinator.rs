//! Page loop orchestration
//!
//! Drives the sequential 1..=N page loop: fetch, extract cards, parse
//! records, stamp the page number, drop untitled records, throttle, repeat.
//! A failed page is logged and skipped; it never aborts the run.

use crate::config::Config;
use crate::scrape::extractor::CardExtractor;
use crate::scrape::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::scrape::parser::{MovieRecord, RecordParser};
use crate::MarqueeError;
use rand::Rng;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Sequential catalog scraper
pub struct Scraper {
    config: Config,
    client: Client,
    extractor: CardExtractor,
    parser: RecordParser,
}

impl Scraper {
    /// Creates a scraper from a validated configuration
    ///
    /// Compiles all selector chains and builds the HTTP client up front so
    /// configuration mistakes surface before the first request.
    pub fn new(config: Config) -> Result<Self, MarqueeError> {
        let base = Url::parse(&config.site.base_url)?;
        let extractor = CardExtractor::new(&config.selectors)?;
        let parser = RecordParser::new(&config.selectors, base)?;
        let client = build_http_client(&config.client)?;

        Ok(Self {
            config,
            client,
            extractor,
            parser,
        })
    }

    /// Runs the full page loop and returns the accumulated records
    ///
    /// Records come back in page order, then card order within a page. Every
    /// returned record has a non-empty title and `page` in [1, N]. Page-level
    /// failures are logged and skipped, so this never fails once the scraper
    /// is constructed.
    pub async fn run(&self) -> Vec<MovieRecord> {
        let mut records = Vec::new();
        let page_count = self.config.site.page_count;

        for page in 1..=page_count {
            let url = self.config.site.page_url(page);
            tracing::info!("Fetching page {}/{}: {}", page, page_count, url);

            let body = match fetch_page(&self.client, &url).await {
                FetchOutcome::Success { body } => body,
                FetchOutcome::HttpStatus { status } => {
                    tracing::warn!("Page {} returned HTTP {}, skipping", page, status);
                    continue;
                }
                FetchOutcome::Transport { error } => {
                    tracing::warn!("Fetch failed for page {}: {}, skipping", page, error);
                    continue;
                }
            };

            records.extend(self.process_page(page, &body));

            // Considerate pacing between processed pages
            self.pause().await;
        }

        tracing::info!(
            "Scrape complete: {} records from {} pages",
            records.len(),
            page_count
        );
        records
    }

    /// Extracts and parses all cards from one fetched page body
    ///
    /// Untitled records are dropped here; everything kept is stamped with the
    /// page index.
    fn process_page(&self, page: u32, body: &str) -> Vec<MovieRecord> {
        let document = Html::parse_document(body);
        let cards = self.extractor.extract(&document);
        tracing::info!("Found {} candidate cards on page {}", cards.len(), page);

        let mut kept = Vec::new();
        for card in &cards {
            let mut record = self.parser.parse(card);
            record.page = page;

            if record.title.is_empty() {
                tracing::debug!("Dropping untitled card on page {}", page);
                continue;
            }

            tracing::debug!("Parsed '{}' on page {}", record.title, page);
            kept.push(record);
        }
        kept
    }

    /// Sleeps a uniform random duration from the configured interval
    async fn pause(&self) {
        let throttle = &self.config.throttle;
        let delay_ms = {
            let mut rng = rand::thread_rng();
            rng.gen_range(throttle.min_delay_ms..=throttle.max_delay_ms)
        };
        tracing::debug!("Throttling for {}ms", delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}

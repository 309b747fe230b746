//! Card extraction from listing pages
//!
//! A listing page carries zero or more repeating "card" containers, one per
//! catalog item. The extractor tries the configured card selectors in order
//! and keeps the first chain entry that matches anything; if the whole chain
//! misses it falls back to a structural probe that accepts any `article`,
//! `li`, or `div` holding both an image and an anchor.

use crate::config::SelectorsConfig;
use crate::scrape::selectors::compile_chain;
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};

/// Locates repeating card nodes within a parsed listing page
pub struct CardExtractor {
    chain: Vec<Selector>,
    probe: Selector,
    probe_image: Selector,
    probe_anchor: Selector,
}

impl CardExtractor {
    /// Creates an extractor from the configured card selector chain
    pub fn new(config: &SelectorsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            chain: compile_chain(&config.card)?,
            probe: fixed_selector("article, li, div")?,
            probe_image: fixed_selector("img")?,
            probe_anchor: fixed_selector("a")?,
        })
    }

    /// Returns all card nodes in document order
    ///
    /// An empty result is valid; a page with unrecognized markup must not
    /// halt the crawl.
    pub fn extract<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        for selector in &self.chain {
            let cards: Vec<ElementRef<'a>> = document.select(selector).collect();
            if !cards.is_empty() {
                return cards;
            }
        }

        // Last resort: structural probe for item-shaped containers
        document
            .select(&self.probe)
            .filter(|node| {
                node.select(&self.probe_image).next().is_some()
                    && node.select(&self.probe_anchor).next().is_some()
            })
            .collect()
    }
}

fn fixed_selector(pattern: &str) -> Result<Selector, ConfigError> {
    Selector::parse(pattern)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", pattern, e)))
}

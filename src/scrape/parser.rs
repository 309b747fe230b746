//! Record parsing for individual movie cards
//!
//! Each field runs its own fallback selector chain and degrades to an empty
//! string when every selector misses. Parsing is pure: a card with no title
//! still yields a record, and the page loop decides whether to keep it.

use crate::config::SelectorsConfig;
use crate::scrape::selectors::{compile_chain, element_text, first_match};
use crate::ConfigError;
use scraper::{ElementRef, Selector};
use serde::Serialize;
use url::Url;

/// One catalog item extracted from a listing card
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    /// Display title; records with an empty title are dropped by the page loop
    pub title: String,

    /// Absolute poster image URL, or empty
    pub image_url: String,

    /// Rating text as displayed, not parsed to a number
    pub rating: String,

    /// Category tags joined with `;`, in document order
    pub types: String,

    /// 1-based listing page the record came from
    pub page: u32,

    /// Absolute detail page URL, or empty
    pub detail_url: String,
}

/// Tag tokens that show up in tag-like elements but are not categories
const JUNK_TYPE_TOKENS: &[&str] = &["new", "2020", "2021"];

/// Extracts the five record fields from one card node
pub struct RecordParser {
    base: Url,
    title: Vec<Selector>,
    detail: Vec<Selector>,
    image: Vec<Selector>,
    rating: Vec<Selector>,
    types: Vec<Selector>,
}

impl RecordParser {
    /// Creates a parser from the configured field selector chains
    ///
    /// # Arguments
    ///
    /// * `config` - Per-field selector chains
    /// * `base` - Site base URL for resolving relative references
    pub fn new(config: &SelectorsConfig, base: Url) -> Result<Self, ConfigError> {
        Ok(Self {
            base,
            title: compile_chain(&config.title)?,
            detail: compile_chain(&config.detail)?,
            image: compile_chain(&config.image)?,
            rating: compile_chain(&config.rating)?,
            types: compile_chain(&config.types)?,
        })
    }

    /// Parses one card into a record
    ///
    /// Never fails; any selector miss degrades the field to an empty string.
    /// `page` is left at 0 for the caller to stamp.
    pub fn parse(&self, card: &ElementRef) -> MovieRecord {
        MovieRecord {
            title: self.extract_title(card),
            image_url: self.extract_image_url(card),
            rating: self.extract_rating(card),
            types: self.extract_types(card),
            page: 0,
            detail_url: self.extract_detail_url(card),
        }
    }

    /// Title: chain of selectors, preferring a non-empty `title` attribute
    /// over element text; the card image's `alt` attribute is the last resort
    fn extract_title(&self, card: &ElementRef) -> String {
        for selector in &self.title {
            if let Some(node) = card.select(selector).next() {
                let title = match node.value().attr("title") {
                    Some(attr) if !attr.trim().is_empty() => attr.trim().to_string(),
                    _ => element_text(&node),
                };
                if !title.is_empty() {
                    return title;
                }
            }
        }

        // Backfill from the poster's alt text
        first_match(card, &self.image)
            .and_then(|img| img.value().attr("alt"))
            .map(|alt| alt.trim().to_string())
            .unwrap_or_default()
    }

    /// Detail link: `href` of the first matching anchor, resolved to absolute
    fn extract_detail_url(&self, card: &ElementRef) -> String {
        first_match(card, &self.detail)
            .and_then(|node| node.value().attr("href"))
            .map(|href| self.resolve(href))
            .unwrap_or_default()
    }

    /// Poster image: `src`, then lazy-loading `data-src`/`data-original`
    fn extract_image_url(&self, card: &ElementRef) -> String {
        first_match(card, &self.image)
            .and_then(|img| {
                img.value()
                    .attr("src")
                    .or_else(|| img.value().attr("data-src"))
                    .or_else(|| img.value().attr("data-original"))
            })
            .map(|src| self.resolve(src))
            .unwrap_or_default()
    }

    /// Rating text, with the card's own `data-score` attribute as fallback
    fn extract_rating(&self, card: &ElementRef) -> String {
        for selector in &self.rating {
            if let Some(node) = card.select(selector).next() {
                let rating = element_text(&node);
                if !rating.is_empty() {
                    return rating;
                }
            }
        }

        card.value()
            .attr("data-score")
            .map(|score| score.trim().to_string())
            .unwrap_or_default()
    }

    /// Category tags: first chain entry with any non-empty text wins; labels
    /// are deduplicated in order, junk tokens dropped, then joined with `;`
    fn extract_types(&self, card: &ElementRef) -> String {
        let mut labels: Vec<String> = Vec::new();

        for selector in &self.types {
            for node in card.select(selector) {
                let text = element_text(&node).replace('\n', " ").trim().to_string();
                if !text.is_empty() {
                    labels.push(text);
                }
            }
            if !labels.is_empty() {
                break;
            }
        }

        let mut seen: Vec<String> = Vec::new();
        for label in labels {
            if JUNK_TYPE_TOKENS.contains(&label.to_lowercase().as_str()) {
                continue;
            }
            if !seen.contains(&label) {
                seen.push(label);
            }
        }

        seen.join(";")
    }

    /// Resolves a possibly-relative reference against the site base URL
    ///
    /// An unresolvable reference degrades to an empty string, same as a
    /// missing one.
    fn resolve(&self, reference: &str) -> String {
        match self.base.join(reference.trim()) {
            Ok(absolute) => absolute.to_string(),
            Err(_) => String::new(),
        }
    }
}

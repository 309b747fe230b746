//! Fallback selector chain support
//!
//! Every extracted field is driven by an ordered list of CSS selectors tried
//! in sequence until one yields a usable result. Chains are compiled once at
//! scraper construction so a typo in the config fails up front, not per card.

use crate::ConfigError;
use scraper::{ElementRef, Selector};

/// Compiles a configured selector chain into `scraper` selectors
///
/// # Arguments
///
/// * `patterns` - CSS selector strings in priority order
///
/// # Returns
///
/// * `Ok(Vec<Selector>)` - All patterns compiled
/// * `Err(ConfigError)` - A pattern failed to parse as a CSS selector
pub fn compile_chain(patterns: &[String]) -> Result<Vec<Selector>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Selector::parse(pattern)
                .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", pattern, e)))
        })
        .collect()
}

/// Collects and trims the text content of an element
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Finds the first descendant matched by any selector in the chain
///
/// Selectors are tried in chain order; within one selector, document order
/// decides which match wins.
pub fn first_match<'a>(scope: &ElementRef<'a>, chain: &[Selector]) -> Option<ElementRef<'a>> {
    chain
        .iter()
        .find_map(|selector| scope.select(selector).next())
}

//! Marquee: a paginated movie-catalog scraper
//!
//! This crate fetches a fixed run of catalog listing pages, extracts one
//! record per movie card using fallback selector chains, and writes the
//! accumulated records to a BOM-prefixed UTF-8 CSV file.

pub mod config;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for Marquee operations
#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Marquee operations
pub type Result<T> = std::result::Result<T, MarqueeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use output::write_records;
pub use scrape::{scrape, MovieRecord, Scraper};

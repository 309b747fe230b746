//! Configuration module for Marquee
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use marquee::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping {} pages from {}", config.site.page_count, config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ClientConfig, Config, OutputConfig, SelectorsConfig, SiteConfig, ThrottleConfig,
};

// Re-export parser functions
pub use parser::load_config;

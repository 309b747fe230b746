use crate::config::types::{Config, OutputConfig, SelectorsConfig, SiteConfig, ThrottleConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_throttle_config(&config.throttle)?;
    validate_output_config(&config.output)?;
    validate_selectors_config(&config.selectors)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.page_count < 1 {
        return Err(ConfigError::Validation(format!(
            "page-count must be >= 1, got {}",
            config.page_count
        )));
    }

    Ok(())
}

/// Validates the inter-page delay bounds
fn validate_throttle_config(config: &ThrottleConfig) -> Result<(), ConfigError> {
    if config.min_delay_ms > config.max_delay_ms {
        return Err(ConfigError::Validation(format!(
            "min-delay-ms ({}) must not exceed max-delay-ms ({})",
            config.min_delay_ms, config.max_delay_ms
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every configured selector chain is non-empty and that each
/// pattern compiles as a CSS selector
fn validate_selectors_config(config: &SelectorsConfig) -> Result<(), ConfigError> {
    validate_chain("card", &config.card)?;
    validate_chain("title", &config.title)?;
    validate_chain("detail", &config.detail)?;
    validate_chain("image", &config.image)?;
    validate_chain("rating", &config.rating)?;
    validate_chain("types", &config.types)?;
    Ok(())
}

fn validate_chain(field: &str, patterns: &[String]) -> Result<(), ConfigError> {
    if patterns.is_empty() {
        return Err(ConfigError::Validation(format!(
            "selector chain for '{}' cannot be empty",
            field
        )));
    }

    for pattern in patterns {
        Selector::parse(pattern).map_err(|e| {
            ConfigError::InvalidSelector(format!("'{}' for field '{}': {}", pattern, field, e))
        })?;
    }

    Ok(())
}

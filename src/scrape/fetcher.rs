//! HTTP fetcher implementation
//!
//! One best-effort GET per page: no retries, no redirect gymnastics. A failed
//! fetch is a value, not an error, so the page loop can log it and move on.

use crate::config::ClientConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a single page fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the page body
    Success {
        /// Raw response body
        body: String,
    },

    /// The server answered with a non-success status code
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// Transport-level failure (connect error, timeout, body read error)
    Transport {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with the configured user agent and timeouts
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page
///
/// Single attempt, best effort. Every failure mode collapses into a
/// `FetchOutcome` variant; this function never returns `Err` because the
/// caller's contract is to skip failed pages, not abort the run.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchOutcome::HttpStatus {
                    status: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { body },
                Err(e) => FetchOutcome::Transport {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            // Classify error
            if e.is_timeout() {
                FetchOutcome::Transport {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchOutcome::Transport {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchOutcome::Transport {
                    error: e.to_string(),
                }
            }
        }
    }
}

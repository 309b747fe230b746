use serde::Deserialize;

/// Main configuration structure for Marquee
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub throttle: ThrottleConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub selectors: SelectorsConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the catalog site, e.g. "https://ssr1.scrape.center"
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Number of listing pages to fetch, starting at page 1
    #[serde(rename = "page-count")]
    pub page_count: u32,
}

impl SiteConfig {
    /// Builds the URL for a 1-based listing page index
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/page/{}", self.base_url.trim_end_matches('/'), page)
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/114.0 Safari/537.36"
        .to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Inter-page delay configuration
///
/// After each processed page the scraper sleeps a duration drawn uniformly
/// from [min-delay-ms, max-delay-ms] to avoid bursting requests at the host.
#[derive(Debug, Clone, Deserialize)]
pub struct ThrottleConfig {
    #[serde(rename = "min-delay-ms", default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    #[serde(rename = "max-delay-ms", default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

fn default_min_delay_ms() -> u64 {
    600
}

fn default_max_delay_ms() -> u64 {
    1800
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV output file
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

/// Per-field CSS selector fallback chains
///
/// Each chain is tried in order until a selector yields a non-empty result.
/// The defaults reproduce the markup of the reference catalog site; override
/// individual chains when the markup drifts.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorsConfig {
    #[serde(default = "default_card_selectors")]
    pub card: Vec<String>,

    #[serde(default = "default_title_selectors")]
    pub title: Vec<String>,

    #[serde(default = "default_detail_selectors")]
    pub detail: Vec<String>,

    #[serde(default = "default_image_selectors")]
    pub image: Vec<String>,

    #[serde(default = "default_rating_selectors")]
    pub rating: Vec<String>,

    #[serde(default = "default_types_selectors")]
    pub types: Vec<String>,
}

impl Default for SelectorsConfig {
    fn default() -> Self {
        Self {
            card: default_card_selectors(),
            title: default_title_selectors(),
            detail: default_detail_selectors(),
            image: default_image_selectors(),
            rating: default_rating_selectors(),
            types: default_types_selectors(),
        }
    }
}

fn default_card_selectors() -> Vec<String> {
    [
        ".movie-item",
        ".el-card.movie-item",
        ".el-card",
        ".card",
        ".item",
        ".movie",
    ]
    .map(String::from)
    .to_vec()
}

fn default_title_selectors() -> Vec<String> {
    [
        "h2",
        ".name",
        "a[title]",
        "a.movie-name",
        ".el-card__header h2",
    ]
    .map(String::from)
    .to_vec()
}

fn default_detail_selectors() -> Vec<String> {
    ["a[href]"].map(String::from).to_vec()
}

fn default_image_selectors() -> Vec<String> {
    ["img"].map(String::from).to_vec()
}

fn default_rating_selectors() -> Vec<String> {
    [
        ".score",
        ".rating",
        ".en .score",
        ".info .score",
        ".score-number",
    ]
    .map(String::from)
    .to_vec()
}

fn default_types_selectors() -> Vec<String> {
    [
        ".types",
        ".genre",
        ".genres",
        ".categories",
        ".category",
        ".meta",
        ".info .tags",
    ]
    .map(String::from)
    .to_vec()
}

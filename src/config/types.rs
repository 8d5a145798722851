use serde::Deserialize;

/// Main configuration structure for the crawler
///
/// Every section is optional in the TOML file; missing sections fall back to
/// the defaults for `m.mashina.kg`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Target site description
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin used to resolve relative listing and profile links
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// First search results page; its pagination block gives the page count
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Query parameter carrying the 1-based page index
    #[serde(rename = "page-param")]
    pub page_param: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://m.mashina.kg".to_string(),
            seed_url: "https://m.mashina.kg/search/all/?page=1".to_string(),
            page_param: "page".to_string(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/114.0.0.0 Safari/537.36"
                .to_string(),
            timeout_secs: 10,
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Upper bound on in-flight fetches; 0 means unbounded
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: usize,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON file receiving the aggregated collection
    #[serde(rename = "results-path")]
    pub results_path: String,

    /// Optional log file; log lines are appended to it as well as printed
    #[serde(rename = "log-path")]
    pub log_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: "full_results.json".to_string(),
            log_path: None,
        }
    }
}

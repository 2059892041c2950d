use serde::Deserialize;

/// Main configuration structure for linkrot
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrawlerConfig {
    /// Number of concurrent fetch workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Capacity of the discovered-link and dead-link streams
    #[serde(rename = "channel-capacity", default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            request_timeout_secs: default_timeout_secs(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_workers() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_channel_capacity() -> usize {
    100
}

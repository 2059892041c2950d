//! Linkrot: a concurrent dead-link auditor
//!
//! This crate crawls a website starting from a seed page, following
//! same-domain hyperlinks with a pool of concurrent workers, and reports
//! every URL whose fetch fails or returns an HTTP error status.

pub mod config;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Main error type for linkrot operations
#[derive(Debug, Error)]
pub enum LinkrotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Configuration-specific errors
///
/// These are the only errors that abort a crawl before it starts. Everything
/// that goes wrong per page during the crawl is absorbed by the workers and
/// either recorded as a dead link or dropped with a log line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL {url:?}: {source}")]
    InvalidSeed { url: String, source: UrlError },
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Relative URL with no base to resolve against")]
    MissingBase,

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for linkrot operations
pub type Result<T> = std::result::Result<T, LinkrotError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, CrawlerConfig};
pub use crawler::crawl;
pub use url::{canonicalize, same_host};

//! Configuration module for linkrot
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings have defaults, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use linkrot::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkrot.toml")).unwrap();
//! println!("Crawling with {} workers", config.crawler.workers);
//! ```

mod types;
mod validation;

pub use types::{Config, CrawlerConfig};
pub use validation::validate_config;

use crate::ConfigResult;
use std::path::Path;

/// Loads and validates a configuration file
///
/// # Arguments
///
/// * `path` - Path to a TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Parsed and validated configuration
/// * `Err(ConfigError)` - File unreadable, unparseable, or invalid
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[crawler]\nworkers = 4\nrequest-timeout-secs = 2\nchannel-capacity = 50"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawler.workers, 4);
        assert_eq!(config.crawler.request_timeout_secs, 2);
        assert_eq!(config.crawler.channel_capacity, 50);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[crawler]\nworkers = 2").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawler.workers, 2);
        assert_eq!(config.crawler.request_timeout_secs, 5);
        assert_eq!(config.crawler.channel_capacity, 100);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[crawler\nworkers = ").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_zero_workers_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[crawler]\nworkers = 0").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let result = load_config(Path::new("/nonexistent/linkrot.toml"));
        assert!(result.is_err());
    }
}

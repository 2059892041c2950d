use crate::config::Config;
use crate::{ConfigError, ConfigResult};

/// Validates a configuration
///
/// A worker count of zero would leave the job queue forever unconsumed and
/// the crawl would never terminate, so it is rejected here rather than
/// special-cased downstream. Channel capacity and timeout must likewise be
/// non-zero.
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.crawler.workers == 0 {
        return Err(ConfigError::Validation(
            "workers must be at least 1".to_string(),
        ));
    }

    if config.crawler.channel_capacity == 0 {
        return Err(ConfigError::Validation(
            "channel-capacity must be at least 1".to_string(),
        ));
    }

    if config.crawler.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be at least 1".to_string(),
        ));
    }

    Ok(())
}

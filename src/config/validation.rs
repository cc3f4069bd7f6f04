use crate::config::types::ScraperConfig;
use crate::{ConfigError, ConfigResult};

/// Validates a scraper configuration.
///
/// Checks the constraints the crawl loop relies on: a positive page budget,
/// a usable timeout, a non-negative delay, a non-empty user agent, and
/// well-formed extension filters (lowercase, dot-prefixed).
pub fn validate(config: &ScraperConfig) -> ConfigResult<()> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(
            "max-pages must be at least 1".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "timeout must be at least 1 second".to_string(),
        ));
    }

    if !config.delay_secs.is_finite() || config.delay_secs < 0.0 {
        return Err(ConfigError::Validation(
            "delay must be a non-negative number of seconds".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_string(),
        ));
    }

    for ext in &config.exclude_extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "excluded extension {:?} must be dot-prefixed",
                ext
            )));
        }
        if *ext != ext.to_lowercase() {
            return Err(ConfigError::Validation(format!(
                "excluded extension {:?} must be lowercase",
                ext
            )));
        }
    }

    Ok(())
}

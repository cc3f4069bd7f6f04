use crate::url::DEFAULT_EXCLUDED_EXTENSIONS;
use serde::Deserialize;
use std::time::Duration;

/// Top-level structure of an optional TOML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub scraper: ScraperConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Maximum number of distinct pages to visit
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Maximum link depth to follow from the seed URL
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout")]
    pub timeout_secs: u64,

    /// Delay between page fetches in seconds
    #[serde(rename = "delay")]
    pub delay_secs: f64,

    /// Whether to bootstrap the crawl from sitemap.xml / robots.txt
    #[serde(rename = "follow-sitemap")]
    pub follow_sitemap: bool,

    /// User agent string sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// File extensions to exclude when following links (lowercase,
    /// dot-prefixed)
    #[serde(rename = "exclude-extensions")]
    pub exclude_extensions: Vec<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_pages: 50,
            max_depth: 3,
            timeout_secs: 10,
            delay_secs: 1.0,
            follow_sitemap: false,
            user_agent: format!("webchecker/{}", env!("CARGO_PKG_VERSION")),
            exclude_extensions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ScraperConfig {
    /// Per-request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Inter-request delay as a [`Duration`]
    pub fn delay(&self) -> Duration {
        Duration::from_secs_f64(self.delay_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.max_pages, 50);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert!(!config.follow_sitemap);
        assert!(config.exclude_extensions.contains(&".pdf".to_string()));
    }
}

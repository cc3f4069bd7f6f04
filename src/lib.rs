//! WebChecker: a pattern-hunting website crawler
//!
//! This crate implements a breadth-first, single-domain web crawler that
//! extracts substrings matching a configurable pattern (a literal symbol,
//! a custom regular expression, or a validated email-detection mode),
//! optionally with the surrounding word context.

pub mod config;
pub mod crawler;
pub mod output;
pub mod pattern;
pub mod url;

use thiserror::Error;

/// Main error type for WebChecker operations
#[derive(Debug, Error)]
pub enum WebCheckerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL: {0}")]
    InvalidUrl(String),
}

/// Pattern construction errors
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("{0}")]
    ModeMismatch(String),
}

/// Per-page fetch errors (recovered locally: logged and skipped)
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for WebChecker operations
pub type Result<T> = std::result::Result<T, WebCheckerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::ScraperConfig;
pub use crawler::{PageProgress, ScrapeOptions, Scraper};
pub use pattern::{Pattern, PatternMatcher};
pub use url::{normalize_url, url_authority};

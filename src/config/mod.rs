//! Configuration module for WebChecker
//!
//! Crawl knobs can come from an optional TOML file, with command-line flags
//! taking precedence. Everything is validated before a crawl starts.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{ConfigFile, ScraperConfig};
pub use validation::validate;

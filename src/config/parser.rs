use crate::config::types::{ConfigFile, ScraperConfig};
use crate::config::validation::validate;
use crate::ConfigResult;
use std::path::Path;

/// Loads and parses a scraper configuration file from the given path.
///
/// The file is TOML with a `[scraper]` table; missing keys fall back to
/// their defaults. The result is validated before being returned.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use webchecker::config::load_config;
///
/// let config = load_config(Path::new("webchecker.toml")).unwrap();
/// println!("Max pages: {}", config.max_pages);
/// ```
pub fn load_config(path: &Path) -> ConfigResult<ScraperConfig> {
    let content = std::fs::read_to_string(path)?;

    let file: ConfigFile = toml::from_str(&content)?;
    let config = file.scraper;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[scraper]
max-pages = 10
max-depth = 2
timeout = 5
delay = 0.5
follow-sitemap = true
exclude-extensions = [".pdf", ".zip"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.max_pages, 10);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.timeout_secs, 5);
        assert!(config.follow_sitemap);
        assert_eq!(config.exclude_extensions, vec![".pdf", ".zip"]);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = create_temp_config("[scraper]\nmax-pages = 7\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.max_pages, 7);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.delay_secs, 1.0);
    }

    #[test]
    fn test_empty_file_uses_all_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.max_pages, 50);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/webchecker.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[scraper]\nmax-pages = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}

use crate::UrlError;
use url::Url;

/// Normalizes a seed URL string into a parsed URL.
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prepend `https://` when no scheme is given
/// 3. Parse; reject if malformed
/// 4. Reject non-HTTP(S) schemes and URLs without a host
///
/// # Examples
///
/// ```
/// use webchecker::url::normalize_url;
///
/// let url = normalize_url("example.com/page").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let trimmed = url_str.trim();

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_https() {
        let url = normalize_url("https://example.com/page").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_passthrough_http() {
        let url = normalize_url("http://example.com/").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_schemeless_gets_https() {
        let url = normalize_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let url = normalize_url("  example.com  ").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(normalize_url("http://").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(normalize_url("").is_err());
    }
}

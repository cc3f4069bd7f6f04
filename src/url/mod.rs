//! URL handling module for WebChecker
//!
//! This module provides seed URL normalization, authority extraction for the
//! same-domain policy, and the link exclusion filter.

mod filter;
mod normalize;

use url::Url;

// Re-export main functions
pub use filter::{is_excluded_url, DEFAULT_EXCLUDED_EXTENSIONS};
pub use normalize::normalize_url;

/// Returns the authority (`host[:port]`) of a URL, lowercased.
///
/// Returns `None` for URLs without a host. The port is included only when it
/// is explicit and non-default, matching how the crawl's domain scope
/// compares links.
pub fn url_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

/// Checks whether two URLs share the same authority.
///
/// Only `host[:port]` is compared; scheme is deliberately ignored, so
/// `http://example.com` and `https://example.com` count as the same site,
/// while `www.example.com` and `example.com` do not.
pub fn same_authority(a: &Url, b: &Url) -> bool {
    match (url_authority(a), url_authority(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_simple_host() {
        let url = Url::parse("https://example.com/path").unwrap();
        assert_eq!(url_authority(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_authority_includes_explicit_port() {
        let url = Url::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url_authority(&url), Some("127.0.0.1:8080".to_string()));
    }

    #[test]
    fn test_authority_lowercases_host() {
        let url = Url::parse("https://EXAMPLE.com/").unwrap();
        assert_eq!(url_authority(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_same_authority_ignores_scheme() {
        let a = Url::parse("http://example.com/a").unwrap();
        let b = Url::parse("https://example.com/b").unwrap();
        assert!(same_authority(&a, &b));
    }

    #[test]
    fn test_subdomain_is_different_authority() {
        let a = Url::parse("https://example.com/").unwrap();
        let b = Url::parse("https://www.example.com/").unwrap();
        assert!(!same_authority(&a, &b));
    }

    #[test]
    fn test_different_port_is_different_authority() {
        let a = Url::parse("http://example.com:8080/").unwrap();
        let b = Url::parse("http://example.com:9090/").unwrap();
        assert!(!same_authority(&a, &b));
    }
}

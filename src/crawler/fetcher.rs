//! HTTP fetcher for the crawler
//!
//! Builds the shared HTTP client and fetches individual pages. Redirects are
//! followed transparently; non-2xx responses are reported as errors so the
//! crawl loop can log and skip the page.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with the crawler's user agent and timeouts.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use webchecker::crawler::build_http_client;
///
/// let client = build_http_client("webchecker/0.1.0", Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body.
///
/// A network failure, a timeout, or a non-success status all map to a
/// [`FetchError`]. The caller treats every fetch error identically: log the
/// page and move on.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| FetchError::Request {
        url: url.to_string(),
        source: e,
    })
}

//! Sitemap bootstrap for the crawler
//!
//! Before the main loop starts, the crawler can probe the well-known sitemap
//! locations and robots.txt to discover additional seed URLs. Discovery is
//! best-effort: any individual probe failure is swallowed.

use crate::crawler::fetcher::fetch_page;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use url::Url;

/// Well-known sitemap probe locations relative to the site root
const SITEMAP_LOCATIONS: &[&str] = &["/sitemap.xml", "/sitemap_index.xml", "/robots.txt"];

/// Discovers URLs from the site's sitemaps and robots.txt.
///
/// Probes `/sitemap.xml`, `/sitemap_index.xml` and `/robots.txt` relative to
/// the start URL. Sitemap XML contributes its `<url><loc>` entries; robots.txt
/// contributes the URLs of its `sitemap:` directives. All discovered URLs are
/// returned for the caller to enqueue at depth 0; fetch failures for any
/// individual source are logged at debug level and skipped.
pub async fn discover_sitemap_urls(client: &Client, base_url: &Url) -> Vec<String> {
    let mut discovered = Vec::new();

    for location in SITEMAP_LOCATIONS {
        let probe = match base_url.join(location) {
            Ok(url) => url,
            Err(_) => continue,
        };

        match fetch_page(client, probe.as_str()).await {
            Ok(body) => {
                if location.ends_with("robots.txt") {
                    discovered.extend(sitemap_urls_from_robots(&body));
                } else {
                    discovered.extend(urls_from_sitemap_xml(&body));
                }
            }
            Err(e) => {
                tracing::debug!("Sitemap probe {} failed: {}", probe, e);
            }
        }
    }

    discovered
}

/// Extracts sitemap URLs from robots.txt content.
///
/// Lines beginning with `sitemap:` (case-insensitive) contribute the URL on
/// the rest of the line; everything else is ignored.
pub fn sitemap_urls_from_robots(content: &str) -> Vec<String> {
    let mut urls = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        // get() guards against byte 8 landing inside a multibyte character
        let is_directive = line
            .get(..8)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("sitemap:"));
        if is_directive {
            let url = line[8..].trim();
            if !url.is_empty() {
                urls.push(url.to_string());
            }
        }
    }

    urls
}

/// Extracts content URLs from sitemap XML.
///
/// Collects the text of `<loc>` elements nested inside `<url>` entries.
/// `<sitemap><loc>` entries of a sitemap index are deliberately not followed.
/// Malformed XML yields whatever was parsed up to the error.
pub fn urls_from_sitemap_xml(content: &str) -> Vec<String> {
    let mut reader = Reader::from_str(content);
    let mut urls = Vec::new();
    let mut in_url = false;
    let mut in_loc = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => match tag.local_name().as_ref() {
                b"url" => in_url = true,
                b"loc" if in_url => in_loc = true,
                _ => {}
            },
            Ok(Event::End(tag)) => match tag.local_name().as_ref() {
                b"url" => in_url = false,
                b"loc" => in_loc = false,
                _ => {}
            },
            Ok(Event::Text(text)) if in_loc => {
                if let Ok(value) = text.unescape() {
                    let value = value.trim();
                    if !value.is_empty() {
                        urls.push(value.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!("Error parsing sitemap XML: {}", e);
                break;
            }
            _ => {}
        }
    }

    urls
}

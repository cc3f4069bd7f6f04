//! HTML parser for extracting page text and links
//!
//! Turns fetched markup into the crawler's view of a page: the plain text
//! content (script and style elements excluded), the absolute outbound links,
//! and any `mailto:` hrefs for email mode.

use scraper::{Html, Node, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Plain text content, with script/style element content excluded
    pub text: String,

    /// Absolute HTTP(S) links found in anchor tags
    pub links: Vec<Url>,

    /// Raw `mailto:` hrefs found in anchor tags
    pub mailto_hrefs: Vec<String>,
}

/// Parses HTML content into text, links and mailto hrefs.
///
/// Anchor hrefs are resolved against `base_url` to absolute URLs; only
/// `http`/`https` results are kept. `mailto:` hrefs are collected verbatim
/// for email-mode extraction. `javascript:`, `tel:` and `data:` hrefs and
/// fragment-only anchors are dropped.
pub fn parse_page(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        text: extract_text(&document),
        links: extract_links(&document, base_url),
        mailto_hrefs: extract_mailto_hrefs(&document),
    }
}

/// Collects the text content of a document, excluding script/style elements
fn extract_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(fragment) = node.value() {
            let excluded = node.ancestors().any(|ancestor| {
                matches!(ancestor.value(),
                    Node::Element(el) if el.name() == "script" || el.name() == "style")
            });
            if !excluded {
                text.push_str(fragment);
            }
        }
    }

    text
}

/// Extracts absolute same-or-cross-domain links from anchor tags.
/// Domain filtering happens later in the crawl loop.
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(url) = resolve_link(href, base_url) {
                    links.push(url);
                }
            }
        }
    }

    links
}

/// Collects raw mailto: hrefs from anchor tags
fn extract_mailto_hrefs(document: &Html) -> Vec<String> {
    let mut hrefs = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                let href = href.trim();
                if href.starts_with("mailto:") {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}

/// Resolves a link href to an absolute HTTP(S) URL, or None if the link
/// should be dropped
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(url),
        _ => None,
    }
}

//! Crawler module for WebChecker
//!
//! The crawler fetches pages, parses them into text and links, discovers
//! extra seeds from sitemaps, and runs the breadth-first scrape loop.

mod fetcher;
mod parser;
mod scraper;
mod sitemap;

pub use fetcher::{build_http_client, fetch_page};
pub use parser::{parse_page, ParsedPage};
pub use scraper::{PageProgress, ScrapeOptions, Scraper};
pub use sitemap::{discover_sitemap_urls, sitemap_urls_from_robots, urls_from_sitemap_xml};

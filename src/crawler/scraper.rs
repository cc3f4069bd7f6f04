//! BFS crawl orchestration
//!
//! The scraper owns the visited set and the FIFO queue of (url, depth) pairs,
//! and drives the fetch-parse-extract cycle for each page: dequeue, fetch,
//! run the pattern matcher over the text, enqueue unvisited same-site links
//! at depth+1, sleep the politeness delay, repeat until the queue empties or
//! the page budget is reached.

use crate::config::{validate, ScraperConfig};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::{parse_page, ParsedPage};
use crate::crawler::sitemap::discover_sitemap_urls;
use crate::pattern::{is_valid_email, PatternMatcher};
use crate::url::{is_excluded_url, normalize_url, same_authority, url_authority};
use crate::{PatternError, Result, UrlError};
use reqwest::Client;
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use url::Url;

/// Options controlling one scrape invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrapeOptions {
    /// Extend matches leftward to the previous word boundary
    pub extract_before: bool,

    /// Extend matches rightward to the next word boundary
    pub extract_after: bool,

    /// Group validated email addresses by address across pages
    pub email_mode: bool,
}

/// Progress snapshot handed to the observer after each visited page,
/// including pages whose fetch failed (they still consume the budget)
#[derive(Debug)]
pub struct PageProgress<'a> {
    /// The page that was just visited
    pub url: &'a str,

    /// Its depth from the seed URL
    pub depth: u32,

    /// Total distinct URLs visited so far
    pub pages_visited: usize,

    /// Entries still waiting in the queue
    pub queued: usize,

    /// Result lines (or distinct emails, in email mode) collected so far
    pub matches_found: usize,
}

/// Breadth-first, single-domain web scraper.
///
/// The visited set persists for the scraper's lifetime, so successive
/// `scrape` calls on the same instance share visited history. A scraper is
/// not designed for concurrent mutation; run independent crawls on
/// independent instances.
pub struct Scraper {
    config: ScraperConfig,
    client: Client,
    visited: HashSet<String>,
}

impl Scraper {
    /// Creates a scraper from a validated configuration.
    ///
    /// Fails with a configuration error on invalid settings (a zero page
    /// budget in particular), before any crawl starts.
    pub fn new(config: ScraperConfig) -> Result<Self> {
        validate(&config)?;
        let client = build_http_client(&config.user_agent, config.timeout())?;

        Ok(Self {
            config,
            client,
            visited: HashSet::new(),
        })
    }

    /// Number of distinct URLs visited over this scraper's lifetime
    pub fn pages_visited(&self) -> usize {
        self.visited.len()
    }

    /// Crawls from `start_url` and returns the formatted result lines.
    ///
    /// In normal mode each line is `"<url>: <token>"` in crawl-then-match
    /// order. In email mode each line is `"<email>: <page, page, ...>"` with
    /// one line per distinct address and its source pages lexicographically
    /// sorted. Once the crawl has started it always returns a (possibly
    /// empty) result list; per-page failures are logged and skipped.
    pub async fn scrape(
        &mut self,
        start_url: &str,
        matcher: &PatternMatcher,
        options: &ScrapeOptions,
    ) -> Result<Vec<String>> {
        self.scrape_with_progress(start_url, matcher, options, |_| {})
            .await
    }

    /// Crawls like [`Self::scrape`], invoking `on_page` after each visited
    /// page, fetch failures included. This is the single crawl loop;
    /// interactive front ends hook in via the observer instead of
    /// duplicating the loop.
    pub async fn scrape_with_progress(
        &mut self,
        start_url: &str,
        matcher: &PatternMatcher,
        options: &ScrapeOptions,
        mut on_page: impl FnMut(&PageProgress<'_>),
    ) -> Result<Vec<String>> {
        if options.email_mode && !matcher.is_email_mode() {
            return Err(PatternError::ModeMismatch(
                "email mode requires an email-mode matcher".to_string(),
            )
            .into());
        }

        let start = normalize_url(start_url)?;
        if url_authority(&start).is_none() {
            return Err(UrlError::MissingHost.into());
        }

        let mut results: Vec<String> = Vec::new();
        let mut email_groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut queue: VecDeque<(String, u32)> = VecDeque::new();
        queue.push_back((start.to_string(), 0));

        if self.config.follow_sitemap {
            for url in discover_sitemap_urls(&self.client, &start).await {
                if !self.visited.contains(&url) {
                    queue.push_back((url, 0));
                }
            }
        }

        loop {
            if self.visited.len() >= self.config.max_pages {
                tracing::info!("Page budget of {} reached", self.config.max_pages);
                break;
            }
            let Some((current_url, depth)) = queue.pop_front() else {
                break;
            };

            if self.visited.contains(&current_url) || depth > self.config.max_depth {
                continue;
            }
            self.visited.insert(current_url.clone());
            tracing::info!("Scraping {} (depth: {})", current_url, depth);

            let page = match self.fetch_and_parse(&current_url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Error scraping {}: {}", current_url, e);
                    tokio::time::sleep(self.config.delay()).await;
                    on_page(&PageProgress {
                        url: &current_url,
                        depth,
                        pages_visited: self.visited.len(),
                        queued: queue.len(),
                        matches_found: if options.email_mode {
                            email_groups.len()
                        } else {
                            results.len()
                        },
                    });
                    continue;
                }
            };

            if options.email_mode {
                match page_emails(matcher, &page, &current_url) {
                    Ok(pairs) => {
                        for (email, page_url) in pairs {
                            email_groups.entry(email).or_default().insert(page_url);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Error extracting emails from {}: {}", current_url, e)
                    }
                }
            } else {
                for token in matcher.find_matches(
                    &page.text,
                    options.extract_before,
                    options.extract_after,
                ) {
                    results.push(format!("{}: {}", current_url, token));
                }
            }

            // Politeness pacing, applied after every page including the last
            tokio::time::sleep(self.config.delay()).await;

            if depth < self.config.max_depth {
                for link in &page.links {
                    if !same_authority(link, &start) {
                        continue;
                    }
                    if is_excluded_url(link, &self.config.exclude_extensions) {
                        continue;
                    }
                    let link_str = link.to_string();
                    if !self.visited.contains(&link_str) {
                        queue.push_back((link_str, depth + 1));
                    }
                }
            }

            let matches_found = if options.email_mode {
                email_groups.len()
            } else {
                results.len()
            };
            on_page(&PageProgress {
                url: &current_url,
                depth,
                pages_visited: self.visited.len(),
                queued: queue.len(),
                matches_found,
            });
        }

        if options.email_mode {
            Ok(render_email_groups(&email_groups))
        } else {
            Ok(results)
        }
    }

    /// Fetches a page and parses it into text, links and mailto hrefs
    async fn fetch_and_parse(&self, url: &str) -> Result<ParsedPage> {
        let body = fetch_page(&self.client, url).await?;
        let base = Url::parse(url)?;
        Ok(parse_page(&body, &base))
    }
}

/// Extracts validated (email, page) pairs from one page: text matches first,
/// then `mailto:` hrefs, deduplicated within the page by address with the
/// first occurrence winning.
fn page_emails(
    matcher: &PatternMatcher,
    page: &ParsedPage,
    page_url: &str,
) -> std::result::Result<Vec<(String, String)>, PatternError> {
    let mut all = matcher.find_emails_with_pages(&page.text, page_url)?;

    for href in &page.mailto_hrefs {
        let email = href.trim_start_matches("mailto:");
        // Drop any query/fragment suffix (e.g. mailto:a@b.com?subject=hi)
        let email = email.split('?').next().unwrap_or(email);
        let email = email.split('#').next().unwrap_or(email);

        if is_valid_email(email) {
            all.push((email.to_string(), page_url.to_string()));
        }
    }

    let mut seen = HashSet::new();
    all.retain(|(email, _)| seen.insert(email.clone()));

    Ok(all)
}

/// Renders the final email-mode output: one line per distinct address,
/// source pages comma-joined and lexicographically sorted
fn render_email_groups(groups: &BTreeMap<String, BTreeSet<String>>) -> Vec<String> {
    groups
        .iter()
        .map(|(email, pages)| {
            let pages: Vec<&str> = pages.iter().map(String::as_str).collect();
            format!("{}: {}", email, pages.join(", "))
        })
        .collect()
}

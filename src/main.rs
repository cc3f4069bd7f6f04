//! WebChecker main entry point
//!
//! Command-line interface for crawling a website and extracting pattern
//! matches: literal symbols, custom regexes, or validated email addresses.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use webchecker::config::{load_config, ScraperConfig};
use webchecker::output::write_results;
use webchecker::{Pattern, PatternMatcher, ScrapeOptions, Scraper};

/// WebChecker: find specific characters and patterns on websites
///
/// Crawls a website breadth-first from a seed URL, restricted to the seed's
/// domain, and extracts substrings matching the configured pattern.
#[derive(Parser, Debug)]
#[command(name = "webchecker")]
#[command(version)]
#[command(about = "Find specific characters and patterns on websites", long_about = None)]
#[command(group = ArgGroup::new("pattern_spec").required(true).multiple(false))]
struct Cli {
    /// URL of the website to scrape
    #[arg(value_name = "URL")]
    url: String,

    /// Character or string to search for (e.g. "™", "@", "©")
    #[arg(long, group = "pattern_spec")]
    pattern: Option<String>,

    /// Custom regex pattern to search for
    #[arg(long, group = "pattern_spec")]
    custom_pattern: Option<String>,

    /// Enable email detection mode with validation and grouping
    #[arg(long, group = "pattern_spec")]
    email_mode: bool,

    /// Extract text before the matched pattern
    #[arg(long)]
    extract_before: bool,

    /// Extract text after the matched pattern
    #[arg(long)]
    extract_after: bool,

    /// Maximum number of pages to scrape
    #[arg(long)]
    max_pages: Option<usize>,

    /// Maximum link depth to follow
    #[arg(long)]
    max_depth: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Delay between requests in seconds
    #[arg(long)]
    delay: Option<f64>,

    /// Follow sitemap URLs for more comprehensive scraping
    #[arg(long)]
    follow_sitemap: bool,

    /// Disable sitemap following even if enabled in the config file
    #[arg(long, conflicts_with = "follow_sitemap")]
    no_sitemap: bool,

    /// File extensions to exclude (e.g. .pdf .doc .jpg)
    #[arg(long, num_args = 1..)]
    exclude_extensions: Option<Vec<String>>,

    /// Output file to save results (default: print to console)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let pattern = pattern_from_cli(&cli)?;

    let matcher = PatternMatcher::new(pattern)?;
    let options = ScrapeOptions {
        extract_before: cli.extract_before,
        extract_after: cli.extract_after,
        email_mode: cli.email_mode,
    };

    tracing::info!("Starting scrape of {}", cli.url);
    if cli.email_mode {
        tracing::info!("Email detection mode enabled");
    } else {
        tracing::info!("Pattern: {}", matcher.as_str());
    }
    tracing::info!(
        "Max pages: {}, max depth: {}",
        config.max_pages,
        config.max_depth
    );

    let mut scraper = Scraper::new(config)?;
    let results = scraper.scrape(&cli.url, &matcher, &options).await?;

    if results.is_empty() {
        tracing::info!("No matches found");
    } else {
        tracing::info!("Found {} matches", results.len());
        write_results(&results, cli.output.as_deref())?;
        if let Some(path) = &cli.output {
            tracing::info!("Results saved to {}", path.display());
        }
    }

    Ok(())
}

/// Builds the scraper configuration: config file values (when given)
/// overridden by explicit CLI flags
fn build_config(cli: &Cli) -> anyhow::Result<ScraperConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => ScraperConfig::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.max_pages = max_pages;
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(delay) = cli.delay {
        config.delay_secs = delay;
    }
    if cli.follow_sitemap {
        config.follow_sitemap = true;
    }
    if cli.no_sitemap {
        config.follow_sitemap = false;
    }
    if let Some(extensions) = &cli.exclude_extensions {
        config.exclude_extensions = extensions.iter().map(|e| e.to_lowercase()).collect();
    }

    Ok(config)
}

/// Resolves the pattern discriminator from the CLI. Clap guarantees exactly
/// one of the group is present; fail with a configuration error otherwise.
fn pattern_from_cli(cli: &Cli) -> anyhow::Result<Pattern> {
    if cli.email_mode {
        Ok(Pattern::Email)
    } else if let Some(source) = &cli.custom_pattern {
        Ok(Pattern::Custom(source.clone()))
    } else if let Some(literal) = &cli.pattern {
        Ok(Pattern::Literal(literal.clone()))
    } else {
        anyhow::bail!("one of --pattern, --custom-pattern or --email-mode is required")
    }
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("webchecker=info,warn"),
            1 => EnvFilter::new("webchecker=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

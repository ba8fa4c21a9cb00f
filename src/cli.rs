// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Normally link-sweeper is started with no arguments at all and asks for the
// website on stdin. Every flag below is optional, and leaving them all out
// gives the default behavior: 10 concurrent fetches, 30 second timeout,
// report in ./404_errors.txt.
//
// Rust concepts:
// - Derive macros: clap generates the parsing code from the struct
// - Option<T>: the URL may or may not be given on the command line
// =============================================================================

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::checker::FetchSettings;
use crate::crawl::CrawlConfig;
use crate::report::REPORT_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "link-sweeper",
    version,
    about = "Crawls a website and reports every link that returns 404",
    long_about = "link-sweeper follows every link within one website, checks each linked URL, \
                  and writes the ones that answer 404 (with the page linking to them) to a report file."
)]
pub struct Cli {
    /// Website to check (e.g., example.com or https://example.com/docs/)
    ///
    /// When left out, you are prompted for it.
    pub url: Option<String>,

    /// Maximum number of pages fetched at the same time (0 = no limit)
    #[arg(long, default_value_t = CrawlConfig::DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Maximum number of crawl workers alive at once (defaults to --concurrency)
    #[arg(long)]
    pub dispatch_limit: Option<usize>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Where to write the list of broken links
    #[arg(long, default_value = REPORT_FILE)]
    pub output: PathBuf,

    /// Also print the broken links as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        // --concurrency 0 lifts the fetch limit; an explicit
        // --dispatch-limit still applies on top of it
        let base = if self.concurrency == 0 {
            CrawlConfig::unbounded()
        } else {
            CrawlConfig::with_concurrency(self.concurrency)
        };

        CrawlConfig {
            dispatch_limit: self.dispatch_limit.unwrap_or(base.dispatch_limit),
            ..base
        }
    }

    // How the concurrency setting is shown to the user
    pub fn concurrency_label(&self) -> String {
        let fetches = match self.concurrency {
            0 => "unbounded".to_string(),
            n => n.to_string(),
        };
        match self.dispatch_limit {
            Some(limit) => format!("{} (workers: {})", fetches, limit),
            None => fetches,
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            timeout: Duration::from_secs(self.timeout),
            ..FetchSettings::default()
        }
    }
}

// Asks for the website on stdin and returns the raw answer
pub fn prompt_for_site() -> Result<String> {
    print!("Enter the website to check (e.g., example.com): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line)
}

// Turns what the user typed into the crawl's root URL
//
// "example.com"              -> https://example.com/
// "http://example.com"       -> http://example.com/
// "HTTPS://Example.com/docs" -> https://example.com/docs
// "localhost:8080"           -> https://localhost:8080/
pub fn parse_site(input: &str) -> Result<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("No website entered"));
    }

    // Url::parse lowercases the scheme, so "HTTP://" is recognized too.
    // "localhost:8080" parses with the scheme "localhost", which is why only
    // a "://" marks the input as carrying a (non-web) scheme of its own.
    let url = match Url::parse(input) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url,
        Ok(url) if input.contains("://") => {
            return Err(anyhow!("Unsupported scheme '{}' in '{}'", url.scheme(), input));
        }
        _ => Url::parse(&format!("https://{}", input))
            .map_err(|e| anyhow!("Invalid website '{}': {}", input, e))?,
    };
    if url.host_str().is_none() {
        return Err(anyhow!("Invalid website '{}': no host", input));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_https() {
        let url = parse_site("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_scheme_is_kept() {
        assert_eq!(parse_site("http://example.com").unwrap().as_str(), "http://example.com/");
        assert_eq!(
            parse_site("https://example.com/docs/").unwrap().as_str(),
            "https://example.com/docs/"
        );
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(
            parse_site("HTTPS://Example.com/docs").unwrap().as_str(),
            "https://example.com/docs"
        );
        assert_eq!(parse_site("Http://example.com").unwrap().as_str(), "http://example.com/");
    }

    #[test]
    fn test_bare_host_with_port() {
        assert_eq!(parse_site("localhost:8080").unwrap().as_str(), "https://localhost:8080/");
    }

    #[test]
    fn test_other_schemes_are_rejected() {
        assert!(parse_site("ftp://example.com").is_err());
    }

    #[test]
    fn test_input_is_trimmed() {
        let url = parse_site("  example.com/blog \n").unwrap();
        assert_eq!(url.as_str(), "https://example.com/blog");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(parse_site("").is_err());
        assert!(parse_site("   \n").is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_site("exa mple.com").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["link-sweeper"]);
        assert_eq!(cli.url, None);
        assert_eq!(cli.crawl_config(), CrawlConfig::default());
        assert_eq!(cli.fetch_settings().timeout, Duration::from_secs(30));
        assert_eq!(cli.output, PathBuf::from("404_errors.txt"));
        assert!(!cli.json);
        assert_eq!(cli.concurrency_label(), "10");
    }

    #[test]
    fn test_zero_concurrency_means_unbounded() {
        let cli = Cli::parse_from(["link-sweeper", "--concurrency", "0"]);
        assert_eq!(cli.crawl_config(), CrawlConfig::unbounded());
        assert_eq!(cli.concurrency_label(), "unbounded");
    }

    #[test]
    fn test_zero_concurrency_keeps_dispatch_limit() {
        let cli = Cli::parse_from(["link-sweeper", "--concurrency", "0", "--dispatch-limit", "5"]);
        let config = cli.crawl_config();
        assert_eq!(config.dispatch_limit, 5);
        assert_eq!(config.fetch_permits, CrawlConfig::unbounded().fetch_permits);
        assert_eq!(cli.concurrency_label(), "unbounded (workers: 5)");
    }

    #[test]
    fn test_dispatch_limit_overrides_concurrency() {
        let cli = Cli::parse_from(["link-sweeper", "example.com", "--concurrency", "4", "--dispatch-limit", "16"]);
        assert_eq!(cli.url.as_deref(), Some("example.com"));
        assert_eq!(
            cli.crawl_config(),
            CrawlConfig {
                dispatch_limit: 16,
                fetch_permits: 4,
            }
        );
    }
}

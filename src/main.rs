// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, filtered by RUST_LOG)
// 2. Get the website to check (command line, or a prompt on stdin)
// 3. Crawl it, collecting every link that answers 404
// 4. Write the report file (even if the crawl was interrupted with Ctrl-C)
// 5. Print a summary
//
// Rust concepts used:
// - async/await: Because we make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - tokio::select!: Wait for whichever of two futures finishes first
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - HTTP fetching and HTML link extraction
mod cli; // src/cli.rs - command-line parsing and the site prompt
mod crawl; // src/crawl/ - the crawl engine
mod report; // src/report.rs - report file and terminal output

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use checker::HttpFetcher;
use cli::Cli;
use crawl::{BaseScope, CrawlSession};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        // Only writing the report (or building the HTTP client) can get here;
        // per-page failures are handled inside the crawl
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// Logs go to stderr so they never mix with the progress lines on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("link_sweeper=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let input = match &cli.url {
        Some(url) => url.clone(),
        None => cli::prompt_for_site()?,
    };

    // Bad input is not an error for the process: tell the user and stop
    let root = match cli::parse_site(&input) {
        Ok(root) => root,
        Err(e) => {
            println!("⚠️  {}", e);
            return Ok(());
        }
    };

    let fetcher = HttpFetcher::new(&cli.fetch_settings())?;
    let session = Arc::new(CrawlSession::new(
        BaseScope::new(root.clone()),
        Arc::new(fetcher),
        cli.crawl_config(),
    ));

    println!("🔍 Crawling: {}", session.scope().root());
    println!("📊 Concurrency: {}\n", cli.concurrency_label());

    // Ctrl-C stops the crawl early; whatever was found so far is still written
    let summary = tokio::select! {
        summary = Arc::clone(&session).run(root.as_str()) => Some(summary),
        _ = tokio::signal::ctrl_c() => {
            println!(
                "\n🛑 Interrupted after {} URL(s), writing partial report",
                session.pages_claimed().await
            );
            None
        }
    };

    let findings = session.drain_findings().await;
    report::write_report(&cli.output, &findings).await?;

    if cli.json {
        report::print_json(&findings)?;
    }

    match summary {
        Some(summary) => report::print_summary(&summary, &findings, &cli.output),
        None => println!(
            "❌ {} broken link(s) so far, written to {}",
            findings.len(),
            cli.output.display()
        ),
    }

    Ok(())
}

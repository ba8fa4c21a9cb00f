// src/crawl/worker.rs
// =============================================================================
// The unit of crawl work: process one (url, referrer) target.
//
// How it works:
// 1. Claim the URL (another worker may already own it)
// 2. Take a fetch permit, fetch the page, classify the status
// 3. 404 -> record a finding and stop
//    other failure -> stop quietly
// 4. Follow links only if the final URL (after redirects) is in scope
// 5. Read the body, give the permit back, extract and normalize links
// 6. Push every accepted link onto the frontier
//
// Any error in steps 2-6 is logged and swallowed here: one bad URL never
// takes the crawl down with it.
// =============================================================================

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::findings::Finding;
use super::frontier::CrawlTarget;
use super::session::CrawlSession;
use crate::checker::{classify, extract_hrefs, ResponseClass};

// What happened to one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Another worker claimed the URL first
    AlreadyClaimed,
    /// The URL answered 404 and was recorded
    NotFound,
    /// Non-success status other than 404, dropped without a finding
    Skipped(StatusCode),
    /// Fetched fine, but the final URL is outside the crawl scope
    OutOfScope,
    /// Fetched and parsed; this many links were queued
    Crawled { links_queued: usize },
    /// Fetch or body read failed (already logged)
    Failed,
}

// Processes one target; never returns an error
pub async fn process(session: &CrawlSession, target: CrawlTarget) -> Outcome {
    if !session.visited.claim(&target.url).await {
        return Outcome::AlreadyClaimed;
    }

    match check_page(session, &target).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(url = %target.url, referrer = %target.referrer, "Failed to check page: {:#}", e);
            Outcome::Failed
        }
    }
}

async fn check_page(session: &CrawlSession, target: &CrawlTarget) -> Result<Outcome> {
    // The permit is released when `permit` is dropped, which covers every
    // early return and every `?` below
    let permit = session
        .fetch_permits
        .acquire()
        .await
        .context("fetch permit pool was closed")?;

    println!("  Checking: {}", target.url);
    let page = session.fetcher.fetch(&target.url).await?;

    let status = page.status();
    match classify(status) {
        ResponseClass::NotFound => {
            println!("  ❌ 404: {} (linked from {})", target.url, target.referrer);
            session
                .findings
                .record(Finding {
                    url: target.url.clone(),
                    referrer: target.referrer.clone(),
                })
                .await;
            return Ok(Outcome::NotFound);
        }
        ResponseClass::Skip => {
            debug!(url = %target.url, status = status.as_u16(), "Skipping non-success response");
            return Ok(Outcome::Skipped(status));
        }
        ResponseClass::Success => {}
    }

    let final_url = match page.final_url() {
        Some(url) if session.scope.contains(url) => url.to_string(),
        other => {
            debug!(url = %target.url, final_url = ?other, "Not following links outside the crawl scope");
            return Ok(Outcome::OutOfScope);
        }
    };

    let body = page
        .text()
        .await
        .with_context(|| format!("could not read body of {}", final_url))?;

    // Parsing is CPU work, not network work
    drop(permit);

    let mut links_queued = 0;
    for href in extract_hrefs(&body) {
        if let Some(url) = session.scope.normalize(&final_url, &href) {
            session.frontier.push(CrawlTarget::new(url, final_url.as_str())).await;
            links_queued += 1;
        }
    }

    debug!(url = %final_url, links_queued, "Page crawled");
    Ok(Outcome::Crawled { links_queued })
}

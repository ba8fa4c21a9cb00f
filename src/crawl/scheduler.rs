// src/crawl/scheduler.rs
// =============================================================================
// Drives a crawl from the seed URL to completion.
//
// How it works:
// 1. Put the seed on the frontier
// 2. While there is room (fewer than dispatch_limit workers alive), pop
//    targets and spawn a worker for each
// 3. When no more can be dispatched, wait for ONE worker to finish
// 4. Go back to 2
//
// When is the crawl done?
// - "Frontier is empty" alone is NOT enough: a worker still in flight may be
//   about to push twenty new links
// - Done means: frontier empty AND zero workers in flight, and we check that
//   again after every single worker finishes
//
// Rust concepts:
// - tokio::spawn: runs each worker as its own task (truly parallel)
// - FuturesUnordered: a set of futures that yields them as they complete
// - Arc: shared ownership of the session across tasks
// =============================================================================

use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::frontier::CrawlTarget;
use super::session::CrawlSession;
use super::worker::{self, Outcome};

// Totals for one finished crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Pages fetched and parsed
    pub pages_crawled: usize,
    /// Links pushed onto the frontier
    pub links_queued: usize,
    /// URLs that answered 404
    pub not_found: usize,
    /// Non-success responses other than 404
    pub skipped: usize,
    /// Fetched pages whose links were not followed (final URL out of scope)
    pub out_of_scope: usize,
    /// Fetch errors and crashed workers
    pub faults: usize,
    /// Frontier entries dropped because their URL was already claimed
    pub duplicates: usize,
}

impl CrawlSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::AlreadyClaimed => self.duplicates += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::OutOfScope => self.out_of_scope += 1,
            Outcome::Crawled { links_queued } => {
                self.pages_crawled += 1;
                self.links_queued += links_queued;
            }
            Outcome::Failed => self.faults += 1,
        }
    }

    // Every URL that got as far as a fetch attempt
    pub fn urls_checked(&self) -> usize {
        self.pages_crawled + self.not_found + self.skipped + self.out_of_scope + self.faults
    }
}

impl CrawlSession {
    // Crawls everything reachable from `seed` and returns the totals
    //
    // The seed goes through the same claim as every other link; it is its
    // own referrer.
    pub async fn run(self: Arc<Self>, seed: &str) -> CrawlSummary {
        self.frontier.push(CrawlTarget::new(seed, seed)).await;

        let mut in_flight: FuturesUnordered<JoinHandle<Outcome>> = FuturesUnordered::new();
        let mut summary = CrawlSummary::default();

        loop {
            // Fill every free dispatch slot
            while in_flight.len() < self.dispatch_limit {
                let Some(target) = self.frontier.pop().await else {
                    break;
                };

                // Cheap pre-filter; the worker's claim() is the real check
                if self.visited.contains(&target.url).await {
                    summary.duplicates += 1;
                    continue;
                }

                let session = Arc::clone(&self);
                in_flight.push(tokio::spawn(async move {
                    worker::process(&session, target).await
                }));
            }

            // Nothing in flight here means the loop above emptied the
            // frontier without dispatching anything: the crawl is done
            match in_flight.next().await {
                Some(Ok(outcome)) => summary.record(&outcome),
                Some(Err(e)) => {
                    warn!("Crawl worker crashed: {}", e);
                    summary.faults += 1;
                }
                None => break,
            }

            debug!(
                in_flight = in_flight.len(),
                queued = self.frontier.len().await,
                "Worker finished"
            );
        }

        info!(
            checked = summary.urls_checked(),
            crawled = summary.pages_crawled,
            not_found = summary.not_found,
            faults = summary.faults,
            "Crawl finished"
        );
        summary
    }
}

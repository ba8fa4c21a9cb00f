// src/crawl/session.rs
// =============================================================================
// Everything one crawl shares between its workers.
//
// No global state: a CrawlSession is built per crawl, wrapped in an Arc and
// handed to each worker task. Two sessions in one process never see each
// other's queues or findings.
// =============================================================================

use std::sync::Arc;
use tokio::sync::Semaphore;

use super::findings::{Finding, FindingCollector};
use super::frontier::Frontier;
use super::scope::BaseScope;
use super::visited::VisitedSet;
use crate::checker::Fetcher;

// Concurrency knobs
//
// dispatch_limit: worker tasks alive at once (fetching or parsing)
// fetch_permits: requests on the wire at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlConfig {
    pub dispatch_limit: usize,
    pub fetch_permits: usize,
}

impl CrawlConfig {
    pub const DEFAULT_CONCURRENCY: usize = 10;

    // Both limits set to the same value
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self {
            dispatch_limit: concurrency,
            fetch_permits: concurrency,
        }
    }

    // No practical limit on either knob
    pub fn unbounded() -> Self {
        Self {
            dispatch_limit: usize::MAX,
            fetch_permits: Semaphore::MAX_PERMITS,
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self::with_concurrency(Self::DEFAULT_CONCURRENCY)
    }
}

pub struct CrawlSession {
    pub(crate) scope: BaseScope,
    pub(crate) fetcher: Arc<dyn Fetcher>,
    pub(crate) visited: VisitedSet,
    pub(crate) frontier: Frontier,
    pub(crate) findings: FindingCollector,
    pub(crate) fetch_permits: Semaphore,
    pub(crate) dispatch_limit: usize,
}

impl CrawlSession {
    pub fn new(scope: BaseScope, fetcher: Arc<dyn Fetcher>, config: CrawlConfig) -> Self {
        // a limit of zero would never dispatch anything
        let fetch_permits = config.fetch_permits.clamp(1, Semaphore::MAX_PERMITS);

        Self {
            scope,
            fetcher,
            visited: VisitedSet::new(),
            frontier: Frontier::new(),
            findings: FindingCollector::new(),
            fetch_permits: Semaphore::new(fetch_permits),
            dispatch_limit: config.dispatch_limit.max(1),
        }
    }

    pub fn scope(&self) -> &BaseScope {
        &self.scope
    }

    // Number of URLs claimed so far
    pub async fn pages_claimed(&self) -> usize {
        self.visited.len().await
    }

    // Takes the broken links found so far (also usable after an interrupt)
    pub async fn drain_findings(&self) -> Vec<Finding> {
        self.findings.drain().await
    }
}

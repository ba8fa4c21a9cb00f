// src/crawl/frontier.rs
// =============================================================================
// The queue of discovered-but-not-yet-processed links.
//
// Many workers push, the scheduler pops. Order is first-in first-out, which
// gives a roughly breadth-first crawl, but nothing depends on it.
// =============================================================================

use std::collections::VecDeque;
use tokio::sync::Mutex;

// One discovery event: `url` was found on the page `referrer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    pub url: String,
    pub referrer: String,
}

impl CrawlTarget {
    pub fn new(url: impl Into<String>, referrer: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            referrer: referrer.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    queue: Mutex<VecDeque<CrawlTarget>>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, target: CrawlTarget) {
        self.queue.lock().await.push_back(target);
    }

    pub async fn pop(&self) -> Option<CrawlTarget> {
        self.queue.lock().await.pop_front()
    }

    pub async fn len(&self) -> usize {
        self.queue.lock().await.len()
    }
}

// src/crawl/visited.rs
// =============================================================================
// The set of URLs that have already been claimed by a worker.
//
// claim() is the single check-and-mark point of the whole crawler: the test
// and the insert happen under one lock, so exactly one caller wins a URL no
// matter how many pages link to it at the same time.
//
// Rust concepts:
// - tokio::sync::Mutex: a lock that can be awaited without blocking a thread
// - HashSet::insert returns false when the value was already there
// =============================================================================

use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns true for the first caller with this URL, false for everyone else
    pub async fn claim(&self, url: &str) -> bool {
        let mut urls = self.urls.lock().await;
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    // Read-only probe; a `false` here can be stale by the time you act on it,
    // so only claim() may decide who processes a URL
    pub async fn contains(&self, url: &str) -> bool {
        self.urls.lock().await.contains(url)
    }

    pub async fn len(&self) -> usize {
        self.urls.lock().await.len()
    }
}

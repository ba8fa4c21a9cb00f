// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Submodules, leaf first:
// - normalize: href -> canonical https URL (or rejected)
// - scope: which pages' links get followed
// - visited: the exactly-once claim on each URL
// - frontier: queue of discovered links
// - findings: broken links collected during the crawl
// - session: the per-crawl state shared by all workers
// - worker: fetch one URL, record or extract
// - scheduler: bounded-concurrency loop that runs the crawl to the end
//
// Rust concepts:
// - Async programming: for concurrent network requests
// - Arc + Mutex: for state shared between tasks
// =============================================================================

mod findings;
mod frontier;
mod normalize;
mod scheduler;
mod scope;
mod session;
mod visited;
mod worker;

#[cfg(test)]
mod testing;

pub use findings::Finding;
pub use scheduler::CrawlSummary;
pub use scope::BaseScope;
pub use session::{CrawlConfig, CrawlSession};

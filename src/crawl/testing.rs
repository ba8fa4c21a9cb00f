// src/crawl/testing.rs
// =============================================================================
// An in-memory website for crawl tests.
//
// FakeSite implements Fetcher, so the crawl engine runs against it exactly
// like it runs against reqwest. URLs that were never registered answer 404.
// Every fetch is counted so tests can check "fetched exactly once", and the
// highest number of fetches running at the same moment is remembered.
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

use super::scope::BaseScope;
use super::session::{CrawlConfig, CrawlSession};
use crate::checker::{Fetcher, Page};

#[derive(Debug, Clone)]
enum Reply {
    Page {
        status: StatusCode,
        final_url: Option<String>,
        body: String,
        body_fails: bool,
    },
    Fault,
}

#[derive(Debug, Clone, Default)]
pub struct FakeSite {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    fetches: Arc<Mutex<HashMap<String, usize>>>,
    active: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    latency: Option<Duration>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    fn with(self, url: &str, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(url.to_string(), reply);
        self
    }

    // 200 page served at its own URL
    pub fn page(self, url: &str, body: &str) -> Self {
        self.with(
            url,
            Reply::Page {
                status: StatusCode::OK,
                final_url: Some(url.to_string()),
                body: body.to_string(),
                body_fails: false,
            },
        )
    }

    // Empty response with the given status
    pub fn status(self, url: &str, status: StatusCode) -> Self {
        self.with(
            url,
            Reply::Page {
                status,
                final_url: Some(url.to_string()),
                body: String::new(),
                body_fails: false,
            },
        )
    }

    // 200 page that ends up at `final_url` after redirects
    pub fn redirect(self, url: &str, final_url: &str, body: &str) -> Self {
        self.with(
            url,
            Reply::Page {
                status: StatusCode::OK,
                final_url: Some(final_url.to_string()),
                body: body.to_string(),
                body_fails: false,
            },
        )
    }

    // 200 page whose final URL is unknown
    pub fn no_final_url(self, url: &str, body: &str) -> Self {
        self.with(
            url,
            Reply::Page {
                status: StatusCode::OK,
                final_url: None,
                body: body.to_string(),
                body_fails: false,
            },
        )
    }

    // The request itself fails (connection refused, timeout, ...)
    pub fn fault(self, url: &str) -> Self {
        self.with(url, Reply::Fault)
    }

    // Headers arrive with 200, reading the body fails
    pub fn body_fault(self, url: &str) -> Self {
        self.with(
            url,
            Reply::Page {
                status: StatusCode::OK,
                final_url: Some(url.to_string()),
                body: String::new(),
                body_fails: true,
            },
        )
    }

    // Every fetch takes this long, so concurrent fetches overlap
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    // Most fetches that were running at the same time
    pub fn peak_concurrent_fetches(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetches.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn fetch_counts(&self) -> HashMap<String, usize> {
        self.fetches.lock().unwrap().clone()
    }
}

struct FakePage {
    status: StatusCode,
    final_url: Option<String>,
    body: String,
    body_fails: bool,
}

#[async_trait]
impl Page for FakePage {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn final_url(&self) -> Option<&str> {
        self.final_url.as_deref()
    }

    async fn text(self: Box<Self>) -> Result<String> {
        if self.body_fails {
            return Err(anyhow!("connection reset while reading body"));
        }
        Ok(self.body)
    }
}

#[async_trait]
impl Fetcher for FakeSite {
    async fn fetch(&self, url: &str) -> Result<Box<dyn Page>> {
        *self.fetches.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;

        let running = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);

        // let other workers interleave, like a real network would
        match self.latency {
            Some(latency) => tokio::time::sleep(latency).await,
            None => tokio::task::yield_now().await,
        }

        self.active.fetch_sub(1, Ordering::SeqCst);

        let reply = self.replies.lock().unwrap().get(url).cloned();
        match reply {
            Some(Reply::Fault) => Err(anyhow!("connection refused: {}", url)),
            Some(Reply::Page {
                status,
                final_url,
                body,
                body_fails,
            }) => Ok(Box::new(FakePage {
                status,
                final_url,
                body,
                body_fails,
            })),
            None => Ok(Box::new(FakePage {
                status: StatusCode::NOT_FOUND,
                final_url: Some(url.to_string()),
                body: String::new(),
                body_fails: false,
            })),
        }
    }
}

// A session with default limits crawling `site` from `root`
pub fn session_for(site: &FakeSite, root: &str) -> CrawlSession {
    session_with(site, root, CrawlConfig::default())
}

pub fn session_with(site: &FakeSite, root: &str, config: CrawlConfig) -> CrawlSession {
    let scope = BaseScope::new(Url::parse(root).unwrap());
    CrawlSession::new(scope, Arc::new(site.clone()), config)
}

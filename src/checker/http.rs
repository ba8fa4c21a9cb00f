// src/checker/http.rs
// =============================================================================
// This module is the crawler's window onto the network.
//
// Key functionality:
// - The Fetcher / Page traits: the narrow contract the crawl engine needs
//   (status code, final URL after redirects, body as text)
// - HttpFetcher: the real implementation built on reqwest
// - classify(): the ONE place that decides what a status code means
//
// Why traits?
// - The crawl engine never talks to reqwest directly
// - Tests plug in an in-memory website instead of the network
//
// Rust concepts:
// - Traits: Shared behavior that different types can implement
// - async-trait: Lets traits have async methods that work with Box<dyn ...>
// - Enums: To represent what a response means for the crawl
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

// User agent sent with every request: "link-sweeper/0.1.0"
pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Maximum number of redirects followed before reqwest gives up
const MAX_REDIRECTS: usize = 10;

// Settings for the HTTP client
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Total time allowed for one request (headers and body)
    pub timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: APP_USER_AGENT.to_string(),
        }
    }
}

// A response whose headers have arrived but whose body has not been read yet
//
// text() takes `self: Box<Self>` because reading the body consumes the
// response; you can only do it once.
#[async_trait]
pub trait Page: Send {
    /// HTTP status of the (final) response
    fn status(&self) -> StatusCode;

    /// URL after all redirects were followed, if known
    fn final_url(&self) -> Option<&str>;

    /// Reads the whole body and decodes it as text
    async fn text(self: Box<Self>) -> Result<String>;
}

// Anything that can turn a URL into a Page
//
// Send + Sync because one fetcher is shared by every crawl worker.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Box<dyn Page>>;
}

// What a response status means for the crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 2xx: read the body and follow its links
    Success,
    /// 404: this is a broken link, record it
    NotFound,
    /// Everything else (403, 500, 503, ...): skipped without a finding
    Skip,
}

// Decides what a status code means for the crawl
//
// Only 404 counts as broken. Other failures (server errors, forbidden,
// gone...) are skipped silently, so a change to that policy happens here.
pub fn classify(status: StatusCode) -> ResponseClass {
    if status == StatusCode::NOT_FOUND {
        ResponseClass::NotFound
    } else if status.is_success() {
        ResponseClass::Success
    } else {
        ResponseClass::Skip
    }
}

// The real HTTP fetcher
//
// Client is cheap to clone (it's an Arc internally) and pools connections,
// so one HttpFetcher is built per crawl and shared by all workers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the reqwest client from our settings
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Box<dyn Page>> {
        // send() resolves as soon as the headers are in; the body stays
        // on the wire until HttpPage::text() is called
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        Ok(Box::new(HttpPage(response)))
    }
}

// Wraps reqwest::Response so its inherent methods don't clash with Page's
struct HttpPage(reqwest::Response);

#[async_trait]
impl Page for HttpPage {
    fn status(&self) -> StatusCode {
        self.0.status()
    }

    fn final_url(&self) -> Option<&str> {
        // reqwest updates url() as it follows redirects
        Some(self.0.url().as_str())
    }

    async fn text(self: Box<Self>) -> Result<String> {
        let HttpPage(response) = *self;
        response.text().await.context("failed to read response body")
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is Box<dyn Page>?
//    - dyn Page = "some type that implements Page", decided at runtime
//    - Box puts it on the heap so it has a known size
//    - The crawler handles real and fake responses the same way
//
// 2. Why #[async_trait]?
//    - Plain traits can't (yet) be used as `dyn` with async methods
//    - The macro rewrites each async fn to return a boxed future
//
// 3. Why does send() not download the page?
//    - reqwest returns as soon as the status line and headers arrive
//    - The body is only pulled when we call .text()
//    - For a 404 we never read the body at all
// -----------------------------------------------------------------------------

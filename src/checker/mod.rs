// src/checker/mod.rs
// =============================================================================
// This module contains the crawler's external collaborators.
//
// Submodules:
// - http: Fetches pages and classifies their status codes
// - html: Extracts href values from HTML pages
//
// The crawl engine (src/crawl/) only sees the traits and functions
// re-exported here, never reqwest or scraper directly.
// =============================================================================

mod html;
mod http;

pub use html::extract_hrefs;
pub use http::{classify, FetchSettings, Fetcher, HttpFetcher, Page, ResponseClass};

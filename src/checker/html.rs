// src/checker/html.rs
// =============================================================================
// This module pulls the raw href values out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never fails on broken markup
//
// Resolving the hrefs into absolute URLs is NOT done here: that is the
// crawler's normalizer's job (src/crawl/normalize.rs).
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href attribute of every <a> element
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: the href values exactly as written in the page, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a>no link</a>"
//   result = ["/docs"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // "a[href]" is a constant, valid selector, so this can't fail
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

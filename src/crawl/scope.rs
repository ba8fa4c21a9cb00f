// src/crawl/scope.rs
// =============================================================================
// The crawl's boundary.
//
// A page's links are only followed when its FINAL url (after redirects)
// starts with the root URL. Pages outside the scope are still fetched (so
// broken external links are found) but their links are not followed.
// =============================================================================

use url::Url;

use super::normalize::normalize;

#[derive(Debug, Clone)]
pub struct BaseScope {
    root: Url,
}

impl BaseScope {
    pub fn new(root: Url) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// The prefix every followed page has to start with
    pub fn prefix(&self) -> &str {
        self.root.as_str()
    }

    /// Whether the links of a page with this final URL should be followed
    pub fn contains(&self, final_url: &str) -> bool {
        final_url.starts_with(self.prefix())
    }

    /// Normalizes an href found on `page_url` against this crawl's root
    pub fn normalize(&self, page_url: &str, href: &str) -> Option<String> {
        normalize(page_url, href, &self.root)
    }
}

// src/crawl/findings.rs
// =============================================================================
// Broken links found during the crawl.
//
// Workers record() as they go; the finished crawl drains the list once to
// write the report.
// =============================================================================

use serde::Serialize;
use std::fmt;
use tokio::sync::Mutex;

// A link that answered 404, and the page that linked to it
//
// #[derive(Serialize)] lets us print findings as JSON with --json
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub url: String,
    pub referrer: String,
}

// The report line: "<url> (linked from <referrer>)"
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (linked from {})", self.url, self.referrer)
    }
}

#[derive(Debug, Default)]
pub struct FindingCollector {
    findings: Mutex<Vec<Finding>>,
}

impl FindingCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, finding: Finding) {
        self.findings.lock().await.push(finding);
    }

    // Takes every finding out, in the order they were recorded
    pub async fn drain(&self) -> Vec<Finding> {
        std::mem::take(&mut *self.findings.lock().await)
    }
}

// src/report.rs
// =============================================================================
// Writes the broken-link report and prints results to the terminal.
//
// The report file has one line per finding:
//   https://example.com/gone (linked from https://example.com/docs)
// It is written once, at the end, replacing any previous report.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

use crate::crawl::{CrawlSummary, Finding};

// Default report file name
pub const REPORT_FILE: &str = "404_errors.txt";

// Renders findings as newline-terminated report lines
pub fn render_report(findings: &[Finding]) -> String {
    findings.iter().map(|finding| format!("{}\n", finding)).collect()
}

// Writes the report to `path`, overwriting it
pub async fn write_report(path: &Path, findings: &[Finding]) -> Result<()> {
    tokio::fs::write(path, render_report(findings))
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

// Prints findings as a JSON array on stdout
pub fn print_json(findings: &[Finding]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(findings)?;
    println!("{}", json_output);
    Ok(())
}

// Prints the end-of-crawl summary
pub fn print_summary(summary: &CrawlSummary, findings: &[Finding], report_path: &Path) {
    println!();
    println!("📊 Summary:");
    println!("   🔎 URLs checked: {}", summary.urls_checked());
    println!("   📄 Pages crawled: {}", summary.pages_crawled);
    println!("   🔗 Links followed: {} ({} duplicates)", summary.links_queued, summary.duplicates);
    println!("   🌐 Not followed (outside the site): {}", summary.out_of_scope);
    println!("   ⏭️  Skipped (other errors): {}", summary.skipped);
    println!("   ⚠️  Failed to fetch: {}", summary.faults);
    println!("   ❌ Broken (404): {}", findings.len());

    if findings.is_empty() {
        println!("\n✅ No broken links found");
    } else {
        println!("\n📝 Report written to {}", report_path.display());
    }
}

// src/crawl/normalize.rs
// =============================================================================
// Turns an href found on a page into the canonical URL used as the crawl's
// deduplication key, or rejects it.
//
// Every accepted URL comes out as https with the url crate's canonical
// serialization, so "http://x/a", "//x/a" and "/a" all end up as the same
// string and the visited set sees them as one page.
//
// Rules, in order:
// 1. Has a ':' but doesn't start with "http"  -> reject (mailto:, tel:, ...)
// 2. Starts with '#'                          -> reject (same-page anchor)
// 3. Parses as an absolute URL                -> http(s) only, forced to https
// 4. Starts with "//"                         -> "https:" + href
// 5. Starts with '/'                          -> crawl root's host, https
// 6. Anything else                            -> resolved against the page
// =============================================================================

use url::Url;

// Normalizes `href` found on `page_url`
//
// Parameters:
//   page_url: final URL of the page the href was found on
//   href: raw attribute value
//   root: the crawl's root URL (root-relative links use ITS host)
//
// Returns: Some(canonical https URL) or None if the link is rejected
pub fn normalize(page_url: &str, href: &str, root: &Url) -> Option<String> {
    let href = href.trim();

    if href.contains(':') && !href.starts_with("http") {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    if let Ok(absolute) = Url::parse(href) {
        return into_https(absolute);
    }

    if href.starts_with("//") {
        return Url::parse(&format!("https:{}", href)).ok().map(String::from);
    }

    if href.starts_with('/') {
        let mut base = root.clone();
        base.set_scheme("https").ok()?;
        return base.join(href).ok().map(String::from);
    }

    let page = Url::parse(page_url).ok()?;
    into_https(page.join(href).ok()?)
}

// Keeps http/https URLs only and rewrites them to https
fn into_https(mut url: Url) -> Option<String> {
    match url.scheme() {
        "https" => {}
        "http" => url.set_scheme("https").ok()?,
        _ => return None,
    }
    Some(url.into())
}

use url::Url;

/// Normalizes a URL for visited-set and scope decisions
///
/// # Normalization Steps
///
/// 1. Parse the URL
/// 2. Remove the query string (everything after `?`)
/// 3. Remove the fragment (everything after `#`)
///
/// Scheme, host, port and path are kept as the URL parser serializes them.
/// Input is expected to be absolute already; relative links are resolved
/// against the page's final URL during link extraction.
///
/// This never fails. Input that does not parse is cut at the first `?` or
/// `#` and returned otherwise untouched, so the caller's validity check can
/// reject it later.
///
/// # Examples
///
/// ```
/// use sitecopy::url::normalize_url;
///
/// let url = normalize_url("https://example.com/page?utm_source=x#top");
/// assert_eq!(url, "https://example.com/page");
/// ```
pub fn normalize_url(url_str: &str) -> String {
    match Url::parse(url_str) {
        Ok(mut url) => {
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        Err(e) => {
            tracing::trace!("Best-effort normalization of {}: {}", url_str, e);
            strip_suffixes(url_str).to_string()
        }
    }
}

/// Cuts raw text at the first query or fragment delimiter
fn strip_suffixes(raw: &str) -> &str {
    match raw.find(['?', '#']) {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

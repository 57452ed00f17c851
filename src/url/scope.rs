use super::domain::extract_domain;
use url::Url;

/// Returns true if the URL uses a scheme the crawler can fetch
///
/// Only `http` and `https` are accepted. Unparseable input is invalid.
pub fn is_valid(url_str: &str) -> bool {
    Url::parse(url_str)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Checks whether a URL belongs to the site being crawled
///
/// A URL is in scope when its scheme is `http` or `https` and its domain
/// (host plus explicit port) equals `site_domain` exactly. Subdomains are
/// separate sites.
///
/// # Examples
///
/// ```
/// use sitecopy::url::in_scope;
///
/// assert!(in_scope("https://example.com/a.css", "example.com"));
/// assert!(!in_scope("https://cdn.example.com/a.css", "example.com"));
/// assert!(!in_scope("ftp://example.com/a.css", "example.com"));
/// ```
pub fn in_scope(url_str: &str, site_domain: &str) -> bool {
    let Ok(url) = Url::parse(url_str) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    extract_domain(&url).is_some_and(|domain| domain == site_domain)
}

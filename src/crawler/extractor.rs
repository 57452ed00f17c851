//! Link extraction for fetched resources
//!
//! Two variants are selected by media type:
//! - HTML: URL-bearing attributes of `a`, `link`, `img`, `script` and
//!   `source` elements
//! - CSS: every `url(...)` reference in the raw text
//!
//! Anything else yields no links.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

/// Elements and the attributes on them that reference other resources
const LINK_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href"]),
    ("link", &["href"]),
    ("img", &["src", "srcset"]),
    ("script", &["src"]),
    ("source", &["src", "srcset"]),
];

/// Matches `url(...)` with optional single or double quotes around the argument
static CSS_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)url\(\s*['"]?(.*?)['"]?\s*\)"#).expect("CSS url pattern is valid")
});

/// Errors raised while extracting links
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTML parse error for {url}: {message}")]
    Html { url: String, message: String },
}

/// Extracts links from a resource according to its media type
///
/// # Arguments
///
/// * `media_type` - Primary Content-Type value, without parameters
/// * `body` - Raw response body
/// * `base_url` - Final (post-redirect) URL of the resource
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Absolute links, in order of appearance
/// * `Err(ExtractError)` - The document could not be scanned
pub fn extract_links(
    media_type: &str,
    body: &[u8],
    base_url: &Url,
) -> Result<Vec<String>, ExtractError> {
    match media_type {
        "text/html" => extract_html_links(body, base_url),
        "text/css" => Ok(extract_css_links(&String::from_utf8_lossy(body), base_url)),
        _ => Ok(Vec::new()),
    }
}

/// Extracts every referenced URL from an HTML document
///
/// # Link Extraction Rules
///
/// | Element | Attributes |
/// |---------|------------|
/// | `a` | `href` |
/// | `link` | `href` |
/// | `img` | `src`, `srcset` |
/// | `script` | `src` |
/// | `source` | `src`, `srcset` |
///
/// Each `srcset` candidate contributes its URL token separately. Links are
/// resolved against `base_url` and returned in document order. Malformed
/// markup is recovered by the parser, never rejected.
///
/// # Example
///
/// ```
/// use sitecopy::crawler::extract_html_links;
/// use url::Url;
///
/// let html = br#"<img srcset="a.png 1x, b.png 2x">"#;
/// let base = Url::parse("https://example.com/").unwrap();
/// let links = extract_html_links(html, &base).unwrap();
/// assert_eq!(links, vec!["https://example.com/a.png", "https://example.com/b.png"]);
/// ```
pub fn extract_html_links(content: &[u8], base_url: &Url) -> Result<Vec<String>, ExtractError> {
    let html = String::from_utf8_lossy(content);
    let document = Html::parse_document(&html);

    let selector = link_selector().map_err(|message| ExtractError::Html {
        url: base_url.to_string(),
        message,
    })?;

    let mut links = Vec::new();

    for element in document.select(&selector) {
        let element = element.value();
        let Some(attrs) = attributes_for(element.name()) else {
            continue;
        };

        for attr in attrs {
            let Some(value) = element.attr(attr) else {
                continue;
            };

            if *attr == "srcset" {
                for candidate in srcset_urls(value) {
                    push_resolved(&mut links, candidate, base_url);
                }
            } else {
                push_resolved(&mut links, value, base_url);
            }
        }
    }

    Ok(links)
}

/// Extracts every `url(...)` reference from a stylesheet
///
/// This is a plain text scan: `@import "x.css"` without `url()` is not
/// matched, and references inside comments are.
///
/// # Example
///
/// ```
/// use sitecopy::crawler::extract_css_links;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/styles/").unwrap();
/// let links = extract_css_links("body{background:url('/img/bg.png')}", &base);
/// assert_eq!(links, vec!["https://example.com/img/bg.png"]);
/// ```
pub fn extract_css_links(content: &str, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    for captures in CSS_URL_RE.captures_iter(content) {
        if let Some(raw) = captures.get(1) {
            push_resolved(&mut links, raw.as_str(), base_url);
        }
    }

    links
}

/// Builds one selector covering every element/attribute pair
fn link_selector() -> Result<Selector, String> {
    let group = LINK_ATTRIBUTES
        .iter()
        .flat_map(|(tag, attrs)| attrs.iter().map(move |attr| format!("{}[{}]", tag, attr)))
        .collect::<Vec<_>>()
        .join(", ");

    Selector::parse(&group).map_err(|e| e.to_string())
}

fn attributes_for(tag: &str) -> Option<&'static [&'static str]> {
    LINK_ATTRIBUTES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tag))
        .map(|(_, attrs)| *attrs)
}

/// Splits a `srcset` value into the URL token of each candidate
///
/// Candidates are comma separated; the URL is the text before the first
/// whitespace. Blank candidates (e.g. a trailing comma) are skipped.
fn srcset_urls(srcset: &str) -> impl Iterator<Item = &str> {
    srcset
        .split(',')
        .filter_map(|candidate| candidate.split_whitespace().next())
}

/// Resolves a raw link against the base URL and appends it
///
/// Blank values and links that cannot be joined are dropped.
fn push_resolved(links: &mut Vec<String>, raw: &str, base_url: &Url) {
    let raw = raw.trim();
    if raw.is_empty() {
        return;
    }

    match base_url.join(raw) {
        Ok(absolute_url) => links.push(absolute_url.to_string()),
        Err(e) => tracing::trace!("Dropping unresolvable link {:?}: {}", raw, e),
    }
}

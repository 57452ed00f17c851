//! URL handling module for sitecopy
//!
//! This module provides URL normalization, domain extraction and the
//! scope checks that keep the crawl on one site.

mod domain;
mod normalize;
mod scope;

// Re-export main functions
pub use domain::{extract_domain, site_domain};
pub use normalize::normalize_url;
pub use scope::{in_scope, is_valid};

/// Returns true if a discovered link should be added to the frontier
///
/// The link must already be normalized. It qualifies when it has a
/// fetchable scheme and belongs to `site_domain`; the visited check is left
/// to the frontier.
pub fn should_follow(normalized: &str, site_domain: &str) -> bool {
    is_valid(normalized) && in_scope(normalized, site_domain)
}

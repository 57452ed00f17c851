//! Mirrors fetched resources onto the local filesystem
//!
//! A URL's path maps to `output_root/<site_domain>/<segments...>`; empty
//! paths and paths ending in `/` are stored as `index.html`.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Filename used for directory-like URLs
pub const INDEX_FILE: &str = "index.html";

/// A failed write for one resource
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Creates the output root if it does not exist yet
pub fn prepare_output_root(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Derives where a URL is saved, without touching the filesystem
///
/// The result depends only on the three arguments. Unparseable URLs map to
/// the site's root `index.html`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use sitecopy::crawler::resolve_save_path;
///
/// let path = resolve_save_path(Path::new("out"), "example.com", "https://example.com/blog/");
/// assert_eq!(path, Path::new("out/example.com/blog/index.html"));
/// ```
pub fn resolve_save_path(output_root: &Path, site_domain: &str, url: &str) -> PathBuf {
    let mut path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_default();

    if path.is_empty() || path.ends_with('/') {
        path.push_str(INDEX_FILE);
    }

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let (filename, dirs) = match segments.split_last() {
        Some((last, dirs)) if !last.is_empty() => (*last, dirs),
        _ => (INDEX_FILE, &[][..]),
    };

    let mut resolved = output_root.join(site_domain);
    for dir in dirs.iter().filter(|d| !d.is_empty()) {
        resolved.push(dir);
    }
    resolved.push(filename);
    resolved
}

/// Writes a resource body to its mirrored location
///
/// Missing directories are created, and an existing file at the target is
/// overwritten.
///
/// # Arguments
///
/// * `output_root` - Root output directory
/// * `site_domain` - Domain of the crawled site
/// * `final_url` - Post-redirect URL of the resource
/// * `body` - Bytes to write
///
/// # Returns
///
/// * `Ok(PathBuf)` - Where the body was written
/// * `Err(WriteError)` - A directory or the file could not be written
pub fn save_resource(
    output_root: &Path,
    site_domain: &str,
    final_url: &str,
    body: &[u8],
) -> Result<PathBuf, WriteError> {
    let path = resolve_save_path(output_root, site_domain, final_url);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| WriteError {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&path, body).map_err(|source| WriteError {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

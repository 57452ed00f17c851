//! sitecopy: a single-site resource mirror
//!
//! This crate downloads a page and every same-domain resource reachable from
//! it (pages, stylesheets, scripts, images, media sources), mirroring the
//! site's URL paths onto a local directory tree.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sitecopy operations
///
/// Only setup and the initial fetch produce these; failures for individual
/// resources are contained inside the crawl loop.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Initial URL {url} could not be fetched: {source}")]
    InitialFetch {
        url: String,
        source: crawler::FetchError,
    },

    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for sitecopy operations
pub type Result<T> = std::result::Result<T, CopyError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{run_crawl, CrawlEngine};
pub use output::CrawlStats;
pub use state::ResourceState;
pub use crate::url::{in_scope, is_valid, normalize_url, site_domain};

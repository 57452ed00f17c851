//! Crawler module for mirroring a site
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with redirect following
//! - HTML and CSS link extraction
//! - Frontier queue and visited set
//! - Writing resources to the mirror tree
//! - Overall crawl coordination

mod engine;
mod extractor;
mod fetcher;
mod frontier;
mod writer;

pub use engine::{run_crawl, CrawlEngine};
pub use extractor::{extract_css_links, extract_html_links, extract_links, ExtractError};
pub use fetcher::{
    build_http_client, media_type, FetchError, FetchedResource, Fetcher, HttpFetcher,
    MAX_REDIRECTS,
};
pub use frontier::{Frontier, FrontierEntry};
pub use writer::{prepare_output_root, resolve_save_path, save_resource, WriteError, INDEX_FILE};

//! Output module for reporting crawl results
//!
//! The mirrored directory tree is the crawl's real output; this module only
//! covers the run statistics printed at the end.

pub mod stats;

pub use stats::{print_statistics, CrawlStats};

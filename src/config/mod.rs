//! Configuration module for sitecopy
//!
//! A run is described by a [`CrawlConfig`], built from command-line
//! arguments layered over an optional TOML defaults file.
//!
//! # Example
//!
//! ```no_run
//! use sitecopy::config::{load_file_config, validate, CrawlConfig};
//! use std::path::Path;
//!
//! let file = load_file_config(Path::new("sitecopy.toml")).unwrap();
//! let config = CrawlConfig::new("https://example.com/").merge_file(&file);
//! validate(&config).unwrap();
//! println!("Saving to: {}", config.output_root.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CrawlConfig, FileConfig, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_file_config, parse_file_config};
pub use validation::validate;

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default output directory when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "./downloaded";

/// Browser-like identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default whole-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for one crawl run
///
/// Built once by the command-line layer and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// URL the crawl starts from (before redirects)
    pub start_url: String,

    /// Directory that receives the mirrored tree
    pub output_root: PathBuf,

    /// Maximum link depth from the start page; `None` is unlimited
    pub max_depth: Option<u32>,

    /// Per-resource progress reporting
    pub verbose: bool,

    /// Value of the `User-Agent` header
    pub user_agent: String,

    /// Timeout applied to each request
    pub request_timeout: Duration,
}

impl CrawlConfig {
    /// Creates a configuration with default settings for the given start URL
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_depth: None,
            verbose: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    /// Sets the depth limit; negative values mean unlimited
    pub fn with_max_depth(mut self, max_depth: Option<i64>) -> Self {
        self.max_depth = max_depth
            .filter(|depth| *depth >= 0)
            .map(|depth| u32::try_from(depth).unwrap_or(u32::MAX));
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Applies values from a defaults file
    ///
    /// Only fields present in the file are changed; command-line flags are
    /// applied afterwards and win.
    pub fn merge_file(mut self, file: &FileConfig) -> Self {
        if let Some(output) = &file.output {
            self.output_root = output.clone();
        }
        if file.max_depth.is_some() {
            self = self.with_max_depth(file.max_depth);
        }
        if let Some(user_agent) = &file.user_agent {
            self.user_agent = user_agent.clone();
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }
}

/// Optional TOML defaults file
///
/// ```toml
/// output = "./mirror"
/// max-depth = 3
/// user-agent = "Mozilla/5.0"
/// request-timeout-secs = 30
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    /// Output directory for downloaded files
    pub output: Option<PathBuf>,

    /// Maximum recursion depth (negative is unlimited)
    pub max_depth: Option<i64>,

    /// User-Agent header value
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building an HTTP client with the fixed user agent string
//! - Following redirects and reporting the final URL
//! - Turning non-2xx responses into errors
//! - Error classification

use crate::config::CrawlConfig;
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;

/// Maximum number of redirects followed for one request
pub const MAX_REDIRECTS: usize = 10;

/// A successfully fetched resource
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Raw Content-Type header value (empty if absent)
    pub content_type: String,
    /// Response body
    pub body: Vec<u8>,
}

impl FetchedResource {
    /// Returns the primary media type, lowercased, with parameters removed
    ///
    /// `text/html; charset=utf-8` becomes `text/html`.
    pub fn media_type(&self) -> String {
        media_type(&self.content_type)
    }
}

/// Strips parameters from a Content-Type value
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Reasons a fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status_code}")]
    Status { url: String, status_code: u16 },

    #[error("failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    /// Classifies the error for log output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { source, .. } if source.is_timeout() => "timeout",
            Self::Network { source, .. } if source.is_connect() => "connection refused",
            Self::Network { source, .. } if source.is_redirect() => "redirect error",
            Self::Network { .. } => "network error",
            Self::Status { .. } => "http error",
            Self::Body { .. } => "body error",
        }
    }
}

/// Source of resources for the crawl engine
///
/// Implementations must follow redirects and report the post-redirect URL,
/// and must report a non-2xx final status as an error.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedResource, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawl configuration (user agent and timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sitecopy::config::CrawlConfig;
/// use sitecopy::crawler::build_http_client;
///
/// let config = CrawlConfig::new("https://example.com/");
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from the crawl configuration
    pub fn from_config(config: &CrawlConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResource, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: final_url,
                status_code: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response.bytes().await.map_err(|source| FetchError::Body {
            url: final_url.clone(),
            source,
        })?;

        Ok(FetchedResource {
            final_url,
            status_code: status.as_u16(),
            content_type,
            body: body.to_vec(),
        })
    }
}

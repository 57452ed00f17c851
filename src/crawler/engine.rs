//! Crawl engine - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the other pieces together:
//! - Fetching the start URL and fixing the site domain
//! - Managing the frontier queue and visited set
//! - Running fetch, save, extract and enqueue for each resource
//! - Containing per-resource failures so the crawl always drains the queue

use crate::config::{validate, CrawlConfig};
use crate::crawler::extractor::extract_links;
use crate::crawler::fetcher::{FetchedResource, Fetcher, HttpFetcher};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::writer::{prepare_output_root, save_resource};
use crate::output::CrawlStats;
use crate::state::ResourceState;
use crate::url::{normalize_url, should_follow, site_domain};
use crate::CopyError;
use std::time::Instant;
use url::Url;

/// Number of processed entries between progress log lines
const PROGRESS_INTERVAL: u64 = 25;

/// Single-site crawl engine
///
/// Owns the frontier and visited set for one run and processes one entry at
/// a time, start to finish.
pub struct CrawlEngine<F: Fetcher = HttpFetcher> {
    config: CrawlConfig,
    fetcher: F,
    frontier: Frontier,
    site_domain: Option<String>,
    stats: CrawlStats,
}

impl CrawlEngine<HttpFetcher> {
    /// Creates an engine that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlEngine)` - Successfully created engine
    /// * `Err(CopyError)` - Invalid configuration or HTTP client failure
    pub fn new(config: CrawlConfig) -> Result<Self, CopyError> {
        validate(&config)?;
        let fetcher = HttpFetcher::from_config(&config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetcher> CrawlEngine<F> {
    /// Creates an engine around any fetcher implementation
    pub fn with_fetcher(config: CrawlConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            frontier: Frontier::new(),
            site_domain: None,
            stats: CrawlStats::new(),
        }
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Domain being crawled, known once the start URL has been fetched
    pub fn site_domain(&self) -> Option<&str> {
        self.site_domain.as_deref()
    }

    /// Runs the crawl to completion
    ///
    /// This method:
    /// 1. Creates the output root
    /// 2. Fetches the start URL and takes the site domain from its final URL
    /// 3. Processes that response as the depth-0 resource
    /// 4. Drains the frontier, one entry at a time
    ///
    /// Only steps 1 and 2 can fail. Every later failure is logged and
    /// recorded in the returned statistics.
    pub async fn run(&mut self) -> Result<CrawlStats, CopyError> {
        let start_time = Instant::now();
        let start_url = self.config.start_url.clone();
        let output_root = self.config.output_root.clone();

        prepare_output_root(&output_root).map_err(|source| CopyError::OutputRoot {
            path: output_root.clone(),
            source,
        })?;

        tracing::info!("Starting crawl of {}", start_url);
        tracing::info!("Saving files to: {}", output_root.display());

        let seed = self
            .fetcher
            .fetch(&start_url)
            .await
            .map_err(|source| CopyError::InitialFetch {
                url: start_url.clone(),
                source,
            })?;

        let domain = site_domain(&seed.final_url)?;
        if seed.final_url != start_url {
            tracing::info!("Start URL redirected to {}", seed.final_url);
        }
        tracing::info!("Crawling site domain: {}", domain);
        self.site_domain = Some(domain.clone());

        // The seed response is reused, so the start URL is never fetched twice
        self.frontier.mark_visited(&normalize_url(&start_url));
        self.frontier.mark_visited(&normalize_url(&seed.final_url));
        let state = self.process_resource(&domain, seed, 0);
        self.stats.record(state);

        while let Some(entry) = self.frontier.pop() {
            let state = self.visit(&domain, entry).await;
            self.stats.record(state);

            let processed = self.stats.total_processed();
            if processed % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Progress: {} processed, {} saved, {} in frontier",
                    processed,
                    self.stats.saved(),
                    self.frontier.len()
                );
            }
        }

        self.stats.elapsed = start_time.elapsed();
        tracing::info!(
            "Crawl completed: {} saved, {} failed, {} URLs visited in {:?}",
            self.stats.saved(),
            self.stats.errors(),
            self.frontier.visited_count(),
            self.stats.elapsed
        );

        Ok(self.stats.clone())
    }

    /// Processes one frontier entry
    ///
    /// Checks depth and visited status, then fetches the URL. Failures are
    /// logged and reported as the returned state.
    async fn visit(&mut self, site_domain: &str, entry: FrontierEntry) -> ResourceState {
        if let Some(max_depth) = self.config.max_depth {
            if entry.depth > max_depth {
                tracing::debug!("Skipping {} (max depth reached)", entry.url);
                return ResourceState::DepthExceeded;
            }
        }

        if !self.frontier.mark_visited(&entry.url) {
            tracing::trace!("Skipping {} (already visited)", entry.url);
            return ResourceState::AlreadyVisited;
        }

        tracing::debug!("Downloading: {}", entry.url);

        let resource = match self.fetcher.fetch(&entry.url).await {
            Ok(resource) => resource,
            Err(e) => {
                tracing::warn!("Error downloading {} ({}): {}", entry.url, e.kind(), e);
                return ResourceState::FetchFailed;
            }
        };

        self.process_resource(site_domain, resource, entry.depth)
    }

    /// Saves a fetched resource and enqueues the links it references
    fn process_resource(
        &mut self,
        site_domain: &str,
        resource: FetchedResource,
        depth: u32,
    ) -> ResourceState {
        if !should_follow(&resource.final_url, site_domain) {
            tracing::debug!(
                "Skipping {} (redirected outside {})",
                resource.final_url,
                site_domain
            );
            return ResourceState::OutOfScope;
        }

        // A redirect target counts as visited too
        self.frontier.mark_visited(&normalize_url(&resource.final_url));

        let state = match save_resource(
            &self.config.output_root,
            site_domain,
            &resource.final_url,
            &resource.body,
        ) {
            Ok(path) => {
                self.stats.bytes_written += resource.body.len() as u64;
                tracing::debug!(
                    "Saved: {} (HTTP {}, {} bytes)",
                    path.display(),
                    resource.status_code,
                    resource.body.len()
                );
                ResourceState::Saved
            }
            Err(e) => {
                tracing::warn!("Could not save {}: {}", resource.final_url, e);
                ResourceState::WriteFailed
            }
        };

        let links = resource_links(&resource);
        self.enqueue_links(site_domain, &links, depth);

        state
    }

    /// Normalizes discovered links and adds the crawlable ones to the frontier
    fn enqueue_links(&mut self, site_domain: &str, links: &[String], depth: u32) {
        self.stats.links_discovered += links.len() as u64;
        let child_depth = depth.saturating_add(1);

        for link in links {
            let normalized = normalize_url(link);

            if !should_follow(&normalized, site_domain) {
                tracing::trace!("Not following {}", normalized);
                continue;
            }

            if self.frontier.is_visited(&normalized) {
                continue;
            }

            self.frontier
                .push(FrontierEntry::new(normalized, child_depth));
            self.stats.links_enqueued += 1;
        }
    }
}

/// Extracts links from a fetched resource, logging any failure
///
/// A failure yields no links for that resource.
fn resource_links(resource: &FetchedResource) -> Vec<String> {
    let base_url = match Url::parse(&resource.final_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Cannot resolve links for {}: {}", resource.final_url, e);
            return Vec::new();
        }
    };

    let media_type = resource.media_type();
    match extract_links(&media_type, &resource.body, &base_url) {
        Ok(links) => {
            tracing::trace!("Found {} links in {} ({})", links.len(), base_url, media_type);
            links
        }
        Err(e) => {
            tracing::warn!("Link extraction failed: {}", e);
            Vec::new()
        }
    }
}

/// Runs a complete crawl with the HTTP fetcher
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlStats)` - Crawl completed (individual resources may have failed)
/// * `Err(CopyError)` - Setup or the initial fetch failed
///
/// # Example
///
/// ```no_run
/// use sitecopy::config::CrawlConfig;
/// use sitecopy::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrawlConfig::new("https://example.com/").with_max_depth(Some(2));
/// let stats = run_crawl(config).await?;
/// println!("Saved {} resources", stats.saved());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: CrawlConfig) -> Result<CrawlStats, CopyError> {
    let mut engine = CrawlEngine::new(config)?;
    engine.run().await
}

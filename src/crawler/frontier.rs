//! Crawl frontier: the work queue and the visited set
//!
//! Entries are served first-in first-out. The visited set only grows; a URL
//! is marked before it is fetched so it can never be fetched twice in a run.

use std::collections::{HashSet, VecDeque};

/// A URL waiting to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Normalized URL
    pub url: String,

    /// Number of link hops from the start page
    pub depth: u32,
}

impl FrontierEntry {
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// Frontier queue plus visited set, owned by one crawl engine
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched
    queue: VecDeque<FrontierEntry>,

    /// Normalized URLs that have been fetched (or are being fetched)
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the back of the queue
    pub fn push(&mut self, entry: FrontierEntry) {
        tracing::trace!("Enqueued {} at depth {}", entry.url, entry.depth);
        self.queue.push_back(entry);
    }

    /// Takes the next entry to process
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    /// Marks a URL as visited
    ///
    /// Returns `true` if the URL was not visited before. This is the single
    /// check-and-set the engine relies on.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.visited.insert(url.to_string())
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Returns the number of entries waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of URLs marked visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

//! Statistics gathered during a crawl run
//!
//! The engine records one terminal state per dequeued frontier entry, plus
//! byte and link counters, and hands the totals back when the run finishes.

use crate::state::ResourceState;
use std::collections::HashMap;
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    /// Count of frontier entries by terminal state
    pub resources_by_state: HashMap<ResourceState, u64>,

    /// Total body bytes written to disk
    pub bytes_written: u64,

    /// Links returned by the extractors
    pub links_discovered: u64,

    /// Links that passed the filters and entered the frontier
    pub links_enqueued: u64,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl CrawlStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the terminal state reached by one frontier entry
    pub fn record(&mut self, state: ResourceState) {
        debug_assert!(state.is_terminal(), "only terminal states are recorded");
        *self.resources_by_state.entry(state).or_insert(0) += 1;
    }

    pub fn count(&self, state: ResourceState) -> u64 {
        self.resources_by_state.get(&state).copied().unwrap_or(0)
    }

    /// Number of entries taken from the frontier
    pub fn total_processed(&self) -> u64 {
        self.resources_by_state.values().sum()
    }

    /// Number of fetches issued
    pub fn total_fetched(&self) -> u64 {
        self.resources_by_state
            .iter()
            .filter(|(state, _)| state.was_fetched())
            .map(|(_, count)| count)
            .sum()
    }

    pub fn saved(&self) -> u64 {
        self.count(ResourceState::Saved)
    }

    pub fn errors(&self) -> u64 {
        self.resources_by_state
            .iter()
            .filter(|(state, _)| state.is_error())
            .map(|(_, count)| count)
            .sum()
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStats) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Frontier entries processed: {}", stats.total_processed());
    println!("  Fetches issued: {}", stats.total_fetched());
    println!("  Links discovered: {}", stats.links_discovered);
    println!("  Links enqueued: {}", stats.links_enqueued);
    println!("  Bytes written: {}", stats.bytes_written);
    println!("  Elapsed: {:.2?}", stats.elapsed);
    println!();

    println!("Resources by State:");
    let total = stats.total_processed();
    for state in ResourceState::terminal_states() {
        let count = stats.count(state);
        if count == 0 {
            continue;
        }
        let percentage = if total > 0 {
            (count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", state, count, percentage);
    }
    println!();

    let fetched = stats.total_fetched();
    let success_rate = if fetched > 0 {
        (stats.saved() as f64 / fetched as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Success Rate: {:.1}% ({} / {} fetched resources saved)",
        success_rate,
        stats.saved(),
        fetched
    );
}

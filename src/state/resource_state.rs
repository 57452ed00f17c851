/// Resource state definitions for tracking crawl progress
///
/// This module defines every state a frontier URL can reach during a run.
use std::fmt;

/// Represents the current state of a resource in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceState {
    // ===== Active States =====
    /// Resource is waiting in the frontier
    Pending,

    /// Resource is currently being fetched
    Fetching,

    // ===== Terminal Success States =====
    /// Resource was fetched and written to disk
    Saved,

    // ===== Terminal Skip States =====
    /// Resource sits deeper than the configured maximum depth
    DepthExceeded,

    /// Resource was already fetched earlier in this run
    AlreadyVisited,

    /// Resource redirected to a URL outside the site
    OutOfScope,

    // ===== Terminal Error States =====
    /// Network failure or non-2xx response
    FetchFailed,

    /// Resource was fetched but could not be written to disk
    WriteFailed,
}

impl ResourceState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Returns true if this is an active state (resource may still be processed)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Fetching)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Returns true if the resource was discarded without an error
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            Self::DepthExceeded | Self::AlreadyVisited | Self::OutOfScope
        )
    }

    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::WriteFailed)
    }

    /// Returns true if a fetch was issued for the resource
    pub fn was_fetched(&self) -> bool {
        matches!(
            self,
            Self::Saved | Self::WriteFailed | Self::OutOfScope | Self::FetchFailed
        )
    }

    /// Short identifier used in logs and statistics output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Saved => "saved",
            Self::DepthExceeded => "depth_exceeded",
            Self::AlreadyVisited => "already_visited",
            Self::OutOfScope => "out_of_scope",
            Self::FetchFailed => "fetch_failed",
            Self::WriteFailed => "write_failed",
        }
    }

    /// Returns all terminal states, in reporting order
    pub fn terminal_states() -> [Self; 6] {
        [
            Self::Saved,
            Self::WriteFailed,
            Self::FetchFailed,
            Self::OutOfScope,
            Self::DepthExceeded,
            Self::AlreadyVisited,
        ]
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

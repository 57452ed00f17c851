//! State module for tracking crawl progress
//!
//! `ResourceState` tracks each frontier URL from pending through its
//! terminal outcome (saved, skipped or failed).

mod resource_state;

pub use resource_state::ResourceState;

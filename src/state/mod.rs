//! State module for tracking crawl progress
//!
//! A run walks through a fixed sequence of phases, from reading the seed page
//! to producing the aggregated collection.

mod crawl_phase;

pub use crawl_phase::{CrawlPhase, PhaseTracker};

//! Output module for crawl results
//!
//! This module handles:
//! - Writing the aggregated collection to a JSON file
//! - Recording and printing run statistics

mod json;
pub mod stats;

pub use json::{read_results, write_results};
pub use stats::{print_statistics, RunStatistics};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

//! Run statistics
//!
//! Counters collected by the coordinator while a crawl runs, printed once the
//! results have been written.

use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    /// Number of search results pages enumerated
    pub pages_total: usize,

    /// Pages whose fetch failed (contributing no listings)
    pub pages_failed: usize,

    /// Listings discovered across all pages
    pub listings_found: usize,

    /// Listings whose detail page was fetched and extracted
    pub details_parsed: usize,

    /// Listings recorded with an all-absent detail record
    pub details_failed: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunStatistics {
    /// Starts a new set of counters stamped with the current time
    pub fn start() -> Self {
        Self {
            pages_total: 0,
            pages_failed: 0,
            listings_found: 0,
            details_parsed: 0,
            details_failed: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Duration of the run in seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// Share of listings with a parsed detail record, in percent
    pub fn success_rate(&self) -> f64 {
        if self.listings_found == 0 {
            return 0.0;
        }
        self.details_parsed as f64 / self.listings_found as f64 * 100.0
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::start()
    }
}

/// Prints statistics to stdout in a human-readable format
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("Finished: {}", finished.to_rfc3339());
    }
    if let Some(duration) = stats.duration_seconds() {
        println!("Duration: {} seconds", duration);
    }

    println!("\nPages:");
    println!("  Total: {}", stats.pages_total);
    println!("  Failed: {}", stats.pages_failed);

    println!("\nListings:");
    println!("  Found: {}", stats.listings_found);
    println!("  Details parsed: {}", stats.details_parsed);
    println!("  Details failed: {}", stats.details_failed);
    println!("  Success rate: {:.2}%", stats.success_rate());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let mut stats = RunStatistics::start();
        assert_eq!(stats.success_rate(), 0.0);

        stats.listings_found = 4;
        stats.details_parsed = 3;
        stats.details_failed = 1;
        assert!((stats.success_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duration_requires_finish() {
        let mut stats = RunStatistics::start();
        assert_eq!(stats.duration_seconds(), None);

        stats.finish();
        assert!(stats.duration_seconds().unwrap() >= 0);
    }
}

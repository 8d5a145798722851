//! Crawler module for page fetching and crawl orchestration
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`Fetcher`] seam
//! - Page enumeration from the seed page's pagination block
//! - Listing extraction from search results pages
//! - Progress reporting while tasks resolve
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod listings;
mod pagination;
mod progress;

pub use coordinator::{run_crawl, AggregatedItem, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher, HttpFetcher};
pub use listings::{extract_listings, Feature, ListingEntry};
pub use pagination::{build_page_urls, enumerate_pages, total_pages_from_html, LAST_PAGE_LABEL};

use crate::config::Config;
use crate::output::{write_results, RunStatistics};
use crate::CrawlError;
use std::path::Path;

/// Runs a complete crawl operation and saves the results
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Enumerate the search results pages
/// 3. Fetch every page and extract its listings
/// 4. Fetch every listing's detail page and extract its record
/// 5. Write the aggregated collection to the configured results file
///
/// Nothing is written when the run fails.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(RunStatistics)` - Crawl completed and results were saved
/// * `Err(CrawlError)` - Crawl failed
pub async fn crawl(config: Config) -> Result<RunStatistics, CrawlError> {
    let results_path = config.output.results_path.clone();

    let (items, stats) = run_crawl(config).await?;

    write_results(&items, Path::new(&results_path))?;
    tracing::info!("Saved {} car details to {}", items.len(), results_path);

    Ok(stats)
}

//! Crawler coordinator - main crawl orchestration logic
//!
//! A run is two fan-out/fan-in phases driven by one supervising task:
//! 1. One task per search results page: fetch and extract listing entries.
//!    Results are flattened in page order, then in-page order.
//! 2. One task per listing: fetch and extract the detail record. Each task's
//!    result lands in the slot at its listing's index, so the output order is
//!    the discovery order whatever order the tasks finish in.
//!
//! A failure inside one task (fetch failure or a panic during extraction)
//! only affects that task's slot.

use crate::config::Config;
use crate::crawler::fetcher::{FetchResult, Fetcher, HttpFetcher};
use crate::crawler::listings::{extract_listings, ListingEntry};
use crate::crawler::pagination::enumerate_pages;
use crate::crawler::progress::Progress;
use crate::extract::{extract_car_details, DetailRecord};
use crate::output::RunStatistics;
use crate::state::{CrawlPhase, PhaseTracker};
use crate::CrawlError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinHandle;
use url::Url;

/// A listing together with its extracted detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedItem {
    #[serde(flatten)]
    pub listing: ListingEntry,

    pub car_details: DetailRecord,
}

/// Main crawler coordinator structure
pub struct Coordinator<F> {
    config: Arc<Config>,
    fetcher: Arc<F>,
    base_url: Arc<Url>,
    gate: Option<Arc<Semaphore>>,
    phase: PhaseTracker,
    stats: RunStatistics,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator fetching over HTTP with the configured client
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        let fetcher = HttpFetcher::new(&config.http)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F> Coordinator<F>
where
    F: Fetcher + 'static,
{
    /// Creates a coordinator over any [`Fetcher`]
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlError)` - The configured base URL is invalid
    pub fn with_fetcher(config: Config, fetcher: F) -> Result<Self, CrawlError> {
        let base_url = Url::parse(&config.site.base_url)?;

        let gate = match config.crawler.max_concurrent_fetches {
            0 => None,
            limit => Some(Arc::new(Semaphore::new(limit))),
        };

        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            base_url: Arc::new(base_url),
            gate,
            phase: PhaseTracker::new(),
            stats: RunStatistics::start(),
        })
    }

    /// Current phase of the run
    pub fn phase(&self) -> CrawlPhase {
        self.phase.current()
    }

    /// Counters of the last (or current) run
    pub fn statistics(&self) -> &RunStatistics {
        &self.stats
    }

    /// Runs the whole pipeline and returns the aggregated collection
    ///
    /// Only enumeration failures abort the run; every later failure degrades
    /// to an empty page or an all-absent detail record.
    pub async fn run(&mut self) -> Result<Vec<AggregatedItem>, CrawlError> {
        self.phase = PhaseTracker::new();
        self.stats = RunStatistics::start();

        let seed_url = Url::parse(&self.config.site.seed_url)?;
        tracing::info!("Enumerating result pages from {}", seed_url);
        let pages = enumerate_pages(
            self.fetcher.as_ref(),
            &seed_url,
            &self.config.site.page_param,
        )
        .await?;
        self.stats.pages_total = pages.len();

        self.phase.advance(CrawlPhase::FetchingPages)?;
        tracing::info!("Start fetching link lists from {} pages", pages.len());
        let listings = self.collect_listings(pages).await?;
        self.stats.listings_found = listings.len();
        tracing::info!("Total car links found: {}", listings.len());

        self.phase.advance(CrawlPhase::FetchingDetails)?;
        let records = self.collect_details(&listings).await?;

        self.phase.advance(CrawlPhase::Aggregating)?;
        let items: Vec<AggregatedItem> = listings
            .into_iter()
            .zip(records)
            .map(|(listing, car_details)| AggregatedItem {
                listing,
                car_details,
            })
            .collect();

        self.phase.advance(CrawlPhase::Done)?;
        self.stats.finish();
        tracing::info!(
            "Crawl finished: {} items, {} details parsed, {} failed",
            items.len(),
            self.stats.details_parsed,
            self.stats.details_failed
        );

        Ok(items)
    }

    /// Fetches every page concurrently and flattens the listings in page order
    async fn collect_listings(&mut self, pages: Vec<Url>) -> Result<Vec<ListingEntry>, CrawlError> {
        let handles: Vec<(Url, JoinHandle<Option<Vec<ListingEntry>>>)> = pages
            .into_iter()
            .map(|page| {
                let fetcher = Arc::clone(&self.fetcher);
                let gate = self.gate.clone();
                let base_url = Arc::clone(&self.base_url);
                let page_url = page.to_string();

                let handle = tokio::spawn(async move {
                    let body = fetch_gated(fetcher.as_ref(), gate, &page_url)
                        .await
                        .into_body()?;
                    Some(extract_listings(&body, &base_url))
                });
                (page, handle)
            })
            .collect();

        let mut progress = Progress::new("Fetching car links", handles.len());
        let mut per_page = Vec::with_capacity(handles.len());
        for (page, handle) in handles {
            let outcome = handle.await;
            progress.advance();
            match outcome {
                Ok(Some(listings)) => {
                    tracing::debug!("{} listings on {}", listings.len(), page);
                    per_page.push(listings);
                }
                Ok(None) => {
                    self.stats.pages_failed += 1;
                    per_page.push(Vec::new());
                }
                Err(e) => {
                    tracing::warn!("Error extracting listings from {}: {}", page, e);
                    self.stats.pages_failed += 1;
                    per_page.push(Vec::new());
                }
            }
        }

        self.phase.advance(CrawlPhase::ExtractingListings)?;
        Ok(per_page.into_iter().flatten().collect())
    }

    /// Fetches and extracts every listing's detail page concurrently
    ///
    /// Returns exactly one record per listing, at the listing's index.
    async fn collect_details(
        &mut self,
        listings: &[ListingEntry],
    ) -> Result<Vec<DetailRecord>, CrawlError> {
        let handles: Vec<JoinHandle<Option<DetailRecord>>> = listings
            .iter()
            .map(|listing| {
                let fetcher = Arc::clone(&self.fetcher);
                let gate = self.gate.clone();
                let base_url = Arc::clone(&self.base_url);
                let url = listing.url.clone();

                tokio::spawn(async move {
                    match fetch_gated(fetcher.as_ref(), gate, &url).await {
                        FetchResult::Success { body, .. } if body.is_empty() => {
                            tracing::warn!("No HTML content fetched for {}: empty body", url);
                            None
                        }
                        FetchResult::Success { body, .. } => {
                            let record = extract_car_details(&body, &base_url);
                            tracing::debug!("Parsed details for {}", url);
                            Some(record)
                        }
                        failure => {
                            tracing::warn!(
                                "No HTML content fetched for {}: {}",
                                url,
                                failure.failure_reason().unwrap_or_default()
                            );
                            None
                        }
                    }
                })
            })
            .collect();

        self.phase.advance(CrawlPhase::ExtractingDetails)?;

        let mut slots: Vec<DetailRecord> = std::iter::repeat_with(DetailRecord::default)
            .take(listings.len())
            .collect();

        let mut progress = Progress::new("Parsing car details", handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            let outcome = handle.await;
            progress.advance();
            match outcome {
                Ok(Some(record)) => {
                    slots[index] = record;
                    self.stats.details_parsed += 1;
                }
                Ok(None) => {
                    self.stats.details_failed += 1;
                }
                Err(e) => {
                    tracing::warn!("Error parsing {}: {}", listings[index].url, e);
                    self.stats.details_failed += 1;
                }
            }
        }

        Ok(slots)
    }
}

/// Fetches `url`, holding a gate permit for the duration when a gate is set
async fn fetch_gated<F: Fetcher>(
    fetcher: &F,
    gate: Option<Arc<Semaphore>>,
    url: &str,
) -> FetchResult {
    let _permit: Option<OwnedSemaphorePermit> = match gate {
        Some(gate) => gate.acquire_owned().await.ok(),
        None => None,
    };
    fetcher.fetch(url).await
}

/// Runs a complete crawl over HTTP and returns the items with their statistics
///
/// # Example
///
/// ```no_run
/// use mashina_crawler::config::Config;
/// use mashina_crawler::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (items, stats) = run_crawl(Config::default()).await?;
/// println!("{} listings, {} parsed", items.len(), stats.details_parsed);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<(Vec<AggregatedItem>, RunStatistics), CrawlError> {
    let mut coordinator = Coordinator::new(config)?;
    let items = coordinator.run().await?;
    Ok((items, coordinator.statistics().clone()))
}

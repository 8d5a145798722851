/// Crawl phase definitions for tracking run progress
///
/// A run moves through the phases strictly in order; there is no way back.
use std::fmt;

/// Represents the current phase of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CrawlPhase {
    /// Reading the seed page to learn the total page count
    Enumerating,

    /// Fetching every search results page
    FetchingPages,

    /// Pulling listing entries out of the fetched pages
    ExtractingListings,

    /// Fetching every listing's detail page
    FetchingDetails,

    /// Running the field extractors over the detail pages
    ExtractingDetails,

    /// Pairing listings with their detail records
    Aggregating,

    /// The aggregated collection is complete
    Done,
}

impl CrawlPhase {
    /// Returns the phase that follows this one, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Enumerating => Some(Self::FetchingPages),
            Self::FetchingPages => Some(Self::ExtractingListings),
            Self::ExtractingListings => Some(Self::FetchingDetails),
            Self::FetchingDetails => Some(Self::ExtractingDetails),
            Self::ExtractingDetails => Some(Self::Aggregating),
            Self::Aggregating => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns true if moving from this phase to `to` is allowed
    pub fn can_transition_to(&self, to: CrawlPhase) -> bool {
        self.next() == Some(to)
    }

    /// Returns true if this is the terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enumerating => "enumerating",
            Self::FetchingPages => "fetching_pages",
            Self::ExtractingListings => "extracting_listings",
            Self::FetchingDetails => "fetching_details",
            Self::ExtractingDetails => "extracting_details",
            Self::Aggregating => "aggregating",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks the phase of a single run and enforces forward-only transitions
#[derive(Debug, Clone)]
pub struct PhaseTracker {
    current: CrawlPhase,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            current: CrawlPhase::Enumerating,
        }
    }

    pub fn current(&self) -> CrawlPhase {
        self.current
    }

    /// Moves to `to`, failing if it is not the next phase
    pub fn advance(&mut self, to: CrawlPhase) -> Result<(), crate::CrawlError> {
        if !self.current.can_transition_to(to) {
            return Err(crate::CrawlError::InvalidTransition {
                from: self.current,
                to,
            });
        }
        tracing::info!("Crawl phase: {} -> {}", self.current, to);
        self.current = to;
        Ok(())
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

//! Listing extraction from search results pages
//!
//! Each listing card yields its detail page URL, the optional "urgent" label
//! and the set of paid promotion features shown as icons on the card.

use crate::extract::dom::{select_all, select_first, stripped_text};
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use url::Url;

/// Paid promotion attached to a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Vip,
    Premium,
    Color,
    Autoup,
}

impl Feature {
    pub const ALL: [Feature; 4] = [Self::Vip, Self::Premium, Self::Color, Self::Autoup];

    /// Substring identifying the feature in a promotion icon's `src`
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::Premium => "premium",
            Self::Color => "color",
            Self::Autoup => "autoup",
        }
    }

    /// Every feature whose marker occurs in `src` (case-sensitive)
    pub fn detect(src: &str) -> impl Iterator<Item = Feature> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |feature| src.contains(feature.marker()))
    }
}

/// One listing card from a search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Absolute URL of the listing's detail page
    #[serde(rename = "link")]
    pub url: String,

    /// "Срочно" label text, when the card carries one
    #[serde(rename = "status")]
    pub urgent_status: Option<String>,

    pub features: BTreeSet<Feature>,
}

/// Extracts every listing card from a search results page
///
/// Never fails: cards without a detail link are skipped and a page without
/// cards yields an empty list.
pub fn extract_listings(html: &str, base_url: &Url) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    for card in select_all(document.root_element(), "div.list-item.list-label") {
        let Some(href) = select_first(card, "a[href]").and_then(|a| a.value().attr("href")) else {
            continue;
        };

        let url = match base_url.join(href) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Skipping listing with unusable link {:?}: {}", href, e);
                continue;
            }
        };

        let urgent_status = select_first(card, ".urgent-label").map(stripped_text);

        let features = select_all(card, "div.vip-list img[src]")
            .into_iter()
            .filter_map(|img| img.value().attr("src"))
            .flat_map(|src| Feature::detect(src))
            .collect();

        listings.push(ListingEntry {
            url: url.to_string(),
            urgent_status,
            features,
        });
    }

    listings
}

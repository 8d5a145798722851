//! Full-size gallery image links

use crate::extract::dom::select_all;
use scraper::Html;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLinks {
    pub image_links: Vec<String>,
}

pub fn extract_image_links(document: &Html) -> ImageLinks {
    let image_links = select_all(document.root_element(), "div.fotorama-details a[data-full]")
        .into_iter()
        .filter_map(|anchor| anchor.value().attr("data-full"))
        .map(|src| src.trim().to_string())
        .collect();

    ImageLinks { image_links }
}

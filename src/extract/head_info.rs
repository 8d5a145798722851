//! Title, counters and prices from the detail page header

use crate::extract::dom::{attr_of, select_first, text_of};
use scraper::Html;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadInfo {
    pub title: Option<String>,
    pub model_info: Option<String>,
    pub location: Option<String>,
    pub updated: Option<String>,
    pub posted: Option<String>,
    pub views: Option<String>,
    pub favorites: Option<String>,
    pub price_usd: Option<String>,
    pub price_kgs: Option<String>,
    pub price_rub: Option<String>,
    pub price_kzt: Option<String>,
}

pub fn extract_head_info(document: &Html) -> HeadInfo {
    let Some(wrapper) = select_first(document.root_element(), "div.head-wrapper-main") else {
        return HeadInfo::default();
    };

    HeadInfo {
        title: text_of(wrapper, "div.head-left h1"),
        model_info: attr_of(wrapper, "div.head-left input.ad-title-value", "value"),
        location: text_of(wrapper, "div.head-left .location a"),
        updated: text_of(wrapper, "div.head-left .upped-at .arrow-up"),
        posted: text_of(wrapper, "div.head-left .upped-at span:nth-of-type(2)"),
        views: text_of(wrapper, "div.head-left .counters .views"),
        favorites: text_of(wrapper, "div.head-left .counters .heart"),
        price_usd: text_of(
            wrapper,
            "div.head-right .prices-block .main .price-dollar span",
        ),
        price_kgs: text_of(wrapper, "div.head-right .prices-block .main .price-som"),
        price_rub: text_of(
            wrapper,
            "div.head-right .prices-block .addit .price-som:nth-of-type(1)",
        ),
        price_kzt: text_of(
            wrapper,
            "div.head-right .prices-block .addit .price-som:nth-of-type(2)",
        ),
    }
}

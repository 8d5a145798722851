//! Seller name, profile link and phone number

use crate::extract::dom::{select_first, text_of};
use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub user_name: Option<String>,
    pub user_profile_url: Option<String>,
    pub phone_number: Option<String>,
}

/// Reads the contact block; the profile link is resolved against `base_url`
pub fn extract_contact_info(document: &Html, base_url: &Url) -> ContactInfo {
    let Some(block) = select_first(
        document.root_element(),
        "div.personal-info.details-phone-wrap",
    ) else {
        return ContactInfo::default();
    };

    let user_profile_url = select_first(block, "a[href^='/user/']")
        .and_then(|link| link.value().attr("href"))
        .and_then(|href| base_url.join(href).ok())
        .map(|url| url.to_string());

    ContactInfo {
        user_name: text_of(block, "span.i-name"),
        user_profile_url,
        phone_number: text_of(block, "div.number"),
    }
}

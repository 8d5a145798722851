//! Detail page extraction
//!
//! A detail page is read by eleven independent extractors, each responsible
//! for one region of the page:
//! - breadcrumb trail (brand, model, generation)
//! - header (title, counters, prices)
//! - credit offer, contact block, image gallery
//! - specification table, average price, seller comment
//! - configuration options, VIN report, VIN code
//!
//! Each extractor returns a fragment whose fields are all optional. A missing
//! element is an absent value, never an error. The fragments use disjoint
//! keys and are flattened into one [`DetailRecord`], so every record carries
//! the same key set whatever the page contained.

pub mod average_price;
pub mod breadcrumbs;
pub mod configuration;
pub mod contact;
pub mod credit;
pub mod dom;
pub mod head_info;
pub mod history;
pub mod images;
pub mod seller_comment;
pub mod specs;
pub mod vin;

pub use average_price::{extract_average_price, AveragePrice};
pub use breadcrumbs::{extract_breadcrumbs, Breadcrumbs};
pub use configuration::{extract_configuration, ConfigurationOptions, ConfigurationSections};
pub use contact::{extract_contact_info, ContactInfo};
pub use credit::{extract_credit_offer, CreditOffer};
pub use head_info::{extract_head_info, HeadInfo};
pub use history::{
    extract_history, find_source_title, HistoryRecord, HistoryReport, VinReport,
    TITLE_SEARCH_DEPTH,
};
pub use images::{extract_image_links, ImageLinks};
pub use seller_comment::{extract_seller_comment, SellerComment};
pub use specs::{extract_main_specs, MainSpecs, SpecField, SPEC_LABELS};
pub use vin::{extract_vin_code, VinCode};

use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

/// Every key of a serialized [`DetailRecord`], in output order
pub const DETAIL_RECORD_KEYS: [&str; 41] = [
    "brand",
    "model",
    "generation",
    "title",
    "model_info",
    "location",
    "updated",
    "posted",
    "views",
    "favorites",
    "price_usd",
    "price_kgs",
    "price_rub",
    "price_kzt",
    "credit_offer",
    "user_name",
    "user_profile_url",
    "phone_number",
    "image_links",
    "year",
    "mileage",
    "body_type",
    "color",
    "engine",
    "transmission",
    "drive_type",
    "steering_wheel",
    "condition",
    "customs_cleared",
    "exchange",
    "availability",
    "car_location",
    "registration_country",
    "other_info",
    "vin",
    "average_price_desc",
    "average_price_usd",
    "seller_comment",
    "configuration",
    "vin_report",
    "vin_code",
];

/// Normalized record of one vehicle detail page
///
/// `DetailRecord::default()` is the all-absent record used when a detail
/// page could not be fetched or processed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(flatten)]
    pub breadcrumbs: Breadcrumbs,
    #[serde(flatten)]
    pub head: HeadInfo,
    #[serde(flatten)]
    pub credit: CreditOffer,
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(flatten)]
    pub images: ImageLinks,
    #[serde(flatten)]
    pub specs: MainSpecs,
    #[serde(flatten)]
    pub average_price: AveragePrice,
    #[serde(flatten)]
    pub seller_comment: SellerComment,
    #[serde(flatten)]
    pub configuration: ConfigurationOptions,
    #[serde(flatten)]
    pub history: HistoryReport,
    #[serde(flatten)]
    pub vin: VinCode,
}

impl DetailRecord {
    /// Runs every extractor over an already parsed document
    pub fn from_document(document: &Html, base_url: &Url) -> Self {
        Self {
            breadcrumbs: extract_breadcrumbs(document),
            head: extract_head_info(document),
            credit: extract_credit_offer(document),
            contact: extract_contact_info(document, base_url),
            images: extract_image_links(document),
            specs: extract_main_specs(document),
            average_price: extract_average_price(document),
            seller_comment: extract_seller_comment(document),
            configuration: extract_configuration(document),
            history: extract_history(document),
            vin: extract_vin_code(document),
        }
    }

    /// True if no extractor found anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parses a detail page and extracts its record
///
/// Parsing never fails: malformed markup simply yields fewer matches.
///
/// # Example
///
/// ```
/// use mashina_crawler::extract_car_details;
/// use url::Url;
///
/// let base = Url::parse("https://m.mashina.kg").unwrap();
/// let record = extract_car_details("<html><body></body></html>", &base);
/// assert!(record.is_empty());
/// ```
pub fn extract_car_details(html: &str, base_url: &Url) -> DetailRecord {
    let document = Html::parse_document(html);
    DetailRecord::from_document(&document, base_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const DETAIL_PAGE: &str = r#"
        <html><body>
          <ul>
            <li itemtype="https://schema.org/ListItem"><span itemprop="name">Главная</span></li>
            <li itemtype="https://schema.org/ListItem"><span itemprop="name">Toyota</span></li>
            <li itemtype="https://schema.org/ListItem"><span itemprop="name">Camry</span></li>
            <li itemtype="https://schema.org/ListItem"><span itemprop="name">XV70</span></li>
          </ul>
          <div class="head-wrapper-main">
            <div class="head-left"><h1>Toyota Camry 2019</h1></div>
            <div class="head-right"><div class="prices-block"><div class="main">
              <div class="price-dollar"><span>$ 23 500</span></div>
            </div></div></div>
          </div>
          <div class="personal-info details-phone-wrap">
            <span class="i-name">Азамат</span><a href="/user/7">профиль</a>
          </div>
          <div class="fotorama-details"><a data-full="https://img/1.jpg"></a></div>
          <div class="tab-content">
            <div class="field-row clr"><div class="field-label">Год выпуска</div><div class="field-value">2019</div></div>
          </div>
          <div class="configuration">
            <div class="name">Салон</div><div class="value"><p>Кожа</p></div>
          </div>
          <a class="btn-product-modal" data-vincode="JTNB11HK5K3012345"></a>
        </body></html>"#;

    fn base() -> Url {
        Url::parse("https://m.mashina.kg").unwrap()
    }

    fn keys_of(record: &DetailRecord) -> BTreeSet<String> {
        match serde_json::to_value(record).unwrap() {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("record serialized to {other:?}"),
        }
    }

    fn expected_keys() -> BTreeSet<String> {
        DETAIL_RECORD_KEYS.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_key_set_is_fixed_for_empty_page() {
        let record = extract_car_details("<html></html>", &base());
        assert!(record.is_empty());
        assert_eq!(keys_of(&record), expected_keys());
    }

    #[test]
    fn test_key_set_is_fixed_for_populated_page() {
        let record = extract_car_details(DETAIL_PAGE, &base());
        assert_eq!(keys_of(&record), expected_keys());
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&DetailRecord::default()).unwrap();
        let positions: Vec<usize> = DETAIL_RECORD_KEYS
            .iter()
            .map(|key| json.find(&format!("\"{key}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_absent_values_serialize_as_null() {
        let json = serde_json::to_value(DetailRecord::default()).unwrap();
        assert_eq!(json["brand"], serde_json::Value::Null);
        assert_eq!(json["configuration"], serde_json::Value::Null);
        assert_eq!(json["vin_report"], serde_json::Value::Null);
        assert_eq!(json["image_links"], serde_json::json!([]));
    }

    #[test]
    fn test_fragments_are_merged() {
        let record = extract_car_details(DETAIL_PAGE, &base());
        assert_eq!(record.breadcrumbs.brand.as_deref(), Some("Toyota"));
        assert_eq!(record.head.title.as_deref(), Some("Toyota Camry 2019"));
        assert_eq!(record.head.price_usd.as_deref(), Some("$ 23 500"));
        assert_eq!(
            record.contact.user_profile_url.as_deref(),
            Some("https://m.mashina.kg/user/7")
        );
        assert_eq!(record.images.image_links, vec!["https://img/1.jpg"]);
        assert_eq!(record.specs.year.as_deref(), Some("2019"));
        assert_eq!(record.vin.vin_code.as_deref(), Some("JTNB11HK5K3012345"));
        assert!(record.configuration.configuration.is_some());
        assert_eq!(record.history.vin_report, None);
        assert_eq!(record.credit.credit_offer, None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = serde_json::to_string(&extract_car_details(DETAIL_PAGE, &base())).unwrap();
        let second = serde_json::to_string(&extract_car_details(DETAIL_PAGE, &base())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = extract_car_details(DETAIL_PAGE, &base());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: DetailRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}

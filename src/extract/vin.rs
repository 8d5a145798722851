use crate::extract::dom::attr_of;
use scraper::Html;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VinCode {
    pub vin_code: Option<String>,
}

/// Reads the VIN carried by the report modal button; blank values are absent
pub fn extract_vin_code(document: &Html) -> VinCode {
    VinCode {
        vin_code: attr_of(
            document.root_element(),
            "a.btn-product-modal[data-vincode]",
            "data-vincode",
        )
        .filter(|vin| !vin.is_empty()),
    }
}

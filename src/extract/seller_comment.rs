//! Free-form seller comment

use crate::extract::dom::{joined_text, select_first};
use scraper::Html;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerComment {
    pub seller_comment: Option<String>,
}

/// Reads the original comment text, one line per text node
pub fn extract_seller_comment(document: &Html) -> SellerComment {
    SellerComment {
        seller_comment: select_first(document.root_element(), "div.seller-comments span.original")
            .map(|block| joined_text(block, "\n")),
    }
}

//! Credit offer title from the actions panel

use crate::extract::dom::{select_first, text_of};
use scraper::Html;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditOffer {
    pub credit_offer: Option<String>,
}

pub fn extract_credit_offer(document: &Html) -> CreditOffer {
    let credit_offer = select_first(document.root_element(), "div#details-actions-block")
        .and_then(|block| text_of(block, "div.credit-button-top .content .title"));

    CreditOffer { credit_offer }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_title() {
        let html = r#"
            <div id="details-actions-block">
              <div class="credit-button-top"><div class="content">
                <div class="title"> Кредит от 1 200 $/мес </div>
              </div></div>
            </div>"#;
        let offer = extract_credit_offer(&Html::parse_document(html));
        assert_eq!(offer.credit_offer.as_deref(), Some("Кредит от 1 200 $/мес"));
    }

    #[test]
    fn test_title_outside_actions_block_is_ignored() {
        let html = r#"
            <div class="credit-button-top"><div class="content"><div class="title">x</div></div></div>
            <div id="details-actions-block"></div>"#;
        let offer = extract_credit_offer(&Html::parse_document(html));
        assert_eq!(offer.credit_offer, None);
    }
}

//! Market average price statistic

use crate::extract::dom::{joined_text, select_first, text_of};
use scraper::Html;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AveragePrice {
    pub average_price_desc: Option<String>,
    pub average_price_usd: Option<String>,
}

pub fn extract_average_price(document: &Html) -> AveragePrice {
    let Some(block) = select_first(document.root_element(), "div.details-stat") else {
        return AveragePrice::default();
    };

    AveragePrice {
        average_price_desc: select_first(block, "p b").map(|desc| joined_text(desc, " ")),
        average_price_usd: text_of(block, "span.formatted-anal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_price_block() {
        let html = r#"
            <div class="details-stat">
              <p><b>Средняя цена <i>аналогичных</i> автомобилей</b></p>
              <span class="formatted-anal">$ 21 300</span>
            </div>"#;
        let price = extract_average_price(&Html::parse_document(html));
        assert_eq!(
            price.average_price_desc.as_deref(),
            Some("Средняя цена аналогичных автомобилей")
        );
        assert_eq!(price.average_price_usd.as_deref(), Some("$ 21 300"));
    }

    #[test]
    fn test_missing_block() {
        let price = extract_average_price(&Html::parse_document("<p><b>x</b></p>"));
        assert_eq!(price, AveragePrice::default());
    }
}

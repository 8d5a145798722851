//! Brand, model and generation from the schema.org breadcrumb trail

use crate::extract::dom::{select_all, text_of};
use scraper::Html;
use serde::{Deserialize, Serialize};

/// Minimum trail length for the breadcrumb to be trusted
const MIN_BREADCRUMB_ITEMS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumbs {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub generation: Option<String>,
}

/// Reads the last three breadcrumb items as brand, model and generation
///
/// Shorter trails yield an all-absent fragment rather than a partial one.
pub fn extract_breadcrumbs(document: &Html) -> Breadcrumbs {
    let items = select_all(
        document.root_element(),
        r#"li[itemtype="https://schema.org/ListItem"]"#,
    );

    if items.len() < MIN_BREADCRUMB_ITEMS {
        return Breadcrumbs::default();
    }

    let name = |offset: usize| text_of(items[items.len() - offset], r#"span[itemprop="name"]"#);

    Breadcrumbs {
        brand: name(3),
        model: name(2),
        generation: name(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumb(name: &str) -> String {
        format!(
            r#"<li itemtype="https://schema.org/ListItem"><a><span itemprop="name"> {} </span></a></li>"#,
            name
        )
    }

    #[test]
    fn test_reads_last_three_items() {
        let html = format!(
            "<ul>{}{}{}{}</ul>",
            crumb("Главная"),
            crumb("Toyota"),
            crumb("Camry"),
            crumb("XV70")
        );
        let crumbs = extract_breadcrumbs(&Html::parse_document(&html));
        assert_eq!(crumbs.brand.as_deref(), Some("Toyota"));
        assert_eq!(crumbs.model.as_deref(), Some("Camry"));
        assert_eq!(crumbs.generation.as_deref(), Some("XV70"));
    }

    #[test]
    fn test_two_items_yield_all_absent() {
        let html = format!("<ul>{}{}</ul>", crumb("Toyota"), crumb("Camry"));
        let crumbs = extract_breadcrumbs(&Html::parse_document(&html));
        assert_eq!(crumbs, Breadcrumbs::default());
    }

    #[test]
    fn test_item_without_name_span() {
        let html = format!(
            r#"<ul>{}{}<li itemtype="https://schema.org/ListItem">bare</li></ul>"#,
            crumb("Honda"),
            crumb("Fit")
        );
        let crumbs = extract_breadcrumbs(&Html::parse_document(&html));
        assert_eq!(crumbs.brand.as_deref(), Some("Honda"));
        assert_eq!(crumbs.model.as_deref(), Some("Fit"));
        assert_eq!(crumbs.generation, None);
    }
}

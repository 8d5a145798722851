//! Configuration (equipment) sections and their option lists

use crate::extract::dom::{select_all, select_first, stripped_text};
use indexmap::IndexMap;
use scraper::Html;
use serde::{Deserialize, Serialize};

/// Section name to option list, in page order
pub type ConfigurationSections = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationOptions {
    pub configuration: Option<ConfigurationSections>,
}

/// Pairs the Nth `div.name` with the Nth `div.value`
///
/// Unpaired trailing names or values are ignored. A section whose value holds
/// no non-empty option is still recorded with an empty list.
pub fn extract_configuration(document: &Html) -> ConfigurationOptions {
    let Some(block) = select_first(document.root_element(), "div.configuration") else {
        return ConfigurationOptions::default();
    };

    let names = select_all(block, "div.name");
    let values = select_all(block, "div.value");

    let mut sections = ConfigurationSections::new();
    for (name, value) in names.into_iter().zip(values) {
        let options = select_all(value, "p")
            .into_iter()
            .map(stripped_text)
            .filter(|option| !option.is_empty())
            .collect();
        sections.insert(stripped_text(name), options);
    }

    ConfigurationOptions {
        configuration: Some(sections),
    }
}

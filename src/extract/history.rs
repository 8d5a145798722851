//! VIN report: car name/year and history record counts per source
//!
//! Each report source renders a badge such as "Найдено 3 записи". A count is
//! only reported when the source title it belongs to can be found near the
//! badge.

#![allow(clippy::expect_used)]

use crate::extract::dom::{is_div_with_class, select_all, select_first, stripped_text, text_of};
use regex::Regex;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// How many `<div>` ancestors of a badge's link block are searched for a
/// source title. Tunable; the page layout observed so far needs no more.
pub const TITLE_SEARCH_DEPTH: usize = 3;

/// Matches "Найден N запис…", "Найдено N записей", "Найдена N запись", ...
static RECORD_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Найден[ао]?\s+(\d+)\s+запис").expect("RECORD_COUNT regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub source: String,
    pub record_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VinReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_name_and_year_vin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_records: Option<Vec<HistoryRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryReport {
    pub vin_report: Option<VinReport>,
}

/// Extracts the record count from a badge text, if it is a count badge
pub fn parse_record_count(text: &str) -> Option<u32> {
    RECORD_COUNT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|count| count.as_str().parse().ok())
}

/// Finds the source title a count badge belongs to
///
/// The badge must sit inside a `div.link`. The nearest preceding sibling
/// `div.title` of that block wins; otherwise up to `max_depth` enclosing
/// `<div>`s are searched, nearest first, for a descendant `div.title`.
pub fn find_source_title(badge: ElementRef<'_>, max_depth: usize) -> Option<String> {
    let link_block = badge
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| is_div_with_class(ancestor, "link"))?;

    if let Some(title) = link_block
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| is_div_with_class(sibling, "title"))
    {
        return Some(stripped_text(title));
    }

    link_block
        .ancestors()
        .filter_map(ElementRef::wrap)
        .filter(|ancestor| ancestor.value().name() == "div")
        .take(max_depth)
        .find_map(|ancestor| select_first(ancestor, "div.title"))
        .map(stripped_text)
}

pub fn extract_history(document: &Html) -> HistoryReport {
    let root = document.root_element();
    let car_name_and_year_vin = text_of(root, "div.car-name.lw");

    let records: Vec<HistoryRecord> = select_all(root, "span.green")
        .into_iter()
        .filter_map(|badge| {
            let record_count = parse_record_count(&stripped_text(badge))?;
            let source = find_source_title(badge, TITLE_SEARCH_DEPTH)
                .filter(|title| !title.is_empty())?;
            Some(HistoryRecord {
                source,
                record_count,
            })
        })
        .collect();

    let history_records = (!records.is_empty()).then_some(records);

    if car_name_and_year_vin.is_none() && history_records.is_none() {
        return HistoryReport::default();
    }

    HistoryReport {
        vin_report: Some(VinReport {
            car_name_and_year_vin,
            history_records,
        }),
    }
}

//! Page enumeration
//!
//! The seed page's pagination block carries a "Последняя" (last page)
//! control whose `data-page` attribute holds the total page count. Only that
//! control is trusted: intermediate controls may carry unrelated numbers.

use crate::crawler::fetcher::{FetchResult, Fetcher};
use crate::extract::dom::{select_all, stripped_text};
use crate::CrawlError;
use scraper::Html;
use url::{form_urlencoded, Url};

/// Label of the last-page control, lower-cased
pub const LAST_PAGE_LABEL: &str = "последняя";

/// Reads the total page count from a search results page
///
/// Controls are scanned from the end; the first one labeled
/// [`LAST_PAGE_LABEL`] whose `data-page` is an all-digit count that fits a
/// `u32` wins. Counts too large for a `u32` are logged and skipped.
pub fn total_pages_from_html(html: &str) -> Option<u32> {
    let document = Html::parse_document(html);

    select_all(document.root_element(), "ul.pagination a[data-page]")
        .into_iter()
        .rev()
        .filter(|link| stripped_text(*link).to_lowercase() == LAST_PAGE_LABEL)
        .filter_map(|link| link.value().attr("data-page"))
        .filter(|page| !page.is_empty() && page.chars().all(|c| c.is_ascii_digit()))
        .find_map(|page| match page.parse::<u32>() {
            Ok(total) => Some(total),
            Err(e) => {
                tracing::warn!("Ignoring page count {}: {}", page, e);
                None
            }
        })
}

/// Builds the URL of every page `1..=total` from the seed URL
///
/// The `page_param` query pair is replaced in place, or appended when the seed
/// has none. Other query pairs are kept byte for byte, in order.
pub fn build_page_urls(seed: &Url, page_param: &str, total: u32) -> Vec<Url> {
    (1..=total)
        .map(|page| with_page_index(seed, page_param, page))
        .collect()
}

fn with_page_index(seed: &Url, page_param: &str, page: u32) -> Url {
    let mut replaced = false;
    let mut segments: Vec<String> = seed
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let raw_key = segment.split_once('=').map_or(segment, |(key, _)| key);
            let is_page = form_urlencoded::parse(raw_key.as_bytes())
                .next()
                .is_some_and(|(key, _)| key == page_param);

            if is_page {
                replaced = true;
                format!("{}={}", raw_key, page)
            } else {
                segment.to_string()
            }
        })
        .collect();

    if !replaced {
        let key: String = form_urlencoded::byte_serialize(page_param.as_bytes()).collect();
        segments.push(format!("{}={}", key, page));
    }

    let mut url = seed.clone();
    url.set_query(Some(&segments.join("&")));
    url
}

/// Fetches the seed page and produces the ordered list of page URLs
///
/// # Returns
///
/// * `Ok(Vec<Url>)` - One URL per page, page 1 first
/// * `Err(CrawlError::Transport)` - The seed page could not be fetched
/// * `Err(CrawlError::PaginationNotFound)` - No usable last-page control
pub async fn enumerate_pages<F: Fetcher>(
    fetcher: &F,
    seed_url: &Url,
    page_param: &str,
) -> Result<Vec<Url>, CrawlError> {
    let body = match fetcher.fetch(seed_url.as_str()).await {
        FetchResult::Success { body, .. } => body,
        failure => {
            return Err(CrawlError::Transport {
                url: seed_url.to_string(),
                reason: failure.failure_reason().unwrap_or_default(),
            });
        }
    };

    let Some(total) = total_pages_from_html(&body) else {
        tracing::error!("Pagination element with 'Последняя' not found on {}", seed_url);
        return Err(CrawlError::PaginationNotFound {
            url: seed_url.to_string(),
        });
    };

    tracing::info!("Total pages found: {}", total);
    Ok(build_page_urls(seed_url, page_param, total))
}

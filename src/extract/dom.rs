//! Small query helpers over `scraper` documents
//!
//! Every helper degrades to `None` (or an empty list) when a selector does
//! not match, so extractors can chain lookups without branching on errors.

use scraper::{ElementRef, Selector};

/// Returns the first descendant of `scope` matching `css`
pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    let found = scope.select(&selector).next();
    found
}

/// Returns every descendant of `scope` matching `css`, in document order
pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => scope.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Text of an element with every text node trimmed and blank nodes dropped
pub fn stripped_text(element: ElementRef<'_>) -> String {
    joined_text(element, "")
}

/// Like [`stripped_text`], but the remaining nodes are joined with `separator`
pub fn joined_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Stripped text of the first match of `css` under `scope`
pub fn text_of(scope: ElementRef<'_>, css: &str) -> Option<String> {
    select_first(scope, css).map(stripped_text)
}

/// Trimmed value of attribute `name` on the first match of `css` under `scope`
pub fn attr_of(scope: ElementRef<'_>, css: &str, name: &str) -> Option<String> {
    select_first(scope, css)
        .and_then(|element| element.value().attr(name))
        .map(|value| value.trim().to_string())
}

/// True if the element is a `<div>` carrying `class`
pub fn is_div_with_class(element: &ElementRef<'_>, class: &str) -> bool {
    let value = element.value();
    value.name() == "div" && value.classes().any(|c| c == class)
}

//! Version extraction from a download page.

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

/// Find the first version number linked from `html`.
///
/// Walks `<a href>` elements in document order and returns the first
/// `pattern` match found in an anchor's text. Only anchors whose content is
/// a single string are considered; that string may sit under a chain of
/// single-child elements (`<a><b>9.0</b></a>`), but mixed content such as
/// `<a><span>.NET</span> 9.0</a>` is skipped. Anchors without an `href` are
/// skipped too. This leans on the page listing the newest release
/// first, so a layout change on the vendor side can change the answer.
pub fn extract_version(html: &str, pattern: &Regex) -> Option<String> {
    let document = Html::parse_document(html);
    let anchors = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!("Invalid anchor selector: {}", e);
            return None;
        }
    };

    document
        .select(&anchors)
        .find_map(|anchor| first_match(anchor, pattern))
}

fn first_match(anchor: ElementRef<'_>, pattern: &Regex) -> Option<String> {
    let text = sole_string(anchor)?;
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// The element's only text, if it has exactly one child that is either text
/// or an element with a sole string of its own.
fn sole_string<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    let mut children = element.children();
    let child = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match child.value() {
        Node::Text(text) => Some(&**text),
        Node::Element(_) => ElementRef::wrap(child).and_then(sole_string),
        _ => None,
    }
}

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::parser::dom;

/// Class-token substrings that mark an element as carrying the work location.
const LOCATION_CLASS_HINTS: &[&str] = &["location", "loc", "city", "place"];

const MIN_LOCATION_LEN: usize = 2;

/// "Location: Mumbai | ..." or "City - Pune" markers in running text. The
/// separator is optional; the value runs until a "|" or the end of the text.
static LOCATION_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:location|city)\s*[:|-]?\s*([^|\n]+)").unwrap());

/// Location-classed descendant first, then a marker in the container's
/// running text.
pub fn extract(container: ElementRef) -> Option<String> {
    let all = Selector::parse("*").unwrap();
    for el in container.select(&all) {
        if !dom::class_like(el, LOCATION_CLASS_HINTS) {
            continue;
        }
        let text = dom::visible_text(el);
        if text.chars().count() >= MIN_LOCATION_LEN {
            return Some(text);
        }
    }

    let text = dom::visible_text(container);
    LOCATION_MARKER_RE
        .captures(&text)
        .map(|caps| caps[1].trim().to_string())
}

// ── Tests ──

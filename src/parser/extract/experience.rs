use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::parser::dom;

/// Class-token substrings for the second stage.
const EXPERIENCE_CLASS_HINTS: &[&str] = &["exp", "experience"];

/// Numeric range after an "Exp"/"Experience" marker: "3-5 years",
/// "2+ years", "10 years".
static EXPERIENCE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:exp|experience)\s*[:|-]?\s*([0-9]+\+?\s*-?\s*[0-9]*\s*years?)").unwrap()
});

/// Marker plus numeric range in the running text first, then any
/// experience-classed descendant with text. Text stage before class stage,
/// the reverse of the location cascade.
pub fn extract(container: ElementRef) -> Option<String> {
    let text = dom::visible_text(container);
    if let Some(caps) = EXPERIENCE_MARKER_RE.captures(&text) {
        return Some(caps[1].trim().to_string());
    }

    let all = Selector::parse("*").unwrap();
    for el in container.select(&all) {
        if !dom::class_like(el, EXPERIENCE_CLASS_HINTS) {
            continue;
        }
        let text = dom::visible_text(el);
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

// ── Tests ──

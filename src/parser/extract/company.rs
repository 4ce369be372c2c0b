use scraper::{ElementRef, Selector};

use crate::parser::dom;

/// Class-token substrings that mark an element as naming the employer.
const COMPANY_CLASS_HINTS: &[&str] = &["company", "employer", "org", "firm", "recruiter"];

/// Anything shorter is an icon label or stray glyph, not a name.
const MIN_COMPANY_LEN: usize = 2;

/// First company-classed descendant with usable text, in document order.
/// Class hints are the only stage; there is no text-pattern fallback.
pub fn extract(container: ElementRef) -> Option<String> {
    let all = Selector::parse("*").unwrap();
    for el in container.select(&all) {
        if !dom::class_like(el, COMPANY_CLASS_HINTS) {
            continue;
        }
        let text = dom::visible_text(el);
        if text.chars().count() >= MIN_COMPANY_LEN {
            return Some(text);
        }
    }
    None
}

// ── Tests ──

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use super::dom;

/// Tags that plausibly wrap one listing each, scanned in this order.
const CONTAINER_TAGS: &[&str] = &["article", "li", "div", "section"];

/// Class-token substrings that mark a wrapper as listing-like.
const CONTAINER_CLASS_HINTS: &[&str] = &[
    "job", "listing", "result", "card", "opening", "vacancy", "position",
];

/// Locate candidate job containers: listing-like class plus at least one
/// anchor descendant. Deduplicated by node identity, first-seen order kept.
pub fn find_job_containers(doc: &Html) -> Vec<ElementRef<'_>> {
    let anchor = Selector::parse("a").unwrap();
    let mut seen = HashSet::new();
    let mut containers = Vec::new();

    for tag in CONTAINER_TAGS {
        let sel = Selector::parse(tag).unwrap();
        for node in doc.select(&sel) {
            if !dom::class_like(node, CONTAINER_CLASS_HINTS) {
                continue;
            }
            // Plenty of generic wrappers carry listing-like classes; a real
            // listing always links somewhere.
            if node.select(&anchor).next().is_none() {
                continue;
            }
            if seen.contains(&node.id()) {
                continue;
            }
            seen.insert(node.id());
            containers.push(node);
        }
    }

    containers
}

// ── Tests ──

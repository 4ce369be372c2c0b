use scraper::{Html, Selector};

use crate::exporter::JobRecord;
use crate::parser::dom;
use crate::site;

/// Degraded path for pages where no container matched: sweep every anchor
/// and keep the job-shaped ones as title/link-only rows. Recall over
/// precision.
pub fn scan_anchors(doc: &Html) -> Vec<JobRecord> {
    let with_href = Selector::parse("a[href]").unwrap();
    let mut records = Vec::new();

    for anchor in doc.select(&with_href) {
        let href = anchor.value().attr("href").unwrap_or_default().trim();
        if href.is_empty() || !site::is_fallback_href(href) {
            continue;
        }
        records.push(JobRecord {
            title: dom::visible_text(anchor),
            company: String::new(),
            location: String::new(),
            experience: String::new(),
            link: site::absolutize(href),
        });
    }

    records
}

// ── Tests ──

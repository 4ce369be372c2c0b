pub mod containers;
pub mod dom;
pub mod extract;
pub mod fallback;

use std::collections::HashSet;

use scraper::Html;
use tracing::{info, warn};

use crate::exporter::JobRecord;

/// Full pipeline: parse the page, locate listing containers, pull one
/// record per container (or sweep bare anchors when none match), then drop
/// duplicate rows.
pub fn extract_jobs(html: &str) -> Vec<JobRecord> {
    let doc = Html::parse_document(html);

    let found = containers::find_job_containers(&doc);
    let records: Vec<JobRecord> = if found.is_empty() {
        warn!("no job containers matched, scanning bare anchors");
        fallback::scan_anchors(&doc)
    } else {
        info!(containers = found.len(), "extracting fields per container");
        found
            .into_iter()
            .filter_map(extract::extract_record)
            .collect()
    };

    let extracted = records.len();
    let unique = dedupe(records);
    info!(
        rows = unique.len(),
        dropped = extracted - unique.len(),
        "extraction complete"
    );
    unique
}

/// First occurrence of each case-normalized (title, link) pair wins; later
/// rows with the same identity are dropped even when other fields differ.
fn dedupe(records: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let key = (
            record.title.trim().to_lowercase(),
            record.link.trim().to_lowercase(),
        );
        if seen.contains(&key) {
            continue;
        }
        seen.insert(key);
        unique.push(record);
    }

    unique
}

// ── Tests ──

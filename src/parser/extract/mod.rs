pub mod company;
pub mod experience;
pub mod link;
pub mod location;
pub mod title;

use scraper::ElementRef;

use crate::exporter::JobRecord;
use crate::parser::dom;
use crate::site;

/// Assemble one record from a container. None when no title element exists,
/// or when title text and link both come back empty.
pub fn extract_record(container: ElementRef) -> Option<JobRecord> {
    let title_el = title::choose(container)?;
    let title = dom::visible_text(title_el);
    let link = link::resolve(title_el).unwrap_or_default();
    if title.is_empty() && link.is_empty() {
        return None;
    }

    Some(JobRecord {
        title,
        company: company::extract(container).unwrap_or_default(),
        location: location::extract(container).unwrap_or_default(),
        experience: experience::extract(container).unwrap_or_default(),
        link: site::absolutize(&link),
    })
}

// ── Tests ──

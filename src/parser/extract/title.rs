use scraper::{ElementRef, Selector};

use crate::parser::dom;
use crate::site;

/// Anything shorter reads as a badge or count, not a role title.
const MIN_TITLE_LEN: usize = 5;

/// Pick the title element of a container: job-posting anchors first, then
/// the first heading per level h1-h4, then any anchor with real text.
/// None means the container is not a usable listing.
pub fn choose<'a>(container: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let with_href = Selector::parse("a[href]").unwrap();
    for anchor in container.select(&with_href) {
        let href = anchor.value().attr("href").unwrap_or_default();
        if site::is_job_href(href) && long_enough(anchor) {
            return Some(anchor);
        }
    }

    // A short first heading of one level falls through to the next level,
    // not to the next heading of the same level.
    for level in ["h1", "h2", "h3", "h4"] {
        let sel = Selector::parse(level).unwrap();
        if let Some(heading) = container.select(&sel).next() {
            if long_enough(heading) {
                return Some(heading);
            }
        }
    }

    let any_anchor = Selector::parse("a").unwrap();
    container.select(&any_anchor).find(|a| long_enough(*a))
}

fn long_enough(el: ElementRef) -> bool {
    dom::visible_text(el).chars().count() >= MIN_TITLE_LEN
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn choose_in(html: &str) -> Option<(String, String)> {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse("div.job-card").unwrap();
        let container = doc.select(&sel).next().unwrap();
        choose(container).map(|el| (el.value().name().to_string(), dom::visible_text(el)))
    }

    #[test]
    fn job_anchor_beats_heading() {
        let picked = choose_in(
            r#"<div class="job-card">
                <h2>Some Generic Heading</h2>
                <a href="/j/product-manager-123">Product Manager - FinTech</a>
            </div>"#,
        );
        assert_eq!(
            picked,
            Some(("a".to_string(), "Product Manager - FinTech".to_string()))
        );
    }

    #[test]
    fn short_anchor_text_falls_to_heading() {
        let picked = choose_in(
            r#"<div class="job-card">
                <a href="/j/pm-123">PM</a>
                <h3>Senior Product Manager</h3>
            </div>"#,
        );
        assert_eq!(
            picked,
            Some(("h3".to_string(), "Senior Product Manager".to_string()))
        );
    }

    #[test]
    fn heading_levels_outrank_document_order() {
        let picked = choose_in(
            r#"<div class="job-card">
                <h3>Listed First In Document</h3>
                <h1>Outranks By Level</h1>
            </div>"#,
        );
        assert_eq!(
            picked,
            Some(("h1".to_string(), "Outranks By Level".to_string()))
        );
    }

    #[test]
    fn short_first_heading_skips_its_level() {
        let picked = choose_in(
            r#"<div class="job-card">
                <h2>Hi</h2>
                <h2>Proper Role Title Here</h2>
            </div>"#,
        );
        assert_eq!(picked, None);
    }

    #[test]
    fn plain_anchor_without_href_is_last_resort() {
        let picked = choose_in(
            r#"<div class="job-card">
                <a href="/about">Nav</a>
                <a>General Manager - Operations</a>
            </div>"#,
        );
        assert_eq!(
            picked,
            Some(("a".to_string(), "General Manager - Operations".to_string()))
        );
    }

    #[test]
    fn nothing_usable_yields_none() {
        let picked = choose_in(r#"<div class="job-card"><span>4d</span><a>Go</a></div>"#);
        assert_eq!(picked, None);
    }
}

use scraper::{ElementRef, Selector};

/// Href for a chosen title element: the element itself if it is an anchor,
/// else its first `a[href]` descendant, else the parent's. Returned
/// verbatim; absolutization happens at record assembly.
pub fn resolve(title: ElementRef) -> Option<String> {
    if title.value().name() == "a" {
        if let Some(href) = title.value().attr("href") {
            return Some(href.to_string());
        }
    }

    let with_href = Selector::parse("a[href]").unwrap();
    if let Some(anchor) = title.select(&with_href).next() {
        return anchor.value().attr("href").map(str::to_string);
    }

    title.parent().and_then(ElementRef::wrap).and_then(|parent| {
        parent
            .select(&with_href)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn resolve_for(html: &str, css: &str) -> Option<String> {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse(css).unwrap();
        let title = doc.select(&sel).next().unwrap();
        resolve(title)
    }

    #[test]
    fn anchor_title_uses_own_href() {
        let found = resolve_for(r#"<a href="/j/cfo-delhi-901">CFO - Manufacturing</a>"#, "a");
        assert_eq!(found, Some("/j/cfo-delhi-901".to_string()));
    }

    #[test]
    fn href_returned_verbatim() {
        // No trimming here; the fallback scan is the only path that trims.
        let found = resolve_for(r#"<a href=" /j/9 ">Plant Head - Chemicals</a>"#, "a");
        assert_eq!(found, Some(" /j/9 ".to_string()));
    }

    #[test]
    fn heading_title_uses_descendant_anchor() {
        let found = resolve_for(
            r#"<h2><a href="/j/coo-pune-734">COO - Logistics Startup</a></h2>"#,
            "h2",
        );
        assert_eq!(found, Some("/j/coo-pune-734".to_string()));
    }

    #[test]
    fn bare_heading_falls_back_to_parent_anchor() {
        let found = resolve_for(
            r#"<div>
                <h3>Head of Strategy</h3>
                <a href="/j/head-strategy-512">View details</a>
            </div>"#,
            "h3",
        );
        assert_eq!(found, Some("/j/head-strategy-512".to_string()));
    }

    #[test]
    fn parent_scan_takes_first_anchor_in_document_order() {
        // The parent sweep is position-blind: an anchor before the title
        // element wins over one after it.
        let found = resolve_for(
            r#"<div>
                <a href="/saved">Saved</a>
                <h3>Head of Strategy</h3>
                <a href="/j/head-strategy-512">View details</a>
            </div>"#,
            "h3",
        );
        assert_eq!(found, Some("/saved".to_string()));
    }

    #[test]
    fn hrefless_anchor_title_searches_outward() {
        let found = resolve_for(
            r#"<div>
                <a>Senior Consultant - Risk</a>
                <a href="/j/senior-consultant-risk-220">Details</a>
            </div>"#,
            "a",
        );
        assert_eq!(found, Some("/j/senior-consultant-risk-220".to_string()));
    }

    #[test]
    fn no_anchor_anywhere() {
        let found = resolve_for(r#"<div><h2>Unlinked Role Title</h2></div>"#, "h2");
        assert_eq!(found, None);
    }
}

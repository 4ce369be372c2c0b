//! Everything iimjobs-specific: the origin used for absolutization and the
//! href shapes that mark a link as pointing at a job posting.

pub const SITE_ORIGIN: &str = "https://www.iimjobs.com";
pub const SITE_DOMAIN: &str = "iimjobs.com";

/// Absolutize a possibly-relative href against the site origin.
/// Empty input and already-absolute URLs pass through unchanged.
pub fn absolutize(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if url.starts_with("//") {
        return format!("https:{}", url);
    }
    if url.starts_with('/') {
        return format!("{}{}", SITE_ORIGIN, url);
    }
    format!("{}/{}", SITE_ORIGIN, url.trim_start_matches('/'))
}

/// Href points at a job detail page. Case-insensitive; "/j/" is the short
/// posting path, "/job" covers longer variants on the site's own domain.
pub fn is_job_href(href: &str) -> bool {
    let h = href.to_lowercase();
    h.contains("/j/") || (h.contains(SITE_DOMAIN) && (h.contains("/j/") || h.contains("/job")))
}

/// Looser test used by the bare anchor scan: any on-site link, or a
/// job-shaped path on any host.
pub fn is_fallback_href(href: &str) -> bool {
    let h = href.to_lowercase();
    h.contains(SITE_DOMAIN) || h.starts_with("/j/") || h.contains("/job")
}

// ── Tests ──

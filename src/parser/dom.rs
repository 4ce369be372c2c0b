//! Lenient input decode and the two node primitives every heuristic is
//! built on: normalized visible text and class-token matching.

use std::borrow::Cow;

use scraper::ElementRef;

/// Decode raw bytes leniently. Saved pages arrive in whatever encoding the
/// browser wrote; invalid UTF-8 becomes replacement characters, never an error.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// All visible text under a node, whitespace runs collapsed to single
/// spaces, trimmed. Fragments from nested elements are space-separated.
pub fn visible_text(el: ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when any class token contains one of the hint substrings,
/// case-insensitively. Hints are expected in lowercase.
pub fn class_like(el: ElementRef, hints: &[&str]) -> bool {
    el.value().classes().any(|class| {
        let class = class.to_lowercase();
        hints.iter().any(|hint| class.contains(hint))
    })
}

// ── Tests ──

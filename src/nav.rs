//! Location path helpers
//!
//! Small string utilities over site-relative locations: depth-based
//! relative prefixes and language switching with an existence check.

use crate::catalog::Language;
use std::path::Path;

/// Relative prefix ("../" repeated) from a location's directory depth.
///
/// Depth 0 or 1 (root, or a page directly under it) yields an empty
/// prefix; the result is never negative.
pub fn relative_prefix(location: &str) -> String {
    let clean = location.trim_end_matches('/');
    let depth = clean.split('/').filter(|s| !s.is_empty()).count();

    if depth > 1 {
        "../".repeat(depth - 1)
    } else {
        String::new()
    }
}

/// Rewrite a location for a new language.
///
/// Replaces the first path segment when it is a language tag, otherwise
/// prepends the new tag.
pub fn switch_language_path(location: &str, language: Language) -> String {
    let mut segments: Vec<&str> = location.split('/').filter(|s| !s.is_empty()).collect();

    match segments.first() {
        Some(first) if Language::from_tag(first).is_ok() => {
            segments[0] = language.tag();
        }
        _ => {
            segments.insert(0, language.tag());
        }
    }

    format!("/{}", segments.join("/"))
}

/// Rewrite a location for a new language, falling back to that language's
/// index when the rewritten target does not exist under the site root.
pub fn resolve_language_target(site_root: &Path, location: &str, language: Language) -> String {
    let candidate = switch_language_path(location, language);

    if site_root.join(candidate.trim_start_matches('/')).is_file() {
        candidate
    } else {
        format!("/{}/index.html", language.tag())
    }
}

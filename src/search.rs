//! Search engine
//!
//! Filters the catalog by language and case-insensitive substring match
//! against entry titles. Results keep catalog order; there is no ranking.

use crate::catalog::{Catalog, Entry, Language};

/// Outcome of a search call.
///
/// An empty or whitespace-only query means there is no active search,
/// which is a different answer than a search with zero matches: the
/// caller uses the distinction to decide whether to show the overlay
/// at all.
#[derive(Debug)]
pub enum SearchOutcome<'a> {
    /// Empty query; no search is active
    Inactive,
    /// Active search; the vector may be empty (zero matches)
    Results(Vec<&'a Entry>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchOutcome::Results(_))
    }
}

/// Trim and lowercase a raw query. Returns `None` when nothing remains.
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Run a search over the catalog for the given language.
///
/// Matching is substring (partial-word matches are intended), applied in
/// catalog order. `language` is read once per call.
pub fn search<'a>(catalog: &'a Catalog, language: Language, query: &str) -> SearchOutcome<'a> {
    let query = match normalize_query(query) {
        Some(q) => q,
        None => return SearchOutcome::Inactive,
    };

    let matches: Vec<&Entry> = catalog
        .iter()
        .filter(|entry| entry.language == language)
        .filter(|entry| entry.title.to_lowercase().contains(&query))
        .collect();

    SearchOutcome::Results(matches)
}

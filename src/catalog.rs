//! The searchable catalog
//!
//! A fixed, ordered list of portfolio destinations, pre-partitioned by UI
//! language. The catalog is built once at startup and is read-only for
//! the rest of the session.

use crate::error::{FolioError, Result};
use serde::Serialize;

/// Supported UI languages (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    It,
}

/// All supported languages, in selector order
pub const LANGUAGES: [Language; 3] = [Language::En, Language::Es, Language::It];

impl Language {
    /// Parse a language tag such as "en"
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "it" => Ok(Language::It),
            other => Err(FolioError::UnknownLanguage(other.to_string())),
        }
    }

    /// The language tag used in locations and component filenames
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::It => "it",
        }
    }

    /// Human-readable name, in the language itself
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::It => "Italiano",
        }
    }

    /// Next language in selector order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::It,
            Language::It => Language::En,
        }
    }

    /// Localized "no matches" placeholder shown in the results overlay
    pub fn no_match_message(&self) -> &'static str {
        match self {
            Language::En => "No matches found",
            Language::Es => "No se encontraron coincidencias",
            Language::It => "Nessun risultato trovato",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One searchable destination
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Display title, localized
    pub title: String,
    /// Navigation target; opaque to the search core
    pub location: String,
    /// Language this entry belongs to
    pub language: Language,
}

impl Entry {
    pub fn new(title: &str, location: &str, language: Language) -> Self {
        Self {
            title: title.to_string(),
            location: location.to_string(),
            language,
        }
    }
}

/// The fixed, ordered list of all searchable entries
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Build a catalog from a list of entries (order is preserved)
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The compiled-in portfolio catalog
    pub fn builtin() -> Self {
        use Language::*;

        Self::new(vec![
            Entry::new(
                "Data Analysis - Urban Mobility Ecobici 2024 - R & Tableau",
                "/en/data/data-analysis/projects/ecobici-2024/urban-mobility-analysis.html",
                En,
            ),
            Entry::new(
                "Análisis de Datos - Movilidad Urbana Ecobici 2024 - R y Tableau",
                "/es/data/data-analysis/projects/ecobici-2024/urban-mobility-analysis.html",
                Es,
            ),
            Entry::new(
                "Analisi Dati - Mobilità Urbana Ecobici 2024 - R e Tableau",
                "/it/data/data-analysis/projects/ecobici-2024/urban-mobility-analysis.html",
                It,
            ),
            Entry::new(
                "Web Development - JavaScript CSS HTML",
                "/en/index.html",
                En,
            ),
            Entry::new("Desarrollo Web - JavaScript CSS HTML", "/es/index.html", Es),
            Entry::new("Sviluppo Web - JavaScript CSS HTML", "/it/index.html", It),
            Entry::new(
                "Data Analysis - Projects",
                "/en/data/data-analysis/data-analysis.html",
                En,
            ),
            Entry::new(
                "Análisis de Datos - Proyectos",
                "/es/data/data-analysis/data-analysis.html",
                Es,
            ),
            Entry::new(
                "Analisi Dati - Progetti",
                "/it/data/data-analysis/data-analysis.html",
                It,
            ),
            Entry::new(
                "Web Development - Projects",
                "/en/development/web-development/web-development.html",
                En,
            ),
            Entry::new(
                "Desarrollo Web - Proyectos",
                "/es/development/web-development/web-development.html",
                Es,
            ),
            Entry::new(
                "Sviluppo Web - Progetti",
                "/it/development/web-development/web-development.html",
                It,
            ),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_every_language() {
        let catalog = Catalog::builtin();
        for lang in LANGUAGES {
            assert!(
                catalog.iter().any(|e| e.language == lang),
                "no entries for {}",
                lang
            );
        }
    }

    #[test]
    fn builtin_entries_have_titles_and_locations() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        for entry in catalog.iter() {
            assert!(!entry.title.is_empty());
            assert!(entry.location.starts_with('/'));
        }
    }

    #[test]
    fn language_tag_round_trip() {
        for lang in LANGUAGES {
            assert_eq!(Language::from_tag(lang.tag()).unwrap(), lang);
        }
        assert!(Language::from_tag("de").is_err());
    }

    #[test]
    fn language_selector_cycles_through_all() {
        let mut lang = Language::En;
        for _ in 0..LANGUAGES.len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::En);
    }
}

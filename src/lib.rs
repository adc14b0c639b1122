//! folio - terminal portfolio browser
//!
//! Browses a small multi-language portfolio from the terminal: a
//! navigation bar with dropdown submenus, a header/footer shell loaded
//! from on-disk components, a project showcase slider, and a live search
//! overlay over a compiled-in catalog.
//!
//! # Features
//!
//! - **Live search**: case-insensitive substring filtering of the
//!   catalog for the current language, with literal-safe highlighting
//! - **Language partitioning**: entries are tagged `en`/`es`/`it` and
//!   only the active language is searched
//! - **Page shell**: localized header/footer components loaded in the
//!   background; interactive search attaches once the shell is ready
//! - **Showcase**: auto-advancing project slider with pause/resume
//!
//! # Example
//!
//! ```
//! use folio::{search, Catalog, Language, SearchOutcome};
//!
//! let catalog = Catalog::builtin();
//!
//! match search(&catalog, Language::En, "data") {
//!     SearchOutcome::Results(matches) => {
//!         for entry in matches {
//!             println!("{} -> {}", entry.title, entry.location);
//!         }
//!     }
//!     SearchOutcome::Inactive => println!("nothing to search"),
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod nav;
pub mod search;
pub mod shell;
pub mod slider;
pub mod tui;

// Re-export main types
pub use catalog::{Catalog, Entry, Language, LANGUAGES};
pub use error::{FolioError, Result};
pub use highlight::{highlight, Segment};
pub use search::{search, SearchOutcome};
pub use shell::{load_shell, PageShell, ShellConfig};
pub use slider::{Slide, Slider};

use std::path::PathBuf;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root directory of the site the locations point into
    pub site_root: PathBuf,
    /// Directory holding the header/footer component files
    pub components_dir: PathBuf,
    /// UI language at startup
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            components_dir: PathBuf::from("components"),
            language: Language::En,
        }
    }
}

//! Error types for folio
//!
//! One error enum covering the shell loader, the CLI surface, and the
//! terminal session.

use thiserror::Error;

/// Main error type for folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Failed to read component '{path}': {source}")]
    ComponentRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Components directory '{0}' not found")]
    ComponentsDirMissing(String),

    #[error("Unknown language tag '{0}' (expected one of: en, es, it)")]
    UnknownLanguage(String),

    #[error("Failed to open '{location}': {message}")]
    Navigation { location: String, message: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Catalog export error: {0}")]
    Export(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Check if this error is recoverable (the session can continue)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FolioError::ComponentRead { .. }
                | FolioError::ComponentsDirMissing(_)
                | FolioError::Navigation { .. }
                | FolioError::Clipboard(_)
        )
    }
}

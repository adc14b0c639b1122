//! Logging module for folio
//!
//! Writes a session log next to the executable. Used for the component
//! loader (the one fallible operation), search activity, and navigation
//! side effects.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Global logger instance
static LOGGER: OnceLock<Mutex<FolioLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Main logger struct
pub struct FolioLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl FolioLogger {
    /// Create a new logger
    fn new() -> Self {
        let log_path = Self::get_log_path();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(&log_path)
            .ok();

        Self {
            file,
            min_level: LogLevel::Debug,
        }
    }

    /// Get the log file path (same directory as executable)
    fn get_log_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio.log")
    }

    /// Write a log entry
    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        let entry = format!("[{}] [{:5}] [{}] {}\n", timestamp, level, module, message);

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Initialize the global logger
pub fn init() {
    let _ = LOGGER.set(Mutex::new(FolioLogger::new()));
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            l.log(level, module, message);
        }
    }
}

/// Log debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

// ============================================================================
// Specialized logging functions for different components
// ============================================================================

/// Log the outcome of a shell component load
pub fn log_shell_load(component: &str, path: &str, result: &std::result::Result<usize, String>) {
    match result {
        Ok(bytes) => {
            let msg = format!("Loaded {} from '{}' ({} bytes)", component, path, bytes);
            info("SHELL", &msg);
        }
        Err(e) => {
            let msg = format!("Error loading {} from '{}': {}", component, path, e);
            error("SHELL", &msg);
        }
    }
}

/// Log a search invocation and its result size
pub fn log_search(query: &str, language: &str, matches: usize) {
    let msg = format!(
        "Search: query='{}', lang={}, matches={}",
        query, language, matches
    );
    debug("SEARCH", &msg);
}

/// Log a navigation side effect
pub fn log_navigation(location: &str) {
    let msg = format!("Navigate to '{}'", location);
    info("NAV", &msg);
}

/// Flush the log file
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            if let Some(ref mut file) = l.file {
                let _ = file.flush();
            }
        }
    }
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    let msg = format!("========== {} ==========", label);
    info("---", &msg);
}

//! Page shell loading
//!
//! Loads the localized header and footer components from disk on a
//! background thread. The load is fire-and-forget: exactly one message is
//! delivered, a failure is logged, and there is no retry. Interactive
//! features attach only after the `Loaded` message has been consumed.

use crate::catalog::Language;
use crate::error::{FolioError, Result};
use crate::logging;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// The two shell components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Header,
    Footer,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Header => "header",
            ComponentKind::Footer => "footer",
        }
    }

    /// Component filename for a language
    pub fn filename(&self, language: Language) -> &'static str {
        match (self, language) {
            (ComponentKind::Header, Language::En) => "header.html",
            (ComponentKind::Header, Language::Es) => "header-es.html",
            (ComponentKind::Header, Language::It) => "header-it.html",
            (ComponentKind::Footer, Language::En) => "footer.html",
            (ComponentKind::Footer, Language::Es) => "footer-es.html",
            (ComponentKind::Footer, Language::It) => "footer-it.html",
        }
    }
}

/// Where and in which language to load the shell from
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub components_dir: PathBuf,
    pub language: Language,
}

/// Loaded shell content
#[derive(Debug, Clone)]
pub struct PageShell {
    pub header: String,
    pub footer: String,
}

/// One-shot message from the background loader
pub enum ShellMessage {
    Loaded(PageShell),
    Failed(String),
}

/// Path of a component file for a language
pub fn component_path(dir: &Path, kind: ComponentKind, language: Language) -> PathBuf {
    dir.join(kind.filename(language))
}

/// Read one component file
pub fn load_component(dir: &Path, kind: ComponentKind, language: Language) -> Result<String> {
    let path = component_path(dir, kind, language);
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            logging::log_shell_load(kind.label(), &path.display().to_string(), &Ok(content.len()));
            Ok(content)
        }
        Err(source) => {
            let display = path.display().to_string();
            logging::log_shell_load(kind.label(), &display, &Err(source.to_string()));
            Err(FolioError::ComponentRead {
                path: display,
                source,
            })
        }
    }
}

/// Read both shell components synchronously
pub fn load_shell(config: &ShellConfig) -> Result<PageShell> {
    if !config.components_dir.is_dir() {
        return Err(FolioError::ComponentsDirMissing(
            config.components_dir.display().to_string(),
        ));
    }

    let header = load_component(&config.components_dir, ComponentKind::Header, config.language)?;
    let footer = load_component(&config.components_dir, ComponentKind::Footer, config.language)?;

    Ok(PageShell { header, footer })
}

/// Load the shell on a background thread.
///
/// Exactly one `ShellMessage` is sent. Failure is logged and never
/// retried; the receiver decides what the session does without a shell.
pub fn spawn_load(config: ShellConfig) -> Receiver<ShellMessage> {
    let (tx, rx) = channel();

    thread::spawn(move || match load_shell(&config) {
        Ok(shell) => {
            logging::info(
                "SHELL",
                &format!("Shell ({}) fully loaded", config.language),
            );
            let _ = tx.send(ShellMessage::Loaded(shell));
        }
        Err(e) => {
            logging::error("SHELL", &format!("Shell load failed: {}", e));
            let _ = tx.send(ShellMessage::Failed(e.to_string()));
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn write_components(dir: &Path, language: Language) {
        std::fs::write(
            component_path(dir, ComponentKind::Header, language),
            format!("<header>{}</header>", language),
        )
        .unwrap();
        std::fs::write(
            component_path(dir, ComponentKind::Footer, language),
            format!("<footer>{}</footer>", language),
        )
        .unwrap();
    }

    #[test]
    fn component_filenames_follow_language_maps() {
        assert_eq!(ComponentKind::Header.filename(Language::En), "header.html");
        assert_eq!(
            ComponentKind::Header.filename(Language::Es),
            "header-es.html"
        );
        assert_eq!(
            ComponentKind::Footer.filename(Language::It),
            "footer-it.html"
        );
    }

    #[test]
    fn load_shell_reads_both_components() {
        let dir = tempfile::tempdir().unwrap();
        write_components(dir.path(), Language::Es);

        let shell = load_shell(&ShellConfig {
            components_dir: dir.path().to_path_buf(),
            language: Language::Es,
        })
        .unwrap();

        assert_eq!(shell.header, "<header>es</header>");
        assert_eq!(shell.footer, "<footer>es</footer>");
    }

    #[test]
    fn missing_components_dir_is_an_error() {
        let err = load_shell(&ShellConfig {
            components_dir: PathBuf::from("/nonexistent/components"),
            language: Language::En,
        })
        .unwrap_err();

        assert!(err.is_recoverable());
    }

    #[test]
    fn spawn_load_delivers_loaded_message() {
        let dir = tempfile::tempdir().unwrap();
        write_components(dir.path(), Language::En);

        let rx = spawn_load(ShellConfig {
            components_dir: dir.path().to_path_buf(),
            language: Language::En,
        });

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            ShellMessage::Loaded(shell) => assert_eq!(shell.header, "<header>en</header>"),
            ShellMessage::Failed(e) => panic!("unexpected failure: {}", e),
        }
    }

    #[test]
    fn spawn_load_delivers_failed_message_without_retry() {
        let rx = spawn_load(ShellConfig {
            components_dir: PathBuf::from("/nonexistent/components"),
            language: Language::En,
        });

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            ShellMessage::Failed(_) => {}
            ShellMessage::Loaded(_) => panic!("expected a failure"),
        }

        // Exactly one message; the channel then disconnects.
        assert!(rx.recv_timeout(Duration::from_secs(1)).is_err());
    }
}

//! Navigation bar state
//!
//! Top-level nav items with optional dropdown submenus. Activating an
//! item that has a submenu toggles its dropdown (closing any other);
//! activating one without a submenu navigates directly. Visibility of the
//! whole bar is a hamburger-style toggle.

use crate::catalog::Language;
use crate::error::{FolioError, Result};
use crate::logging;
use std::path::Path;

/// A dropdown submenu entry
pub struct NavChild {
    pub label: String,
    pub location: String,
}

/// A top-level nav item
pub struct NavItem {
    pub label: String,
    /// Navigation target; `None` for pure dropdown anchors
    pub location: Option<String>,
    pub children: Vec<NavChild>,
}

impl NavItem {
    fn link(label: &str, location: String) -> Self {
        Self {
            label: label.to_string(),
            location: Some(location),
            children: Vec::new(),
        }
    }

    fn dropdown(label: &str, children: Vec<NavChild>) -> Self {
        Self {
            label: label.to_string(),
            location: None,
            children,
        }
    }

    pub fn has_dropdown(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Navigation bar state
pub struct NavBarState {
    pub items: Vec<NavItem>,
    /// Hamburger toggle
    pub visible: bool,
    pub active_item: usize,
    /// At most one dropdown is open at a time
    pub open_dropdown: Option<usize>,
    pub active_child: usize,
}

impl NavBarState {
    /// Localized nav bar for a language
    pub fn for_language(language: Language) -> Self {
        let tag = language.tag();

        let (home, data, development, about, contact) = match language {
            Language::En => ("Home", "Data", "Development", "About", "Contact"),
            Language::Es => ("Inicio", "Datos", "Desarrollo", "Sobre mí", "Contacto"),
            Language::It => ("Home", "Dati", "Sviluppo", "Chi sono", "Contatti"),
        };

        let (data_projects, web_projects) = match language {
            Language::En => ("Data Analysis", "Web Development"),
            Language::Es => ("Análisis de Datos", "Desarrollo Web"),
            Language::It => ("Analisi Dati", "Sviluppo Web"),
        };

        let items = vec![
            NavItem::link(home, format!("/{}/index.html", tag)),
            NavItem::dropdown(
                data,
                vec![NavChild {
                    label: data_projects.to_string(),
                    location: format!("/{}/data/data-analysis/data-analysis.html", tag),
                }],
            ),
            NavItem::dropdown(
                development,
                vec![NavChild {
                    label: web_projects.to_string(),
                    location: format!("/{}/development/web-development/web-development.html", tag),
                }],
            ),
            NavItem::link(about, format!("/{}/about.html", tag)),
            NavItem::link(contact, format!("/{}/contact.html", tag)),
        ];

        Self {
            items,
            visible: true,
            active_item: 0,
            open_dropdown: None,
            active_child: 0,
        }
    }

    /// Hamburger toggle
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.close_dropdown();
        }
    }

    pub fn move_left(&mut self) {
        if self.active_item > 0 {
            self.active_item -= 1;
        }
        self.close_dropdown();
    }

    pub fn move_right(&mut self) {
        if self.active_item + 1 < self.items.len() {
            self.active_item += 1;
        }
        self.close_dropdown();
    }

    /// Activate the current item. Items with a submenu toggle their
    /// dropdown (closing any other open one); items without navigate.
    pub fn activate(&mut self) -> Option<String> {
        let item = self.items.get(self.active_item)?;

        if item.has_dropdown() {
            if self.open_dropdown == Some(self.active_item) {
                self.close_dropdown();
            } else {
                self.open_dropdown = Some(self.active_item);
                self.active_child = 0;
            }
            None
        } else {
            item.location.clone()
        }
    }

    pub fn child_next(&mut self) {
        if let Some(open) = self.open_dropdown {
            let count = self.items[open].children.len();
            if self.active_child + 1 < count {
                self.active_child += 1;
            }
        }
    }

    pub fn child_prev(&mut self) {
        if self.active_child > 0 {
            self.active_child -= 1;
        }
    }

    /// Activate the highlighted dropdown entry and close the dropdown
    pub fn activate_child(&mut self) -> Option<String> {
        let open = self.open_dropdown?;
        let location = self
            .items
            .get(open)?
            .children
            .get(self.active_child)
            .map(|c| c.location.clone());
        self.close_dropdown();
        location
    }

    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
        self.active_child = 0;
    }
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| FolioError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| FolioError::Clipboard(e.to_string()))
}

/// Hand a location to the OS opener (full external navigation).
///
/// Site-relative locations are resolved against the site root; absolute
/// URLs pass through untouched.
pub fn navigate_to(site_root: &Path, location: &str) -> Result<()> {
    let target = if location.starts_with("http://") || location.starts_with("https://") {
        location.to_string()
    } else {
        site_root
            .join(location.trim_start_matches('/'))
            .display()
            .to_string()
    };

    logging::log_navigation(&target);
    open::that(&target).map_err(|e| FolioError::Navigation {
        location: target.clone(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activating_a_dropdown_item_toggles_instead_of_navigating() {
        let mut nav = NavBarState::for_language(Language::En);
        nav.active_item = 1; // "Data"

        assert_eq!(nav.activate(), None);
        assert_eq!(nav.open_dropdown, Some(1));
        assert_eq!(nav.activate(), None);
        assert_eq!(nav.open_dropdown, None);
    }

    #[test]
    fn opening_a_dropdown_closes_any_other() {
        let mut nav = NavBarState::for_language(Language::En);
        nav.active_item = 1;
        nav.activate();
        assert_eq!(nav.open_dropdown, Some(1));

        nav.move_right(); // moving away closes
        assert_eq!(nav.open_dropdown, None);
        nav.activate();
        assert_eq!(nav.open_dropdown, Some(2));
    }

    #[test]
    fn plain_items_navigate_directly() {
        let mut nav = NavBarState::for_language(Language::Es);
        nav.active_item = 0;
        assert_eq!(nav.activate().as_deref(), Some("/es/index.html"));
        assert_eq!(nav.open_dropdown, None);
    }

    #[test]
    fn activating_a_child_closes_the_dropdown() {
        let mut nav = NavBarState::for_language(Language::It);
        nav.active_item = 2;
        nav.activate();
        let location = nav.activate_child();
        assert_eq!(
            location.as_deref(),
            Some("/it/development/web-development/web-development.html")
        );
        assert_eq!(nav.open_dropdown, None);
    }

    #[test]
    fn hamburger_toggle_hides_and_closes() {
        let mut nav = NavBarState::for_language(Language::En);
        nav.active_item = 1;
        nav.activate();

        nav.toggle_visible();
        assert!(!nav.visible);
        assert_eq!(nav.open_dropdown, None);
        nav.toggle_visible();
        assert!(nav.visible);
    }

    #[test]
    fn nav_labels_are_localized() {
        let en = NavBarState::for_language(Language::En);
        let es = NavBarState::for_language(Language::Es);
        assert_eq!(en.items[0].label, "Home");
        assert_eq!(es.items[0].label, "Inicio");
        assert_eq!(en.items.len(), es.items.len());
    }
}

//! Search overlay controller
//!
//! Owns the open/closed state of the results overlay and the search input
//! state, and turns input/focus/keyboard/pointer events into engine calls
//! and re-renders. Rows are rebuilt from scratch on every search, so no
//! stale entries can survive across renders.

use crate::catalog::{Catalog, Language};
use crate::highlight::highlight;
use crate::logging;
use crate::search::{normalize_query, search, SearchOutcome};

/// Search input state for the TUI
pub struct SearchState {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: false,
        }
    }
}

/// An owned highlight run inside a result row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSegment {
    pub text: String,
    pub matched: bool,
}

/// One selectable row of the results overlay
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub segments: Vec<RowSegment>,
    pub location: String,
}

/// Selection and scroll state for the results overlay
pub struct ResultListState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for ResultListState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 8,
        }
    }
}

impl ResultListState {
    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }

    fn reset(&mut self) {
        self.selected = None;
        self.scroll_offset = 0;
    }
}

/// Overlay visibility; mutated only by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    Closed,
    Open,
}

/// The search UI controller.
///
/// Detached until the page shell signals it has loaded; a detached
/// controller ignores every event, mirroring the no-op initialization
/// when required page elements are absent.
pub struct SearchController {
    pub input: SearchState,
    pub list: ResultListState,
    overlay: Overlay,
    rows: Vec<ResultRow>,
    placeholder: Option<String>,
    attached: bool,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            input: SearchState::default(),
            list: ResultListState::default(),
            overlay: Overlay::Closed,
            rows: Vec::new(),
            placeholder: None,
            attached: false,
        }
    }

    /// Consume the shell-ready signal and start handling events
    pub fn attach(&mut self) {
        self.attached = true;
        self.input.focused = true;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_open(&self) -> bool {
        self.overlay == Overlay::Open
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Localized "no matches" text, present only when a search is active
    /// with zero matches
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    // --- Event transitions ---

    /// The input's text changed
    pub fn on_input(&mut self, catalog: &Catalog, language: Language) {
        if !self.attached {
            return;
        }
        self.perform_search(catalog, language);
    }

    /// The input gained focus; re-show results if text is still there
    pub fn on_focus(&mut self, catalog: &Catalog, language: Language) {
        if !self.attached {
            return;
        }
        self.input.focused = true;
        if !self.input.query.trim().is_empty() {
            self.perform_search(catalog, language);
        }
    }

    /// Enter pressed in the input: re-run the search synchronously
    pub fn on_enter(&mut self, catalog: &Catalog, language: Language) {
        if !self.attached {
            return;
        }
        self.perform_search(catalog, language);
    }

    /// A result row was activated. Clears the query, closes the overlay,
    /// and returns the location to navigate to.
    pub fn on_select(&mut self, index: usize) -> Option<String> {
        if !self.attached {
            return None;
        }
        let location = self.rows.get(index)?.location.clone();
        self.input.query.clear();
        self.input.cursor_pos = 0;
        self.close();
        Some(location)
    }

    /// Pointer pressed outside both the input and the results overlay
    pub fn on_outside_press(&mut self) {
        if !self.attached || self.overlay == Overlay::Closed {
            return;
        }
        self.close();
        self.input.focused = false;
    }

    /// Run the engine and rebuild the overlay. Previous rows are always
    /// cleared before anything new is written.
    fn perform_search(&mut self, catalog: &Catalog, language: Language) {
        self.rows.clear();
        self.placeholder = None;
        self.list.reset();

        let matches = match search(catalog, language, &self.input.query) {
            SearchOutcome::Inactive => {
                self.overlay = Overlay::Closed;
                return;
            }
            SearchOutcome::Results(matches) => matches,
        };

        self.overlay = Overlay::Open;
        logging::log_search(self.input.query.trim(), language.tag(), matches.len());

        if matches.is_empty() {
            self.placeholder = Some(language.no_match_message().to_string());
            return;
        }

        // Not empty here: an inactive query returned above.
        let query = normalize_query(&self.input.query).unwrap_or_default();
        for entry in matches {
            let segments = highlight(&entry.title, &query)
                .into_iter()
                .map(|s| RowSegment {
                    text: s.text.to_string(),
                    matched: s.matched,
                })
                .collect();
            self.rows.push(ResultRow {
                segments,
                location: entry.location.clone(),
            });
        }
    }

    fn close(&mut self) {
        self.rows.clear();
        self.placeholder = None;
        self.overlay = Overlay::Closed;
        self.list.reset();
    }

    // --- Input editing (char-boundary aware) ---

    pub fn insert_char(&mut self, c: char) {
        self.input.query.insert(self.input.cursor_pos, c);
        self.input.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) -> bool {
        if self.input.cursor_pos == 0 {
            return false;
        }
        let prev = self.input.query[..self.input.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.input.query.remove(prev);
        self.input.cursor_pos = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.input.cursor_pos >= self.input.query.len() {
            return false;
        }
        self.input.query.remove(self.input.cursor_pos);
        true
    }

    pub fn move_left(&mut self) {
        if self.input.cursor_pos > 0 {
            let prev = self.input.query[..self.input.cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input.cursor_pos = prev;
        }
    }

    pub fn move_right(&mut self) {
        if self.input.cursor_pos < self.input.query.len() {
            let next = self.input.query[self.input.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.input.cursor_pos + i)
                .unwrap_or(self.input.query.len());
            self.input.cursor_pos = next;
        }
    }

    pub fn move_home(&mut self) {
        self.input.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.input.cursor_pos = self.input.query.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Entry};

    fn catalog() -> Catalog {
        use Language::*;
        Catalog::new(vec![
            Entry::new("Web Development - Projects", "/en/web.html", En),
            Entry::new("Data Analysis - Projects", "/en/data.html", En),
            Entry::new("Desarrollo Web - Proyectos", "/es/web.html", Es),
        ])
    }

    fn attached() -> SearchController {
        let mut controller = SearchController::new();
        controller.attach();
        controller
    }

    fn type_query(controller: &mut SearchController, catalog: &Catalog, text: &str) {
        for c in text.chars() {
            controller.insert_char(c);
            controller.on_input(catalog, Language::En);
        }
    }

    #[test]
    fn typing_a_character_opens_the_overlay() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "w");
        assert!(controller.is_open());
        assert_eq!(controller.rows().len(), 1);
    }

    #[test]
    fn deleting_all_characters_closes_the_overlay() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "web");
        assert!(controller.is_open());

        while controller.backspace() {
            controller.on_input(&catalog, Language::En);
        }
        assert!(!controller.is_open());
        assert!(controller.rows().is_empty());
    }

    #[test]
    fn whitespace_only_query_keeps_the_overlay_closed() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "   ");
        assert!(!controller.is_open());
    }

    #[test]
    fn zero_matches_renders_exactly_one_placeholder_row() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "zzz");
        assert!(controller.is_open());
        assert!(controller.rows().is_empty());
        assert_eq!(controller.placeholder(), Some("No matches found"));
    }

    #[test]
    fn placeholder_is_localized() {
        let catalog = catalog();
        let mut controller = attached();
        controller.insert_char('z');
        controller.on_input(&catalog, Language::Es);
        assert_eq!(
            controller.placeholder(),
            Some("No se encontraron coincidencias")
        );
    }

    #[test]
    fn rows_carry_highlighted_segments() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "dev");
        let row = &controller.rows()[0];
        let joined: String = row.segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "Web Development - Projects");
        assert!(row
            .segments
            .iter()
            .any(|s| s.matched && s.text.eq_ignore_ascii_case("dev")));
    }

    #[test]
    fn focus_with_existing_text_reopens_the_overlay() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "web");
        controller.on_outside_press();
        assert!(!controller.is_open());
        assert!(!controller.input.focused);

        controller.on_focus(&catalog, Language::En);
        assert!(controller.is_open());
        assert!(controller.input.focused);
    }

    #[test]
    fn focus_with_empty_text_does_not_open() {
        let catalog = catalog();
        let mut controller = attached();
        controller.on_focus(&catalog, Language::En);
        assert!(!controller.is_open());
    }

    #[test]
    fn enter_reruns_the_search() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "projects");
        assert_eq!(controller.rows().len(), 2);
        controller.on_enter(&catalog, Language::En);
        assert!(controller.is_open());
        assert_eq!(controller.rows().len(), 2);
    }

    #[test]
    fn selecting_a_result_closes_clears_and_navigates() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "data");
        let location = controller.on_select(0);
        assert_eq!(location.as_deref(), Some("/en/data.html"));
        assert!(!controller.is_open());
        assert!(controller.input.query.is_empty());
        assert!(controller.rows().is_empty());
    }

    #[test]
    fn outside_press_closes_and_blurs() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "web");
        controller.on_outside_press();
        assert!(!controller.is_open());
        assert!(!controller.input.focused);
        // The query text itself is retained (only selection clears it)
        assert_eq!(controller.input.query, "web");
    }

    #[test]
    fn detached_controller_ignores_every_event() {
        let catalog = catalog();
        let mut controller = SearchController::new();

        controller.insert_char('w');
        controller.on_input(&catalog, Language::En);
        controller.on_focus(&catalog, Language::En);
        controller.on_enter(&catalog, Language::En);
        assert!(!controller.is_open());
        assert!(controller.on_select(0).is_none());
    }

    #[test]
    fn rerender_replaces_previous_rows() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "projects");
        assert_eq!(controller.rows().len(), 2);

        // Narrow the query: the old rows must not survive
        type_query(&mut controller, &catalog, " data");
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.rows()[0].location, "/en/data.html");
    }

    #[test]
    fn selection_moves_and_stays_in_range() {
        let catalog = catalog();
        let mut controller = attached();

        type_query(&mut controller, &catalog, "projects");
        let total = controller.rows().len();
        controller.list.select_next(total);
        controller.list.select_next(total);
        controller.list.select_next(total);
        assert_eq!(controller.list.selected, Some(total - 1));
        controller.list.select_prev();
        assert_eq!(controller.list.selected, Some(total - 2));
    }

    #[test]
    fn cursor_editing_respects_char_boundaries() {
        let mut controller = attached();
        for c in "aná".chars() {
            controller.insert_char(c);
        }
        controller.move_left();
        controller.move_left();
        assert_eq!(controller.input.cursor_pos, 1);
        controller.move_end();
        assert!(controller.backspace());
        assert_eq!(controller.input.query, "an");
    }
}

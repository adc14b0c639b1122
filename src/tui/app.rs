//! Application state and event loop
//!
//! Single-threaded cooperative loop: draw, poll one event, tick. The
//! only background work is the page shell loader; its one-shot message is
//! consumed during tick processing, and search handling attaches only
//! after a successful load.

use crate::catalog::{Catalog, Language};
use crate::nav::resolve_language_target;
use crate::shell::{spawn_load, PageShell, ShellConfig, ShellMessage};
use crate::slider::Slider;
use crate::tui::menu::{self, NavBarState};
use crate::tui::search::SearchController;
use crate::tui::ui;
use crate::{logging, AppConfig};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// Which region owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusZone {
    Nav,
    Search,
    Results,
    Slider,
}

/// Page shell lifecycle
pub enum ShellPhase {
    Loading(Receiver<ShellMessage>),
    Ready(PageShell),
    Failed(String),
}

pub struct App {
    // Data
    pub catalog: Catalog,
    pub language: Language,
    pub config: AppConfig,
    pub current_location: String,

    // Sub-states
    pub shell: ShellPhase,
    pub search: SearchController,
    pub nav: NavBarState,
    pub slider: Slider,

    pub focus: FocusZone,
    pub status_message: String,

    // Layout rects recorded during draw, for pointer hit-testing
    pub search_area: Rect,
    pub results_area: Rect,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let language = config.language;
        let shell_rx = spawn_load(ShellConfig {
            components_dir: config.components_dir.clone(),
            language,
        });

        Self {
            catalog: Catalog::builtin(),
            language,
            current_location: format!("/{}/index.html", language.tag()),
            shell: ShellPhase::Loading(shell_rx),
            search: SearchController::new(),
            nav: NavBarState::for_language(language),
            slider: Slider::showcase(language),
            focus: FocusZone::Nav,
            status_message: "Loading page shell...".to_string(),
            search_area: Rect::default(),
            results_area: Rect::default(),
            should_quit: false,
            config,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> crate::Result<()>
    where
        crate::error::FolioError: From<B::Error>,
    {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) => self.handle_key(key),
                    Ok(Event::Mouse(mouse)) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_shell_messages();
                if self.slider.tick(Instant::now()) {
                    self.status_message = self.slider.announcement();
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Consume the shell loader's one-shot message, if it has arrived.
    /// A successful load is the signal that attaches search handling.
    pub fn process_shell_messages(&mut self) {
        let message = match &self.shell {
            ShellPhase::Loading(rx) => match rx.try_recv() {
                Ok(message) => message,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    ShellMessage::Failed("shell loader disconnected".to_string())
                }
            },
            _ => return,
        };

        match message {
            ShellMessage::Loaded(shell) => {
                self.shell = ShellPhase::Ready(shell);
                self.search.attach();
                self.focus = FocusZone::Search;
                self.status_message = format!("Ready - {}", self.language.label());
            }
            ShellMessage::Failed(reason) => {
                self.shell = ShellPhase::Failed(reason);
                self.status_message = "Page shell failed to load - search unavailable".to_string();
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.switch_language();
                return;
            }
            KeyCode::F(2) => {
                self.nav.toggle_visible();
                return;
            }
            KeyCode::Tab => {
                self.cycle_focus();
                return;
            }
            KeyCode::Esc => {
                self.handle_escape();
                return;
            }
            _ => {}
        }

        match self.focus {
            FocusZone::Nav => self.handle_nav_key(key),
            FocusZone::Search => self.handle_search_key(key),
            FocusZone::Results => self.handle_results_key(key),
            FocusZone::Slider => self.handle_slider_key(key),
        }
    }

    fn handle_escape(&mut self) {
        if self.focus == FocusZone::Search && !self.search.input.query.is_empty() {
            self.search.input.query.clear();
            self.search.input.cursor_pos = 0;
            self.search.on_input(&self.catalog, self.language);
        } else if self.nav.open_dropdown.is_some() {
            self.nav.close_dropdown();
        } else if self.focus == FocusZone::Results {
            self.focus = FocusZone::Search;
        } else if self.focus == FocusZone::Search {
            self.search.on_outside_press();
            self.focus = FocusZone::Nav;
        } else {
            self.should_quit = true;
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusZone::Nav => {
                if self.search.is_attached() {
                    self.search.on_focus(&self.catalog, self.language);
                    FocusZone::Search
                } else {
                    FocusZone::Slider
                }
            }
            FocusZone::Search | FocusZone::Results => FocusZone::Slider,
            FocusZone::Slider => FocusZone::Nav,
        };
        if self.focus != FocusZone::Search && self.focus != FocusZone::Results {
            self.search.input.focused = false;
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.nav.move_left(),
            KeyCode::Right => self.nav.move_right(),
            KeyCode::Down if self.nav.open_dropdown.is_some() => self.nav.child_next(),
            KeyCode::Up if self.nav.open_dropdown.is_some() => self.nav.child_prev(),
            KeyCode::Enter => {
                let location = if self.nav.open_dropdown.is_some() {
                    self.nav.activate_child()
                } else {
                    self.nav.activate()
                };
                if let Some(location) = location {
                    self.navigate(&location);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        if !self.search.is_attached() {
            return;
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.insert_char(c);
                self.search.on_input(&self.catalog, self.language);
            }
            KeyCode::Backspace => {
                if self.search.backspace() {
                    self.search.on_input(&self.catalog, self.language);
                }
            }
            KeyCode::Delete => {
                if self.search.delete() {
                    self.search.on_input(&self.catalog, self.language);
                }
            }
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(),
            KeyCode::Enter => {
                self.search.on_enter(&self.catalog, self.language);
            }
            KeyCode::Down if self.search.is_open() && !self.search.rows().is_empty() => {
                self.focus = FocusZone::Results;
                let total = self.search.rows().len();
                self.search.list.select_next(total);
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let total = self.search.rows().len();
        match key.code {
            KeyCode::Down => self.search.list.select_next(total),
            KeyCode::Up => {
                if self.search.list.selected == Some(0) {
                    self.search.list.selected = None;
                    self.focus = FocusZone::Search;
                } else {
                    self.search.list.select_prev();
                }
            }
            KeyCode::Enter => {
                if let Some(index) = self.search.list.selected {
                    if let Some(location) = self.search.on_select(index) {
                        self.focus = FocusZone::Search;
                        self.navigate(&location);
                    }
                }
            }
            KeyCode::Char('y') => {
                if let Some(index) = self.search.list.selected {
                    if let Some(row) = self.search.rows().get(index) {
                        let location = row.location.clone();
                        match menu::copy_to_clipboard(&location) {
                            Ok(()) => {
                                self.status_message = format!("Copied {}", location);
                            }
                            Err(e) => {
                                logging::warn("NAV", &e.to_string());
                                self.status_message = e.to_string();
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_slider_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.slider.prev();
                self.status_message = self.slider.announcement();
            }
            KeyCode::Right => {
                self.slider.next();
                self.status_message = self.slider.announcement();
            }
            KeyCode::Char(' ') => {
                if self.slider.is_paused() {
                    self.slider.resume();
                    self.status_message = "Slideshow resumed".to_string();
                } else {
                    self.slider.pause();
                    self.status_message = "Slideshow paused".to_string();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = (c as usize) - ('1' as usize);
                self.slider.go_to(index);
                self.status_message = self.slider.announcement();
            }
            _ => {}
        }
    }

    // --- Mouse handling ---

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.on_pointer_down(mouse.column, mouse.row);
        }
    }

    /// Pointer-down dispatch. Presses inside the input or the results
    /// overlay never close the overlay; anything else does.
    pub fn on_pointer_down(&mut self, x: u16, y: u16) {
        let position = Position::new(x, y);

        if self.search_area.contains(position) {
            self.focus = FocusZone::Search;
            self.search.on_focus(&self.catalog, self.language);
            return;
        }

        if self.search.is_open() && self.results_area.contains(position) {
            // Border row and placeholder rows are inside the overlay but
            // not selectable; a press there still must not close it.
            let inner_top = self.results_area.y.saturating_add(1);
            if y >= inner_top {
                let row = (y - inner_top) as usize + self.search.list.scroll_offset;
                if row < self.search.rows().len() {
                    if let Some(location) = self.search.on_select(row) {
                        self.focus = FocusZone::Search;
                        self.navigate(&location);
                    }
                }
            }
            return;
        }

        self.search.on_outside_press();
        if self.focus == FocusZone::Search || self.focus == FocusZone::Results {
            self.focus = FocusZone::Nav;
        }
    }

    // --- Side effects ---

    fn navigate(&mut self, location: &str) {
        self.current_location = location.to_string();
        match menu::navigate_to(&self.config.site_root, location) {
            Ok(()) => {
                self.status_message = format!("Opening {}", location);
            }
            Err(e) => {
                logging::warn("NAV", &e.to_string());
                self.status_message = e.to_string();
            }
        }
    }

    /// Cycle to the next language. The shell reloads for the new
    /// language and search re-attaches once it is ready, like a full
    /// page navigation.
    fn switch_language(&mut self) {
        self.language = self.language.next();
        self.current_location = resolve_language_target(
            &self.config.site_root,
            &self.current_location,
            self.language,
        );

        self.nav = NavBarState::for_language(self.language);
        self.slider = Slider::showcase(self.language);
        self.search = SearchController::new();
        self.shell = ShellPhase::Loading(spawn_load(ShellConfig {
            components_dir: self.config.components_dir.clone(),
            language: self.language,
        }));
        self.focus = FocusZone::Nav;
        self.status_message = format!("Switching to {}...", self.language.label());
        logging::info("APP", &format!("Language switched to {}", self.language));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    fn write_components(dir: &Path, language: Language) {
        use crate::shell::{component_path, ComponentKind};
        std::fs::write(
            component_path(dir, ComponentKind::Header, language),
            "<header/>",
        )
        .unwrap();
        std::fs::write(
            component_path(dir, ComponentKind::Footer, language),
            "<footer/>",
        )
        .unwrap();
    }

    fn app_with_components() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        write_components(dir.path(), Language::En);
        let config = AppConfig {
            components_dir: dir.path().to_path_buf(),
            site_root: dir.path().to_path_buf(),
            language: Language::En,
        };
        (App::new(config), dir)
    }

    fn wait_for_shell(app: &mut App) {
        for _ in 0..100 {
            app.process_shell_messages();
            if !matches!(app.shell, ShellPhase::Loading(_)) {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("shell message never arrived");
    }

    #[test]
    fn search_attaches_only_after_shell_loads() {
        let (mut app, _dir) = app_with_components();
        assert!(!app.search.is_attached());

        wait_for_shell(&mut app);
        assert!(matches!(app.shell, ShellPhase::Ready(_)));
        assert!(app.search.is_attached());
        assert_eq!(app.focus, FocusZone::Search);
    }

    #[test]
    fn shell_failure_leaves_search_detached() {
        let config = AppConfig {
            components_dir: PathBuf::from("/nonexistent/components"),
            site_root: PathBuf::from("."),
            language: Language::En,
        };
        let mut app = App::new(config);
        wait_for_shell(&mut app);

        assert!(matches!(app.shell, ShellPhase::Failed(_)));
        assert!(!app.search.is_attached());

        // Typed characters go nowhere
        app.focus = FocusZone::Search;
        app.handle_key(KeyEvent::from(KeyCode::Char('w')));
        assert!(!app.search.is_open());
    }

    fn open_overlay(app: &mut App) {
        app.focus = FocusZone::Search;
        for c in "web".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        assert!(app.search.is_open());
        // Rects as the draw pass would record them
        app.search_area = Rect::new(0, 4, 40, 3);
        app.results_area = Rect::new(0, 7, 40, 6);
    }

    #[test]
    fn pointer_down_outside_closes_the_overlay() {
        let (mut app, _dir) = app_with_components();
        wait_for_shell(&mut app);
        open_overlay(&mut app);

        app.on_pointer_down(0, 20);
        assert!(!app.search.is_open());
        assert!(!app.search.input.focused);
    }

    #[test]
    fn pointer_down_inside_input_keeps_the_overlay() {
        let (mut app, _dir) = app_with_components();
        wait_for_shell(&mut app);
        open_overlay(&mut app);

        app.on_pointer_down(5, 5);
        assert!(app.search.is_open());
        assert!(app.search.input.focused);
    }

    #[test]
    fn pointer_down_inside_results_border_keeps_the_overlay() {
        let (mut app, _dir) = app_with_components();
        wait_for_shell(&mut app);
        open_overlay(&mut app);

        app.on_pointer_down(5, 7);
        assert!(app.search.is_open());
    }

    #[test]
    fn escape_clears_query_before_blurring() {
        let (mut app, _dir) = app_with_components();
        wait_for_shell(&mut app);
        open_overlay(&mut app);

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.search.input.query.is_empty());
        assert!(!app.search.is_open());
        assert_eq!(app.focus, FocusZone::Search);

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.focus, FocusZone::Nav);
    }

    #[test]
    fn switching_language_reloads_the_shell() {
        let (mut app, dir) = app_with_components();
        wait_for_shell(&mut app);
        write_components(dir.path(), Language::Es);

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(app.language, Language::Es);
        assert!(!app.search.is_attached());
        assert_eq!(app.current_location, "/es/index.html");

        wait_for_shell(&mut app);
        assert!(app.search.is_attached());
    }
}

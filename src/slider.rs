//! Project showcase slider
//!
//! Carousel state bundled in one struct: current slide, auto-advance
//! timer, pause/resume. The timer is driven by the owner's tick loop via
//! `tick(now)`, so the lifecycle is explicit and testable without a
//! terminal.

use crate::catalog::Language;
use std::time::{Duration, Instant};

/// Auto-advance period between slides
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

/// One showcase slide
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub caption: String,
}

impl Slide {
    pub fn new(title: &str, caption: &str) -> Self {
        Self {
            title: title.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// Carousel state
pub struct Slider {
    slides: Vec<Slide>,
    current: usize,
    interval: Duration,
    last_advance: Instant,
    paused: bool,
    running: bool,
}

impl Slider {
    /// Create a slider; auto-advance starts immediately
    pub fn new(slides: Vec<Slide>, interval: Duration) -> Self {
        Self {
            slides,
            current: 0,
            interval,
            last_advance: Instant::now(),
            paused: false,
            running: true,
        }
    }

    /// The compiled-in showcase for a language
    pub fn showcase(language: Language) -> Self {
        let slides = match language {
            Language::En => vec![
                Slide::new(
                    "Urban Mobility - Ecobici 2024",
                    "Data analysis with R & Tableau",
                ),
                Slide::new("Personal Website", "JavaScript, CSS and HTML"),
                Slide::new("Data Analysis Projects", "Exploration and visualization"),
            ],
            Language::Es => vec![
                Slide::new(
                    "Movilidad Urbana - Ecobici 2024",
                    "Análisis de datos con R y Tableau",
                ),
                Slide::new("Sitio Web Personal", "JavaScript, CSS y HTML"),
                Slide::new("Proyectos de Análisis de Datos", "Exploración y visualización"),
            ],
            Language::It => vec![
                Slide::new(
                    "Mobilità Urbana - Ecobici 2024",
                    "Analisi dati con R e Tableau",
                ),
                Slide::new("Sito Web Personale", "JavaScript, CSS e HTML"),
                Slide::new("Progetti di Analisi Dati", "Esplorazione e visualizzazione"),
            ],
        };

        Self::new(slides, AUTO_ADVANCE_INTERVAL)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Show the next slide (wraps around)
    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
    }

    /// Show the previous slide (wraps around)
    pub fn prev(&mut self) {
        if !self.slides.is_empty() {
            self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        }
    }

    /// Jump to a slide; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }

    /// Suspend auto-advance while the showcase is being inspected
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume auto-advance
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Stop the auto-advance timer entirely
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restart the auto-advance timer
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.last_advance = now;
    }

    /// Advance when the interval has elapsed. Returns whether a slide
    /// change happened; at most one per elapsed interval.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running || self.paused || self.slides.is_empty() {
            return false;
        }
        if now.duration_since(self.last_advance) < self.interval {
            return false;
        }

        self.next();
        self.last_advance = now;
        true
    }

    /// Announcement text for the status line (screen-reader style)
    pub fn announcement(&self) -> String {
        format!("Slide {} of {} shown", self.current + 1, self.slides.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_slider() -> Slider {
        Slider::new(
            vec![
                Slide::new("one", ""),
                Slide::new("two", ""),
                Slide::new("three", ""),
            ],
            Duration::from_secs(5),
        )
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut slider = test_slider();
        slider.prev();
        assert_eq!(slider.current_index(), 2);
        slider.next();
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut slider = test_slider();
        slider.go_to(2);
        assert_eq!(slider.current_index(), 2);
        slider.go_to(9);
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn tick_advances_once_per_interval() {
        let mut slider = test_slider();
        let now = Instant::now();

        assert!(!slider.tick(now));
        let later = now + Duration::from_secs(5);
        assert!(slider.tick(later));
        assert_eq!(slider.current_index(), 1);
        // Same instant again: interval has not elapsed a second time
        assert!(!slider.tick(later));
    }

    #[test]
    fn paused_slider_does_not_advance() {
        let mut slider = test_slider();
        let now = Instant::now();
        slider.pause();
        assert!(!slider.tick(now + Duration::from_secs(60)));
        slider.resume();
        assert!(slider.tick(now + Duration::from_secs(60)));
    }

    #[test]
    fn stopped_slider_does_not_advance_until_started() {
        let mut slider = test_slider();
        let now = Instant::now();
        slider.stop();
        assert!(!slider.tick(now + Duration::from_secs(60)));
        slider.start(now + Duration::from_secs(60));
        assert!(!slider.tick(now + Duration::from_secs(60)));
        assert!(slider.tick(now + Duration::from_secs(65)));
    }

    #[test]
    fn announcement_counts_from_one() {
        let mut slider = test_slider();
        assert_eq!(slider.announcement(), "Slide 1 of 3 shown");
        slider.next();
        assert_eq!(slider.announcement(), "Slide 2 of 3 shown");
    }

    #[test]
    fn showcase_is_localized() {
        for lang in crate::catalog::LANGUAGES {
            let slider = Slider::showcase(lang);
            assert!(!slider.is_empty());
        }
    }
}

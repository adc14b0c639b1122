use crate::catalog::Language;
use ratatui::style::{Color, Modifier, Style};

pub fn language_color(language: Language) -> Color {
    match language {
        Language::En => Color::LightBlue,
        Language::Es => Color::Yellow,
        Language::It => Color::Green,
    }
}

/// Style for matched runs inside a result title (the <mark> equivalent)
pub fn matched_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn plain_result_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn selected_row_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn blurred_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn nav_bar_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 50))
}

pub fn nav_active_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn status_bar_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135))
}

pub fn slide_title_style() -> Style {
    Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD)
}

pub fn slide_caption_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Indicator dots under the slider
pub fn dot(active: bool) -> &'static str {
    if active {
        "\u{25CF}"
    } else {
        "\u{25CB}"
    }
}

//! Frame rendering
//!
//! One draw function per page region, with popup overlays cleared before
//! drawing. The draw pass records the search input and results rects on
//! the app for pointer hit-testing.

use crate::tui::app::{App, FocusZone, ShellPhase};
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Nav bar
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Showcase
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_nav_strip(frame, app, chunks[1]);
    draw_search_bar(frame, app, chunks[2]);
    draw_showcase(frame, app, chunks[3]);
    draw_footer(frame, app, chunks[4]);
    draw_status_bar(frame, app, chunks[5]);

    app.search_area = chunks[2];

    // Results overlay sits over the showcase, directly below the input
    if app.search.is_open() {
        draw_results_overlay(frame, app, chunks[2], area);
    } else {
        app.results_area = Rect::default();
    }

    // Nav dropdown on top of everything below the bar
    if app.nav.open_dropdown.is_some() {
        draw_nav_dropdown(frame, app, chunks[1], area);
    }

    // Show cursor in the search input when it owns focus
    if app.search.is_attached() && app.search.input.focused && app.focus == FocusZone::Search {
        let prefix = 1 + " \u{1F50D} ".width() as u16;
        let cursor_x = chunks[2].x
            + prefix
            + app.search.input.query[..app.search.input.cursor_pos].width() as u16;
        let cursor_y = chunks[2].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let content = match &app.shell {
        ShellPhase::Ready(shell) => shell
            .header
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("")
            .trim()
            .to_string(),
        ShellPhase::Loading(_) => "Loading page shell...".to_string(),
        ShellPhase::Failed(_) => "(header unavailable)".to_string(),
    };

    let style = match &app.shell {
        ShellPhase::Ready(_) => Style::default().fg(Color::White),
        ShellPhase::Loading(_) => Style::default().fg(Color::DarkGray),
        ShellPhase::Failed(_) => Style::default().fg(Color::Red),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" folio ")
        .title(
            Line::from(Span::styled(
                format!(" {} ", app.language.label()),
                Style::default().fg(colors::language_color(app.language)),
            ))
            .right_aligned(),
        );

    frame.render_widget(Paragraph::new(content).style(style).block(block), area);
}

fn draw_nav_strip(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if !app.nav.visible {
        spans.push(Span::styled(" \u{2261} F2 ", colors::nav_bar_style()));
    } else {
        for (i, item) in app.nav.items.iter().enumerate() {
            let label = if item.has_dropdown() {
                format!(" {} \u{25BE} ", item.label)
            } else {
                format!(" {} ", item.label)
            };
            let style = if app.focus == FocusZone::Nav && i == app.nav.active_item {
                colors::nav_active_style()
            } else {
                colors::nav_bar_style()
            };
            spans.push(Span::styled(label, style));
        }
    }

    // Fill rest with background
    let labels_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(labels_width);
    if remaining > 0 {
        spans.push(Span::styled(" ".repeat(remaining), colors::nav_bar_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_nav_dropdown(frame: &mut Frame, app: &App, nav_area: Rect, area: Rect) {
    let open = match app.nav.open_dropdown {
        Some(open) => open,
        None => return,
    };
    let item = &app.nav.items[open];

    // Position below the open item's label
    let mut x_offset: u16 = 0;
    for prior in app.nav.items.iter().take(open) {
        let label_width = prior.label.width() + if prior.has_dropdown() { 4 } else { 2 };
        x_offset += label_width as u16;
    }

    let max_label = item
        .children
        .iter()
        .map(|c| c.label.width())
        .max()
        .unwrap_or(10);
    let width = (max_label as u16 + 4).min(area.width.saturating_sub(x_offset));
    let height = (item.children.len() as u16 + 2).min(area.height.saturating_sub(nav_area.y + 1));

    let popup_area = Rect::new(
        x_offset.min(area.width.saturating_sub(width)),
        nav_area.y + 1,
        width,
        height,
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::focused_border_style());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    for (i, child) in item.children.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let style = if i == app.nav.active_child {
            colors::selected_row_style()
        } else {
            Style::default().fg(Color::White)
        };
        let child_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        frame.render_widget(
            Paragraph::new(format!(" {} ", child.label)).style(style),
            child_area,
        );
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.is_attached() && app.search.input.focused {
        colors::focused_border_style()
    } else {
        colors::blurred_border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");

    let (text, style) = if app.search.is_attached() {
        (
            format!(" \u{1F50D} {}", app.search.input.query),
            Style::default().fg(Color::White),
        )
    } else {
        let hint = match &app.shell {
            ShellPhase::Failed(_) => " \u{1F50D} (search unavailable)",
            _ => " \u{1F50D} (loading...)",
        };
        (hint.to_string(), Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Paragraph::new(text).block(block).style(style), area);
}

fn draw_results_overlay(frame: &mut Frame, app: &mut App, search_area: Rect, area: Rect) {
    let row_count = if app.search.rows().is_empty() {
        1 // placeholder
    } else {
        app.search.rows().len()
    };

    let top = search_area.y + search_area.height;
    let available = area.height.saturating_sub(top).saturating_sub(2);
    if available < 3 {
        app.results_area = Rect::default();
        return;
    }
    let height = ((row_count as u16) + 2).min(available);

    let popup_area = Rect::new(search_area.x, top, search_area.width, height);
    app.results_area = popup_area;

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::focused_border_style())
        .title(" Results ");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    app.search.list.visible_rows = inner.height as usize;

    if let Some(placeholder) = app.search.placeholder() {
        let row_area = Rect::new(inner.x, inner.y, inner.width, 1);
        frame.render_widget(
            Paragraph::new(format!(" {} ", placeholder)).style(colors::placeholder_style()),
            row_area,
        );
        return;
    }

    let start = app.search.list.scroll_offset;
    let end = (start + inner.height as usize).min(app.search.rows().len());

    for (visual_idx, row_idx) in (start..end).enumerate() {
        let row = &app.search.rows()[row_idx];
        let is_selected =
            app.focus == FocusZone::Results && app.search.list.selected == Some(row_idx);

        let mut spans = vec![Span::raw(" ")];
        for segment in &row.segments {
            let style = if is_selected {
                colors::selected_row_style()
            } else if segment.matched {
                colors::matched_style()
            } else {
                colors::plain_result_style()
            };
            spans.push(Span::styled(segment.text.clone(), style));
        }

        let row_area = Rect::new(inner.x, inner.y + visual_idx as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn draw_showcase(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == FocusZone::Slider {
        colors::focused_border_style()
    } else {
        colors::blurred_border_style()
    };

    let title = match app.language {
        crate::catalog::Language::En => " Showcase ",
        crate::catalog::Language::Es => " Proyectos ",
        crate::catalog::Language::It => " Progetti ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slide = match app.slider.current_slide() {
        Some(slide) => slide,
        None => return,
    };

    let dots: Vec<Span> = (0..app.slider.len())
        .map(|i| Span::raw(format!("{} ", colors::dot(i == app.slider.current_index()))))
        .collect();

    let mut lines = vec![
        Line::from(Span::styled(slide.title.clone(), colors::slide_title_style())),
        Line::from(Span::styled(
            slide.caption.clone(),
            colors::slide_caption_style(),
        )),
        Line::raw(""),
        Line::from(dots),
    ];
    if app.slider.is_paused() {
        lines.push(Line::from(Span::styled(
            "(paused)",
            colors::placeholder_style(),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let content = match &app.shell {
        ShellPhase::Ready(shell) => shell
            .footer
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("")
            .trim()
            .to_string(),
        _ => String::new(),
    };

    frame.render_widget(
        Paragraph::new(content).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = " Tab focus \u{2502} F2 menu \u{2502} Ctrl+L language \u{2502} Ctrl+Q quit ";
    let left = format!(" {}", app.status_message);

    let fill = (area.width as usize)
        .saturating_sub(left.width())
        .saturating_sub(hints.width());

    let line = Line::from(vec![
        Span::styled(left, colors::status_bar_style()),
        Span::styled(" ".repeat(fill), colors::status_bar_style()),
        Span::styled(hints, colors::status_bar_style()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

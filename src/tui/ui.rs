//! Rendering for the control panel
//!
//! Pure drawing: all state lives in `PanelApp`. The drawer is rendered on
//! every frame, open or closed; its area collapses when closed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::panel::PanelState;
use crate::recent::KvStore;

use super::overlay::OverlayController;
use super::panel_app::PanelApp;
use super::theme::current_theme;

/// Render one frame of the control panel.
pub fn render<S: KvStore>(frame: &mut Frame, app: &mut PanelApp<S>) {
    let area = frame.area();
    app.last_frame = area;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    render_recent(frame, columns[0], app);
    render_preview(frame, columns[1], app);
    render_footer(frame, rows[1], app.drawer_open);

    // Drawer last, layered above the panels. Always rendered; the closed
    // state collapses the area instead of skipping the pass.
    let drawer_area = OverlayController::content_area(area, app.drawer_open);
    render_drawer(frame, drawer_area, app);
}

fn render_recent<S: KvStore>(frame: &mut Frame, area: Rect, app: &PanelApp<S>) {
    let theme = current_theme();
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line> = if app.recent_entries.is_empty() {
        vec![Line::from(Span::styled(
            "No recent folders",
            theme.text_secondary_style(),
        ))]
    } else {
        app.recent_entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == app.recent_selected {
                    theme.highlight_style()
                } else {
                    theme.text_style()
                };
                let stamp = entry.last_accessed.format("%m-%d %H:%M").to_string();
                let path_width = inner_width.saturating_sub(stamp.len() + 1);
                Line::from(vec![
                    Span::styled(truncate_to_width(&entry.path, path_width), style),
                    Span::raw(" "),
                    Span::styled(stamp, theme.text_secondary_style()),
                ])
            })
            .collect()
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(" Recent Folders "),
    );
    frame.render_widget(panel, area);
}

fn render_preview<S: KvStore>(frame: &mut Frame, area: Rect, app: &PanelApp<S>) {
    let theme = current_theme();

    let title = if app.preview.expanded() {
        " Preview (full) "
    } else {
        " Preview (summary) "
    };

    let body: Vec<Line> = match app.preview.state() {
        PanelState::Loading => vec![Line::from(Span::styled(
            "Loading preview...",
            theme.text_secondary_style(),
        ))],
        PanelState::Loaded(preview) => preview
            .preview
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), theme.text_style())))
            .collect(),
        // Error deliberately renders the same as Empty
        _ => vec![Line::from(Span::styled(
            "No preview available",
            theme.text_secondary_style(),
        ))],
    };

    let panel = Paragraph::new(body).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(title),
    );
    frame.render_widget(panel, area);
}

fn render_drawer<S: KvStore>(frame: &mut Frame, area: Rect, app: &PanelApp<S>) {
    if area.width == 0 {
        // Off-screen: nothing to paint, but the pass still ran.
        return;
    }

    let theme = current_theme();
    frame.render_widget(Clear, area);

    let inner_width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line> = match app.favorites.state() {
        PanelState::Loading => vec![Line::from(Span::styled(
            "Loading favorites...",
            theme.text_secondary_style(),
        ))],
        PanelState::Loaded(favorites) => favorites
            .iter()
            .enumerate()
            .map(|(i, favorite)| {
                let style = if i == app.drawer_selected {
                    theme.highlight_style()
                } else {
                    theme.text_style()
                };
                Line::from(vec![
                    Span::styled(
                        truncate_to_width(&favorite.label, inner_width.saturating_sub(1)),
                        style,
                    ),
                    Span::raw(" "),
                    Span::styled(
                        truncate_to_width(&favorite.path, inner_width),
                        theme.text_secondary_style(),
                    ),
                ])
            })
            .collect(),
        // Empty and Error share the empty presentation
        _ => vec![Line::from(Span::styled(
            "No favorites configured",
            theme.text_secondary_style(),
        ))],
    };

    let drawer = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Favorites "),
        );
    frame.render_widget(drawer, area);
}

fn render_footer(frame: &mut Frame, area: Rect, drawer_open: bool) {
    let theme = current_theme();
    let hints: &[(&str, &str)] = if drawer_open {
        &[
            ("Esc/click outside", "close"),
            ("j/k", "move"),
            ("Enter", "open folder"),
        ]
    } else {
        &[
            ("f", "favorites"),
            ("e", "expand/collapse"),
            ("r", "refresh"),
            ("x", "clear recent"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(*key, theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(": {}", action),
            theme.text_secondary_style(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Truncate a string to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        let candidate_width = out.width() + unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if candidate_width + 1 > max_width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

//! Sort and view-mode controls row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;
use crate::view::{SortKey, ViewMode};

/// Renders the controls row: one slot per sort key (selected with `1`-`6`)
/// and the grid/list toggle, with the active choices highlighted.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " Sort ",
        Style::default().fg(Color::DarkGray),
    )];

    for (i, key) in SortKey::ALL.iter().enumerate() {
        let style = if *key == app.sort_key {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, key.label()), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled("│ View ", Style::default().fg(Color::DarkGray)));
    for mode in [ViewMode::Grid, ViewMode::List] {
        let style = if mode == app.view_mode {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Title and search bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode};

const TITLE: &str = " Coinwatch ";
const SEARCH_PREFIX: &str = "Search: ";

/// Renders the header line: application title plus the search field.
///
/// While the search field has focus the terminal cursor is placed inside
/// it, so editing looks like any other text input.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let searching = app.mode == Mode::Search;

    let search_span = if app.search.is_empty() && !searching {
        Span::styled(
            "press / to search",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!("{SEARCH_PREFIX}{}", app.search.as_str()),
            if searching {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            },
        )
    };

    let line = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        search_span,
    ]);

    frame.render_widget(Paragraph::new(line), area);

    if searching {
        let offset = TITLE.width() + 1 + SEARCH_PREFIX.width() + app.search.before_cursor().width();
        let x = area.x.saturating_add(offset as u16).min(area.right().saturating_sub(1));
        frame.set_cursor_position((x, area.y));
    }
}

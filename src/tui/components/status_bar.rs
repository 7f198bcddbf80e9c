//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Mode, Screen};

/// Renders the status bar: fetch state and list counts on the left,
/// keybinding help on the right.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state_span = if app.is_loading {
        Span::styled(
            format!(" {} loading ", app.spinner()),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(
            format!(" {}/{} coins ", app.derived.len(), app.coins.len()),
            Style::default().fg(Color::Cyan),
        )
    };

    let help = match (&app.screen, app.mode) {
        (_, Mode::Search) => "↵/esc done │ type to filter",
        (Screen::Market, _) => "q quit │ / search │ 1-6 sort │ v view │ j/k move │ ↵ open",
        (Screen::Detail(_), _) => "esc back │ q quit",
    };

    let spans = vec![
        state_span,
        Span::raw("│"),
        Span::styled(
            format!(" {} ", app.sort_key.label()),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", app.view_mode.label()),
            Style::default().fg(Color::White),
        ),
        Span::raw(format!(
            "{:>width$} ",
            help,
            width = (area.width as usize).saturating_sub(30)
        )),
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}

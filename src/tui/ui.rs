//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::{App, Screen};
use super::screens::{detail, market};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Market => market::render(frame, app),
        Screen::Detail(id) => detail::render(frame, app, id),
    }
}

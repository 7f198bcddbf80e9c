//! Event handling for the TUI.
//!
//! [`update`] is the single reducer over application state: every message
//! (terminal input, tick, fetch result) passes through it, and derivation
//! of the displayed list happens synchronously inside it. Work that must
//! run outside the reducer (spawning fetches) is returned as an
//! [`Action`] for the main loop.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::models::{ChartSeries, CoinDetail, CoinSummary};
use crate::view::SortKey;

use super::app::{App, Mode, Screen};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// Market snapshot fetch succeeded.
    Markets(Vec<CoinSummary>),
    /// Market snapshot fetch failed; the error was already logged.
    MarketsFailed,

    /// Coin detail fetch succeeded.
    Detail(CoinDetail),
    /// Chart fetch succeeded.
    Chart(ChartSeries),
    /// A detail-screen fetch failed; the error was already logged.
    DetailFailed,

    /// Request to quit the application.
    Quit,
}

/// Work the reducer cannot do itself, handled by the main loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Spawn the detail and chart fetches for a coin id.
    OpenCoin(String),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Markets(coins) => {
            app.is_loading = false;
            app.set_coins(coins);
            None
        }
        Message::MarketsFailed => {
            // Degraded-but-running policy: the list stays empty and the
            // user sees the empty state, never the error.
            app.is_loading = false;
            None
        }
        Message::Detail(detail) => {
            app.detail = Some(detail);
            app.detail_loading = false;
            None
        }
        Message::Chart(series) => {
            app.chart = Some(series);
            None
        }
        Message::DetailFailed => {
            app.detail_loading = false;
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.tick = app.tick.wrapping_add(1);
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Search mode captures everything first
    if app.mode == Mode::Search {
        return handle_search_mode(app, key);
    }

    match app.screen {
        Screen::Market => handle_market_keys(app, key),
        Screen::Detail(_) => handle_detail_keys(app, key),
    }
}

/// Handles keys while the search input has focus. Edits re-derive the
/// displayed list immediately, so filtering is live per keystroke.
fn handle_search_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        KeyCode::Char(c) => {
            app.search.insert(c);
            app.refresh_view();
        }
        KeyCode::Backspace => {
            app.search.backspace();
            app.refresh_view();
        }
        KeyCode::Left => app.search.move_left(),
        KeyCode::Right => app.search.move_right(),
        KeyCode::Home => app.search.move_home(),
        KeyCode::End => app.search.move_end(),
        _ => {}
    }
    None
}

/// Handles keys on the market screen.
fn handle_market_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            None
        }
        KeyCode::Char('v') => {
            // Layout switch only; the derived list is untouched.
            app.view_mode.toggle();
            None
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            app.set_sort_key(SortKey::ALL[index]);
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            None
        }
        KeyCode::Esc => {
            if !app.search.is_empty() {
                app.search.clear();
                app.refresh_view();
            }
            None
        }
        KeyCode::Enter => {
            let id = app.selected_coin().map(|coin| coin.id.clone())?;
            app.open_detail(id.clone());
            Some(Action::OpenCoin(id))
        }
        _ => None,
    }
}

/// Handles keys on the detail screen.
fn handle_detail_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
            app.close_detail();
        }
        _ => {}
    }
    None
}

//! Application state for the TUI.

use crate::models::{ChartSeries, CoinDetail, CoinSummary};
use crate::view::{self, SortKey, ViewMode};

use super::input::TextInput;

/// Frames for the loading spinner, advanced once per tick.
const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠦", "⠧", "⠏"];

/// Central application state container.
///
/// The canonical coin list and all UI inputs live here; `derived` is the
/// projection the screens render and is replaced (never edited) by
/// [`refresh_view`](App::refresh_view) whenever one of its inputs changes.
pub struct App {
    // -- Market Data --
    /// Canonical list exactly as fetched. Written once per fetch.
    pub coins: Vec<CoinSummary>,
    /// Filtered/sorted projection of `coins`.
    pub derived: Vec<CoinSummary>,
    /// Whether the initial market fetch is still pending.
    pub is_loading: bool,

    // -- View Inputs --
    /// Search text with cursor.
    pub search: TextInput,
    /// Selected sort key.
    pub sort_key: SortKey,
    /// Grid or list layout. Does not affect `derived`.
    pub view_mode: ViewMode,

    // -- Navigation --
    /// Which screen is showing.
    pub screen: Screen,
    /// Cursor into `derived` on the market screen.
    pub selected: usize,

    // -- Detail Screen --
    /// Detail record for the opened coin, once fetched.
    pub detail: Option<CoinDetail>,
    /// 7-day price history for the opened coin, once fetched.
    pub chart: Option<ChartSeries>,
    /// Whether the detail fetch is still pending.
    pub detail_loading: bool,

    // -- UI State --
    /// Current input mode.
    pub mode: Mode,
    /// Tick counter driving the spinner animation.
    pub tick: usize,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new() -> Self {
        Self {
            coins: Vec::new(),
            derived: Vec::new(),
            is_loading: true,

            search: TextInput::new(),
            sort_key: SortKey::Rank,
            view_mode: ViewMode::Grid,

            screen: Screen::Market,
            selected: 0,

            detail: None,
            chart: None,
            detail_loading: false,

            mode: Mode::Normal,
            tick: 0,
            should_quit: false,
        }
    }

    /// Re-runs the filter/sort derivation and clamps the selection cursor.
    ///
    /// Called whenever the canonical list, search text, or sort key
    /// changes; these are the derivation's only inputs.
    pub fn refresh_view(&mut self) {
        self.derived = view::derive_view(&self.coins, self.search.as_str(), self.sort_key);
        if self.selected >= self.derived.len() {
            self.selected = self.derived.len().saturating_sub(1);
        }
    }

    /// Replaces the canonical list with a fresh snapshot.
    pub fn set_coins(&mut self, coins: Vec<CoinSummary>) {
        self.coins = coins;
        self.refresh_view();
    }

    /// Switches the sort key, re-deriving only on an actual change.
    pub fn set_sort_key(&mut self, key: SortKey) {
        if self.sort_key != key {
            self.sort_key = key;
            self.refresh_view();
        }
    }

    /// The coin under the selection cursor, if any.
    pub fn selected_coin(&self) -> Option<&CoinSummary> {
        self.derived.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.derived.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Switches to the detail screen for `id`, clearing stale detail state.
    pub fn open_detail(&mut self, id: String) {
        self.screen = Screen::Detail(id);
        self.detail = None;
        self.chart = None;
        self.detail_loading = true;
    }

    /// Returns to the market screen, discarding detail state.
    pub fn close_detail(&mut self) {
        self.screen = Screen::Market;
        self.detail = None;
        self.chart = None;
        self.detail_loading = false;
    }

    /// Current spinner frame.
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Screens in the application, the TUI's two "routes".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// The coin list.
    Market,
    /// Detail view for one coin id.
    Detail(String),
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Keystrokes edit the search text.
    Search,
}

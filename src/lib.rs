//! Terminal dashboard for cryptocurrency market data.
//!
//! Fetches coin listings, per-coin detail, and 7-day price history from a
//! CoinGecko-compatible REST API and renders them in a ratatui interface
//! with client-side search, sorting, and grid/list view modes.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod tui;
pub mod view;

pub use error::{CoinwatchError, Result};

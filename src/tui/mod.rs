//! Terminal user interface for the market dashboard.
//!
//! A single mpsc channel fans terminal input, tick timer events, and
//! fetch results into one reducer; rendering reads the resulting
//! application state and nothing else.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod screens;
pub mod terminal;
pub mod ui;

pub use app::{App, Mode, Screen};
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;

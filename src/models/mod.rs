//! Typed models for market data API responses.
//!
//! Every JSON payload that crosses the API boundary is parsed into one of
//! these schemas; the rest of the crate never touches untyped values.

pub mod chart;
pub mod detail;
pub mod summary;

pub use chart::{ChartSeries, PricePoint};
pub use detail::{CoinDetail, MarketData};
pub use summary::CoinSummary;

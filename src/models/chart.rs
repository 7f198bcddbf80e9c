//! Historical chart models for the `/coins/{id}/market_chart` endpoint.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

/// One `[timestamp_ms, price]` pair as returned on the wire.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PricePoint(i64, Decimal);

impl PricePoint {
    pub fn new(timestamp_ms: i64, price: Decimal) -> Self {
        Self(timestamp_ms, price)
    }

    /// Sample time in milliseconds since the Unix epoch.
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn price(&self) -> Decimal {
        self.1
    }
}

/// Price history over a trailing window, ordered oldest first.
///
/// The endpoint also returns `market_caps` and `total_volumes` series;
/// only `prices` is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub prices: Vec<PricePoint>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Lowest and highest price in the series.
    pub fn price_range(&self) -> Option<(Decimal, Decimal)> {
        let first = self.prices.first()?.price();
        Some(self.prices.iter().fold((first, first), |(min, max), p| {
            (min.min(p.price()), max.max(p.price()))
        }))
    }

    /// First and last sample times in milliseconds.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        match (self.prices.first(), self.prices.last()) {
            (Some(first), Some(last)) => Some((first.timestamp_ms(), last.timestamp_ms())),
            _ => None,
        }
    }

    /// The series as `(x, y)` pairs for chart rendering.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.prices
            .iter()
            .map(|p| {
                (
                    p.timestamp_ms() as f64,
                    p.price().to_f64().unwrap_or_default(),
                )
            })
            .collect()
    }
}

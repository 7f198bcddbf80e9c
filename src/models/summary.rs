//! Coin listing models for the `/coins/markets` endpoint.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One listed asset from a market snapshot.
///
/// The endpoint returns more fields than these; unknown fields are
/// ignored. `market_cap_rank` and `price_change_percentage_24h` are
/// nullable in real responses, so they stay optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinSummary {
    /// Stable unique identifier, used verbatim in detail endpoint paths.
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Logo URL.
    #[serde(default)]
    pub image: String,
    /// Latest trade price in USD.
    pub current_price: Decimal,
    #[serde(default)]
    pub market_cap: Decimal,
    #[serde(default)]
    pub total_volume: Decimal,
    /// Position when ordered by market cap, unique within a snapshot.
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    /// Signed percent change over the trailing 24 hours.
    #[serde(default)]
    pub price_change_percentage_24h: Option<Decimal>,
}

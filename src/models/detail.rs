//! Per-coin detail models for the `/coins/{id}` endpoint.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Full detail record for a single coin.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub image: ImageSet,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    pub market_data: MarketData,
}

/// Localized description block. Only the English text is requested
/// (`localization=false`), and it may contain inline HTML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub en: String,
}

/// Logo URLs at different resolutions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub large: String,
}

/// Market figures for one coin, keyed by quote currency where the API
/// provides per-currency maps.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, Decimal>,
    #[serde(default)]
    pub market_cap: HashMap<String, Decimal>,
    #[serde(default)]
    pub total_volume: HashMap<String, Decimal>,
    #[serde(default)]
    pub high_24h: HashMap<String, Decimal>,
    #[serde(default)]
    pub low_24h: HashMap<String, Decimal>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<Decimal>,
    #[serde(default)]
    pub circulating_supply: Option<Decimal>,
    #[serde(default)]
    pub total_supply: Option<Decimal>,
}

impl MarketData {
    pub fn price_usd(&self) -> Option<Decimal> {
        self.current_price.get("usd").copied()
    }

    pub fn market_cap_usd(&self) -> Option<Decimal> {
        self.market_cap.get("usd").copied()
    }

    pub fn volume_usd(&self) -> Option<Decimal> {
        self.total_volume.get("usd").copied()
    }

    pub fn high_24h_usd(&self) -> Option<Decimal> {
        self.high_24h.get("usd").copied()
    }

    pub fn low_24h_usd(&self) -> Option<Decimal> {
        self.low_24h.get("usd").copied()
    }
}

//! HTTP client for the market data API.
//!
//! Three read-only operations, each a single GET with no retry, no
//! caching, and no timeout override. Non-success statuses surface as
//! [`CoinwatchError::Http`](crate::CoinwatchError::Http); responses are
//! parsed into typed models at this boundary.

use tracing::debug;

use crate::Result;
use crate::config::AppConfig;
use crate::models::{ChartSeries, CoinDetail, CoinSummary};

/// Client for a CoinGecko-compatible REST API.
pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
}

impl MarketClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.market.base_url.clone())
    }

    /// Builds a client against an explicit base URL (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetches the top 100 coins by market cap, page 1, without sparkline
    /// data.
    pub async fn fetch_cryptos(&self) -> Result<Vec<CoinSummary>> {
        let url = format!(
            "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=100&page=1&sparkline=false",
            self.base_url
        );

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let coins: Vec<CoinSummary> = response.json().await?;

        debug!(count = coins.len(), "fetched market snapshot");
        Ok(coins)
    }

    /// Fetches the full detail record for one coin id.
    pub async fn fetch_coin_data(&self, id: &str) -> Result<CoinDetail> {
        let url = format!(
            "{}/coins/{id}?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false&sparkline=false",
            self.base_url
        );

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let detail: CoinDetail = response.json().await?;

        debug!(coin = %detail.id, "fetched coin detail");
        Ok(detail)
    }

    /// Fetches 7-day USD price history for one coin id.
    pub async fn fetch_chart_data(&self, id: &str) -> Result<ChartSeries> {
        let url = format!(
            "{}/coins/{id}/market_chart?vs_currency=usd&days=7",
            self.base_url
        );

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let series: ChartSeries = response.json().await?;

        debug!(coin = %id, samples = series.prices.len(), "fetched chart data");
        Ok(series)
    }
}

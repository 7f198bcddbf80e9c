//! Shared test helpers.

#![allow(dead_code)]

use coinwatch::models::CoinSummary;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builds a CoinSummary with the fields the derivation logic reads.
pub fn coin(
    id: &str,
    name: &str,
    symbol: &str,
    rank: Option<u32>,
    price: Decimal,
    market_cap: Decimal,
    change: Option<Decimal>,
) -> CoinSummary {
    CoinSummary {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        image: String::new(),
        current_price: price,
        market_cap,
        total_volume: market_cap / Decimal::from(20),
        market_cap_rank: rank,
        price_change_percentage_24h: change,
    }
}

/// A small canonical list covering ranks, sub-cent prices, and absent
/// rank/change fields.
pub fn sample_market() -> Vec<CoinSummary> {
    vec![
        coin(
            "bitcoin",
            "Bitcoin",
            "btc",
            Some(1),
            dec!(50000),
            dec!(1320000000000),
            Some(dec!(2.31)),
        ),
        coin(
            "ethereum",
            "Ethereum",
            "eth",
            Some(2),
            dec!(3000),
            dec!(423000000000),
            Some(dec!(-1.04)),
        ),
        coin(
            "dogecoin",
            "Dogecoin",
            "doge",
            Some(3),
            dec!(0.08),
            dec!(11000000000),
            Some(dec!(-5.2)),
        ),
        coin(
            "shiba-inu",
            "Shiba Inu",
            "shib",
            None,
            dec!(0.00001234),
            dec!(14500000000),
            None,
        ),
    ]
}

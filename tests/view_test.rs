//! Filter and sort derivation tests.

mod common;

use coinwatch::view::{SortKey, ViewMode, derive_view};
use rust_decimal_macros::dec;

use common::{coin, sample_market};

fn ids(coins: &[coinwatch::models::CoinSummary]) -> Vec<&str> {
    coins.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn empty_query_preserves_every_coin() {
    let market = sample_market();
    for key in SortKey::ALL {
        let derived = derive_view(&market, "", key);
        assert_eq!(derived.len(), market.len());
    }
}

#[test]
fn filter_matches_name_or_symbol_case_insensitively() {
    let market = sample_market();

    let derived = derive_view(&market, "ETH", SortKey::Rank);
    assert_eq!(ids(&derived), vec!["ethereum"]);

    // "SHIB" matches through the symbol, "shiba" through the name.
    let by_symbol = derive_view(&market, "SHIB", SortKey::Rank);
    assert_eq!(ids(&by_symbol), vec!["shiba-inu"]);
    let by_name = derive_view(&market, "shiba", SortKey::Rank);
    assert_eq!(ids(&by_name), vec!["shiba-inu"]);

    for survivor in derive_view(&market, "in", SortKey::Rank) {
        let name = survivor.name.to_lowercase();
        let symbol = survivor.symbol.to_lowercase();
        assert!(name.contains("in") || symbol.contains("in"));
    }
}

#[test]
fn unmatched_query_yields_empty_view() {
    let derived = derive_view(&sample_market(), "monero", SortKey::Rank);
    assert!(derived.is_empty());
}

#[test]
fn empty_list_yields_empty_view() {
    let derived = derive_view(&[], "btc", SortKey::Price);
    assert!(derived.is_empty());
}

#[test]
fn rank_sort_orders_ascending_with_absent_rank_last() {
    let derived = derive_view(&sample_market(), "", SortKey::Rank);
    assert_eq!(
        ids(&derived),
        vec!["bitcoin", "ethereum", "dogecoin", "shiba-inu"]
    );
}

#[test]
fn name_sort_is_case_insensitive_ascending() {
    let market = vec![
        coin("b", "bitcoin", "b", None, dec!(1), dec!(1), None),
        coin("a", "Aave", "a", None, dec!(1), dec!(1), None),
        coin("z", "ZCash", "z", None, dec!(1), dec!(1), None),
    ];
    let derived = derive_view(&market, "", SortKey::Name);
    assert_eq!(ids(&derived), vec!["a", "b", "z"]);
}

#[test]
fn price_sorts_are_monotonic() {
    let market = sample_market();

    let ascending = derive_view(&market, "", SortKey::Price);
    for pair in ascending.windows(2) {
        assert!(pair[0].current_price <= pair[1].current_price);
    }

    let descending = derive_view(&market, "", SortKey::PriceDesc);
    for pair in descending.windows(2) {
        assert!(pair[0].current_price >= pair[1].current_price);
    }
}

#[test]
fn change_sort_orders_ascending_with_absent_change_last() {
    let derived = derive_view(&sample_market(), "", SortKey::Change);
    assert_eq!(
        ids(&derived),
        vec!["dogecoin", "ethereum", "bitcoin", "shiba-inu"]
    );
}

#[test]
fn market_cap_sort_orders_ascending() {
    let derived = derive_view(&sample_market(), "", SortKey::MarketCap);
    let caps: Vec<_> = derived.iter().map(|c| c.market_cap).collect();
    let mut sorted = caps.clone();
    sorted.sort();
    assert_eq!(caps, sorted);
}

#[test]
fn derivation_is_idempotent() {
    let market = sample_market();
    for key in SortKey::ALL {
        let once = derive_view(&market, "o", key);
        let twice = derive_view(&once, "o", key);
        assert_eq!(ids(&once), ids(&twice));
    }
}

#[test]
fn equal_sort_keys_keep_canonical_order() {
    let market = vec![
        coin("first", "First", "aaa", None, dec!(10), dec!(1), None),
        coin("second", "Second", "bbb", None, dec!(10), dec!(1), None),
        coin("third", "Third", "ccc", None, dec!(10), dec!(1), None),
    ];
    let derived = derive_view(&market, "", SortKey::Price);
    assert_eq!(ids(&derived), vec!["first", "second", "third"]);
}

#[test]
fn search_and_rank_select_single_coin() {
    let market = vec![
        coin(
            "btc",
            "Bitcoin",
            "btc",
            Some(1),
            dec!(50000),
            dec!(1000),
            None,
        ),
        coin(
            "eth",
            "Ethereum",
            "eth",
            Some(2),
            dec!(3000),
            dec!(500),
            None,
        ),
    ];
    let derived = derive_view(&market, "eth", SortKey::Rank);
    assert_eq!(ids(&derived), vec!["eth"]);
}

#[test]
fn view_mode_toggles_between_layouts() {
    let mut mode = ViewMode::Grid;
    mode.toggle();
    assert_eq!(mode, ViewMode::List);
    mode.toggle();
    assert_eq!(mode, ViewMode::Grid);
}

//! Derivation of the displayed coin list.
//!
//! [`derive_view`] is the only path from the canonical list to what the
//! screen shows: a filtered subset matching the search query, ordered by
//! the selected sort key. It never mutates its input; callers replace the
//! previous projection wholesale.

use std::cmp::Ordering;

use crate::models::CoinSummary;

/// Sort keys selectable from the controls row, in keyboard order (`1`-`6`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending market cap rank. The initial state.
    #[default]
    Rank,
    /// Case-insensitive name, ascending.
    Name,
    /// Price, low to high.
    Price,
    /// Price, high to low.
    PriceDesc,
    /// 24h change, ascending.
    Change,
    /// Market cap, ascending.
    MarketCap,
}

impl SortKey {
    /// All keys in keyboard-selection order.
    pub const ALL: [SortKey; 6] = [
        SortKey::Rank,
        SortKey::Name,
        SortKey::Price,
        SortKey::PriceDesc,
        SortKey::Change,
        SortKey::MarketCap,
    ];

    /// Returns the display label for the controls row.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rank => "Rank",
            SortKey::Name => "Name",
            SortKey::Price => "Price ↑",
            SortKey::PriceDesc => "Price ↓",
            SortKey::Change => "24h",
            SortKey::MarketCap => "MCap",
        }
    }
}

/// Layout used for the market screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Cards in a multi-column grid. The initial state.
    #[default]
    Grid,
    /// One row per coin in a table.
    List,
}

impl ViewMode {
    /// Toggles between layouts.
    pub fn toggle(&mut self) {
        *self = match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        };
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}

/// Produces the filtered, ordered projection of `list` for display.
///
/// A record survives the filter iff its lowercased name or symbol contains
/// the lowercased query as a substring; the empty query keeps everything.
/// The sort is stable, so records tied on the sort key keep the canonical
/// order relative to each other. Records missing the sort key's field
/// (rank, 24h change) sort after those that have it.
pub fn derive_view(list: &[CoinSummary], query: &str, sort: SortKey) -> Vec<CoinSummary> {
    let needle = query.to_lowercase();

    let mut derived: Vec<CoinSummary> = list
        .iter()
        .filter(|coin| {
            needle.is_empty()
                || coin.name.to_lowercase().contains(&needle)
                || coin.symbol.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    derived.sort_by(|a, b| match sort {
        SortKey::Rank => cmp_present_first(a.market_cap_rank, b.market_cap_rank),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.current_price.cmp(&b.current_price),
        SortKey::PriceDesc => b.current_price.cmp(&a.current_price),
        SortKey::Change => cmp_present_first(
            a.price_change_percentage_24h,
            b.price_change_percentage_24h,
        ),
        SortKey::MarketCap => a.market_cap.cmp(&b.market_cap),
    });

    derived
}

/// Orders `Some` values ascending among themselves and before any `None`.
fn cmp_present_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

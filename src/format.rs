//! Display formatting for monetary values.
//!
//! All functions are pure and total over [`Decimal`], which has no NaN or
//! infinity representation. Negative inputs keep their sign in front of
//! the currency symbol.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Formats a USD price for display.
///
/// Prices below one cent in magnitude render with exactly 8 fractional
/// digits and no currency symbol, so sub-cent coins stay readable.
/// Everything else renders as `$` plus a thousands-grouped amount with
/// exactly 2 fractional digits.
pub fn format_price(price: Decimal) -> String {
    let cent = Decimal::new(1, 2);
    if price.abs() < cent {
        return format!("{price:.8}");
    }

    let amount = format!("{:.2}", price.abs());
    // Always "int.frac" with two fractional digits at this point.
    let (int_part, frac_part) = amount.split_once('.').unwrap_or((amount.as_str(), "00"));
    let sign = if price.is_sign_negative() { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Formats a market cap (or volume) scaled by magnitude.
///
/// Values of at least 1e12 / 1e9 / 1e6 are scaled down and suffixed with
/// `T` / `B` / `M`, each with exactly 2 fractional digits. Smaller values
/// render as a thousands-grouped integer with no suffix.
pub fn format_market_cap(value: Decimal) -> String {
    let trillion = Decimal::from(1_000_000_000_000u64);
    let billion = Decimal::from(1_000_000_000u64);
    let million = Decimal::from(1_000_000u64);

    if value >= trillion {
        format!("{:.2}T", value / trillion)
    } else if value >= billion {
        format!("{:.2}B", value / billion)
    } else if value >= million {
        format!("{:.2}M", value / million)
    } else {
        let units = value.round_dp(0).to_i64().unwrap_or_default();
        group_thousands(&units.to_string())
    }
}

/// Formats a 24h percent change with a direction arrow and the magnitude
/// to 2 fractional digits, e.g. `▲ 2.31%`.
pub fn format_change(pct: Decimal) -> String {
    let arrow = if pct.is_sign_negative() { "▼" } else { "▲" };
    format!("{arrow} {:.2}%", pct.abs())
}

/// Inserts `,` separators every three digits, counting from the right.
/// Expects an optionally-signed integer string.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sub_cent_price_uses_eight_fraction_digits() {
        assert_eq!(format_price(dec!(0.00001234)), "0.00001234");
        assert_eq!(format_price(dec!(0.009)), "0.00900000");
        assert_eq!(format_price(Decimal::ZERO), "0.00000000");
    }

    #[test]
    fn price_renders_as_grouped_currency() {
        assert_eq!(format_price(dec!(1234.5)), "$1,234.50");
        assert_eq!(format_price(dec!(0.01)), "$0.01");
        assert_eq!(format_price(dec!(50000)), "$50,000.00");
        assert_eq!(format_price(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn negative_price_keeps_sign_in_front() {
        assert_eq!(format_price(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn market_cap_scales_by_magnitude() {
        assert_eq!(format_market_cap(dec!(2500000000000)), "2.50T");
        assert_eq!(format_market_cap(dec!(850000000)), "850.00M");
        assert_eq!(format_market_cap(dec!(1300000000)), "1.30B");
        assert_eq!(format_market_cap(dec!(500)), "500");
    }

    #[test]
    fn market_cap_below_a_million_is_grouped() {
        assert_eq!(format_market_cap(dec!(999999)), "999,999");
        assert_eq!(format_market_cap(dec!(12500)), "12,500");
    }

    #[test]
    fn change_carries_arrow_and_magnitude() {
        assert_eq!(format_change(dec!(2.314)), "▲ 2.31%");
        assert_eq!(format_change(dec!(-0.5)), "▼ 0.50%");
        assert_eq!(format_change(Decimal::ZERO), "▲ 0.00%");
    }
}

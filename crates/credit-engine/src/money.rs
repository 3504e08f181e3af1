//! Decimal helpers for dollar amounts
//!
//! All currency math runs on [`Decimal`] so that figures like
//! `50000 × 0.20 × 0.70` come out exact.

use rust_decimal::prelude::*;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Round to the nearest hundred dollars, halves away from zero
pub fn round_to_hundred(value: Decimal) -> Decimal {
    let hundreds =
        (value / HUNDRED).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (hundreds * HUNDRED).normalize()
}

/// `ceil(count × fraction)`, the number of hires assumed to qualify
pub fn qualified_count(count: u32, fraction: Decimal) -> Decimal {
    (Decimal::from(count) * fraction).ceil()
}

/// Convert a qualified-hire count back to an integer for reporting
///
/// Fractions are validated to lie in `[0, 1]`, so the count never exceeds
/// the number of hires it was derived from.
pub fn count_to_u32(count: Decimal, upper_bound: u32) -> u32 {
    count.to_u32().unwrap_or(upper_bound).min(upper_bound)
}

/// Format as whole US dollars with thousands separators (`$11,200`)
pub fn format_currency(value: Decimal) -> String {
    let whole = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().trunc().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

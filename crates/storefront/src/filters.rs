//! Custom Askama template filters and price helpers.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Format an amount in VND with dot thousands separators.
///
/// VND has no minor unit, so the amount is already in the display unit.
#[must_use]
pub fn format_vnd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{grouped}₫")
    } else {
        format!("{grouped}₫")
    }
}

/// Price after applying the discount percent, rounded down.
#[must_use]
pub fn discounted_price(price: i64, percent: u8) -> i64 {
    let remaining = i64::from(100u8.saturating_sub(percent));
    price * remaining / 100
}

/// Format a price in VND.
///
/// Usage in templates: `{{ product.price|vnd }}`
#[askama::filter_fn]
pub fn vnd(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    match raw.parse::<i64>() {
        Ok(amount) => Ok(format_vnd(amount)),
        Err(_) => Ok(raw),
    }
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_default_price() {
        assert_eq!(format_vnd(4_990_000), "4.990.000₫");
    }

    #[test]
    fn formats_small_and_zero_amounts() {
        assert_eq!(format_vnd(0), "0₫");
        assert_eq!(format_vnd(999), "999₫");
        assert_eq!(format_vnd(1_000), "1.000₫");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_vnd(-4_990_000), "-4.990.000₫");
    }

    #[test]
    fn discount_math_rounds_down() {
        assert_eq!(discounted_price(4_990_000, 17), 4_141_700);
        assert_eq!(discounted_price(4_990_000, 0), 4_990_000);
        assert_eq!(discounted_price(999, 33), 669);
    }
}

//! Rounding and formatting helpers for monetary amounts.
//!
//! All money in the engine is [`Decimal`]. Calculators keep rates
//! unrounded and call [`round_money`] once on each amount they return.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to cents, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use kenya_payroll::money::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("731.245").unwrap()), Decimal::from_str("731.25").unwrap());
/// assert_eq!(round_money(Decimal::from_str("-0.005").unwrap()), Decimal::from_str("-0.01").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal places, e.g. `26193.75`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rounded.to_string()
}

/// Formats an amount with thousands separators, e.g. `26,193.75`.
///
/// # Examples
///
/// ```
/// use kenya_payroll::money::format_grouped;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_grouped(Decimal::new(2619375, 2)), "26,193.75");
/// assert_eq!(format_grouped(Decimal::new(-1234567, 0)), "-1,234,567.00");
/// ```
pub fn format_grouped(amount: Decimal) -> String {
    let plain = format_amount(amount);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{fraction}")
}

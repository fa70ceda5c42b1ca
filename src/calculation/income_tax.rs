//! Progressive income tax (PAYE) calculation functionality.

use rust_decimal::Decimal;

use crate::config::StatutoryRateSnapshot;
use crate::models::TaxComputation;
use crate::money::round_money;

/// Tax on chargeable pay from the band walk, before personal relief.
///
/// Each band taxes the part of the remaining chargeable pay that fits
/// within its width (its bound minus the previous bound). The walk stops
/// once chargeable pay is exhausted. Zero or negative chargeable pay
/// yields zero.
pub fn tax_before_relief(chargeable_pay: Decimal, rates: &StatutoryRateSnapshot) -> Decimal {
    if chargeable_pay <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut remaining = chargeable_pay;
    let mut previous_bound = Decimal::ZERO;

    for band in &rates.tax_bands {
        let taxable = match band.upper_bound {
            Some(bound) => remaining.min(bound - previous_bound),
            None => remaining,
        };
        tax += taxable * band.rate;
        remaining -= taxable;
        if let Some(bound) = band.upper_bound {
            previous_bound = bound;
        }
        if remaining <= Decimal::ZERO {
            break;
        }
    }

    round_money(tax)
}

/// Calculates income tax payable on chargeable pay.
///
/// The personal relief is subtracted from the band-walk tax and the result
/// is floored at zero: relief is never refunded.
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::calculate_income_tax;
/// use kenya_payroll::config::RateTable;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RateTable::kenya();
/// let rates = table.rates_for(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()).unwrap();
///
/// let tax = calculate_income_tax(Decimal::from(26925), rates);
/// assert_eq!(tax.tax_before_relief, Decimal::from_str("3131.25").unwrap());
/// assert_eq!(tax.tax_payable, Decimal::from_str("731.25").unwrap());
/// ```
pub fn calculate_income_tax(chargeable_pay: Decimal, rates: &StatutoryRateSnapshot) -> TaxComputation {
    let before_relief = tax_before_relief(chargeable_pay, rates);
    let tax_payable = (before_relief - rates.personal_relief).max(Decimal::ZERO);

    TaxComputation {
        chargeable_pay,
        tax_before_relief: before_relief,
        personal_relief: rates.personal_relief,
        tax_payable,
    }
}

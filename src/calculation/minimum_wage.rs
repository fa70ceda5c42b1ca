//! Minimum wage validation.
//!
//! The check is advisory: a shortfall produces a warning for the payslip
//! and never changes any amount.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{HolidayCalendar, StatutoryRateSnapshot};
use crate::error::EngineResult;
use crate::models::{Contract, ContractType};
use crate::money::format_grouped;

use super::calendar::{DEFAULT_WEEKLY_HOURS, expected_hours, period_label};

/// The outcome of a minimum wage check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumWageCheck {
    /// True if pay meets the minimum.
    pub is_valid: bool,
    /// A human-readable explanation when it does not.
    pub warning: Option<String>,
}

impl MinimumWageCheck {
    fn valid() -> Self {
        Self {
            is_valid: true,
            warning: None,
        }
    }

    fn shortfall(warning: String) -> Self {
        Self {
            is_valid: false,
            warning: Some(warning),
        }
    }
}

/// Checks base pay against the statutory minimum wage.
///
/// - Prorated minimum-wage contracts always pass.
/// - Hourly contracts compare base pay / hours worked with the monthly
///   minimum divided by the month's expected hours at the contract's
///   weekly hours (45 when unstated). Zero hours worked passes.
/// - Fixed monthly contracts compare base pay with the monthly minimum.
///
/// # Arguments
///
/// * `base_pay` - Base pay after any leave proration
/// * `contract` - The employee's contract
/// * `hours_worked` - Normal hours worked in the period
/// * `payroll_date` - The payroll date
/// * `rates` - The rates in force on the payroll date
/// * `calendar` - The public holiday calendar
pub fn validate_minimum_wage(
    base_pay: Decimal,
    contract: &Contract,
    hours_worked: Decimal,
    payroll_date: NaiveDate,
    rates: &StatutoryRateSnapshot,
    calendar: &HolidayCalendar,
) -> EngineResult<MinimumWageCheck> {
    let minimum = rates.minimum_monthly_wage;

    match contract.contract_type {
        ContractType::ProratedMinimumWage => Ok(MinimumWageCheck::valid()),
        ContractType::Hourly => {
            if hours_worked <= Decimal::ZERO {
                return Ok(MinimumWageCheck::valid());
            }

            let weekly_hours = contract
                .weekly_hours
                .filter(|h| *h > 0)
                .unwrap_or(DEFAULT_WEEKLY_HOURS);
            let expected = expected_hours(
                calendar,
                payroll_date.year(),
                payroll_date.month(),
                Decimal::from(weekly_hours),
            )?;
            if expected <= Decimal::ZERO {
                return Ok(MinimumWageCheck::valid());
            }

            let hourly_minimum = minimum / expected;
            let effective_hourly = base_pay / hours_worked;

            if effective_hourly < hourly_minimum {
                Ok(MinimumWageCheck::shortfall(format!(
                    "Effective hourly rate KES {} is below minimum KES {}/hr (based on {} expected hours in {}). Base pay KES {} for {} hours.",
                    format_grouped(effective_hourly),
                    format_grouped(hourly_minimum),
                    expected.round(),
                    period_label(payroll_date),
                    format_grouped(base_pay),
                    hours_worked.round().normalize(),
                )))
            } else {
                Ok(MinimumWageCheck::valid())
            }
        }
        ContractType::FixedMonthly => {
            if base_pay < minimum {
                Ok(MinimumWageCheck::shortfall(format!(
                    "Base pay KES {} is below minimum wage KES {}. Is this employee part-time?",
                    format_grouped(base_pay),
                    format_grouped(minimum),
                )))
            } else {
                Ok(MinimumWageCheck::valid())
            }
        }
    }
}

//! Leave proration for fixed monthly contracts.

use rust_decimal::Decimal;

use crate::models::{GrossBreakdown, LeaveAllocation};
use crate::money::round_money;

/// Working days per month assumed when deriving a daily rate.
pub const STANDARD_WORKING_DAYS_PER_MONTH: u32 = 22;

/// The share of a day's pay withheld for a half-pay sick day.
pub const HALF_PAY_DEDUCTION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Reduces a fixed monthly gross for half-pay sick days and unpaid days.
///
/// The daily rate is base pay / 22. Each half-pay day withholds half a
/// day, each unpaid day a full day; the adjusted base never goes below
/// zero. A cash housing allowance is scaled by the same ratio as the base.
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::apply_leave_proration;
/// use kenya_payroll::models::{GrossBreakdown, LeaveAllocation, LeaveBalance};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = GrossBreakdown {
///     base_pay: Decimal::from(30000),
///     total_gross: Decimal::from(30000),
///     ..Default::default()
/// };
/// let leave = LeaveAllocation {
///     sick_full_pay_used: 0,
///     sick_half_pay_used: 3,
///     annual_leave_used: 0,
///     unpaid_days: 3,
///     updated_balance: LeaveBalance {
///         employee_id: "1".to_string(),
///         sick_full_pay: 0,
///         sick_half_pay: 4,
///         annual_leave: 0,
///         as_of_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     },
/// };
///
/// let adjusted = apply_leave_proration(&gross, &leave);
/// assert_eq!(adjusted.base_pay, Decimal::from_str("23863.64").unwrap());
/// ```
pub fn apply_leave_proration(gross: &GrossBreakdown, leave: &LeaveAllocation) -> GrossBreakdown {
    if leave.sick_half_pay_used == 0 && leave.unpaid_days == 0 {
        return gross.clone();
    }
    if gross.base_pay <= Decimal::ZERO {
        return gross.clone();
    }

    let daily_rate = gross.base_pay / Decimal::from(STANDARD_WORKING_DAYS_PER_MONTH);
    let half_pay_deduction =
        daily_rate * HALF_PAY_DEDUCTION * Decimal::from(leave.sick_half_pay_used);
    let unpaid_deduction = daily_rate * Decimal::from(leave.unpaid_days);
    let adjusted_base = (gross.base_pay - half_pay_deduction - unpaid_deduction).max(Decimal::ZERO);

    let ratio = adjusted_base / gross.base_pay;
    let base_pay = round_money(adjusted_base);
    let housing_allowance = round_money(gross.housing_allowance * ratio);

    GrossBreakdown {
        base_pay,
        housing_allowance,
        total_gross: base_pay + gross.overtime_1_5 + gross.overtime_2_0 + housing_allowance,
        ..gross.clone()
    }
}

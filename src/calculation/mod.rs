//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculators the engine chains together:
//! working-day counts, leave allocation, gross pay and leave proration,
//! the housing benefit, statutory deductions, income tax, and the
//! minimum wage check.

mod calendar;
mod deductions;
mod gross_pay;
mod housing_benefit;
mod income_tax;
mod leave_allocation;
mod minimum_wage;
mod proration;

pub use calendar::{
    DEFAULT_WEEKLY_HOURS, WORKING_DAYS_PER_WEEK, expected_hours, month_bounds, period_label,
    working_days,
};
pub use deductions::calculate_deductions;
pub use gross_pay::{
    DivisorFallback, EarnedPay, GrossPayResult, HOUSING_ALLOWANCE_RATE, MAX_EARNED_PAY,
    OVERTIME_1_5_MULTIPLIER, OVERTIME_2_0_MULTIPLIER, PRORATION_WEEKS_PER_MONTH,
    apply_housing_treatment, calculate_gross_pay, resolve_hourly_divisor, statutory_divisor,
};
pub use housing_benefit::calculate_housing_benefit;
pub use income_tax::{calculate_income_tax, tax_before_relief};
pub use leave_allocation::allocate_leave;
pub use minimum_wage::{MinimumWageCheck, validate_minimum_wage};
pub use proration::{HALF_PAY_DEDUCTION, STANDARD_WORKING_DAYS_PER_MONTH, apply_leave_proration};

//! Working-day and expected-hour counts for a payroll month.
//!
//! These figures anchor every hourly conversion: the calendar-derived
//! hourly divisor and the minimum-wage hourly baseline both divide by
//! [`expected_hours`].

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::HolidayCalendar;
use crate::error::{EngineError, EngineResult};

/// Contracted weekly hours assumed when a contract does not state them.
pub const DEFAULT_WEEKLY_HOURS: u32 = 45;

/// Working days in a standard week.
pub const WORKING_DAYS_PER_WEEK: u32 = 5;

/// Returns the first and last day of a payroll month.
///
/// # Returns
///
/// Returns `InvalidPeriod` if `month` is not 1-12.
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::InvalidPeriod { year, month })?;
    let last = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(EngineError::InvalidPeriod { year, month })?;
    Ok((first, last))
}

/// Counts the weekdays in a month that are not public holidays.
///
/// # Arguments
///
/// * `calendar` - The public holiday calendar
/// * `year` - The payroll year
/// * `month` - The payroll month (1-12)
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::working_days;
/// use kenya_payroll::config::HolidayCalendar;
///
/// let calendar = HolidayCalendar::kenya();
/// assert_eq!(working_days(&calendar, 2026, 2).unwrap(), 20);
/// // Good Friday and Easter Monday fall in April 2026.
/// assert_eq!(working_days(&calendar, 2026, 4).unwrap(), 20);
/// ```
pub fn working_days(calendar: &HolidayCalendar, year: i32, month: u32) -> EngineResult<u32> {
    let (first, last) = month_bounds(year, month)?;

    if !calendar.covers_year(year) {
        warn!(
            year,
            "No floating holidays known for year; counting fixed holidays only"
        );
    }
    let holidays = calendar.holidays_in(year);

    let count = first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .filter(|d| !holidays.contains(d))
        .count();

    Ok(count as u32)
}

/// Expected working hours in a month: working days x (weekly hours / 5).
///
/// The result is exact; it is never rounded.
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::expected_hours;
/// use kenya_payroll::config::HolidayCalendar;
/// use rust_decimal::Decimal;
///
/// let calendar = HolidayCalendar::kenya();
/// let hours = expected_hours(&calendar, 2026, 2, Decimal::from(45)).unwrap();
/// assert_eq!(hours, Decimal::from(180));
/// ```
pub fn expected_hours(
    calendar: &HolidayCalendar,
    year: i32,
    month: u32,
    weekly_hours: Decimal,
) -> EngineResult<Decimal> {
    let days = working_days(calendar, year, month)?;
    Ok(Decimal::from(days) * weekly_hours / Decimal::from(WORKING_DAYS_PER_WEEK))
}

/// Human-readable period label for a payroll date, e.g. "February 2026".
pub fn period_label(payroll_date: NaiveDate) -> String {
    payroll_date.format("%B %Y").to_string()
}

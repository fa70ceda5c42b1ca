//! Attendance model: one record per employee per calendar day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day of an employee's timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The calendar day this record covers.
    pub date: NaiveDate,
    /// Hours worked at the normal rate.
    pub hours_normal: Decimal,
    /// Hours worked at 1.5x overtime.
    #[serde(default)]
    pub hours_ot_1_5: Decimal,
    /// Hours worked at 2.0x overtime.
    #[serde(default)]
    pub hours_ot_2_0: Decimal,
    /// True if the employee did not work this day.
    #[serde(default)]
    pub absent: bool,
    /// True if the absence was due to sickness. Ignored when `absent` is false.
    #[serde(default)]
    pub sick: bool,
}

impl AttendanceDay {
    /// Creates a worked day with normal hours only.
    pub fn worked(date: NaiveDate, hours_normal: Decimal) -> Self {
        Self {
            date,
            hours_normal,
            hours_ot_1_5: Decimal::ZERO,
            hours_ot_2_0: Decimal::ZERO,
            absent: false,
            sick: false,
        }
    }

    /// Creates an absent day, optionally marked as sick.
    pub fn absent(date: NaiveDate, sick: bool) -> Self {
        Self {
            date,
            hours_normal: Decimal::ZERO,
            hours_ot_1_5: Decimal::ZERO,
            hours_ot_2_0: Decimal::ZERO,
            absent: true,
            sick,
        }
    }

    /// Returns true if this is an absence due to sickness.
    pub fn is_sick_absence(&self) -> bool {
        self.absent && self.sick
    }
}

/// Hour and day totals over a period's attendance records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    /// Total normal hours.
    pub hours_normal: Decimal,
    /// Total hours at 1.5x.
    pub hours_ot_1_5: Decimal,
    /// Total hours at 2.0x.
    pub hours_ot_2_0: Decimal,
    /// Number of days not marked absent.
    pub days_worked: u32,
    /// Number of days marked absent.
    pub days_absent: u32,
}

impl AttendanceTotals {
    /// Sums a period's attendance records.
    ///
    /// # Examples
    ///
    /// ```
    /// use kenya_payroll::models::{AttendanceDay, AttendanceTotals};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let days = vec![
    ///     AttendanceDay::worked(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(), Decimal::new(9, 0)),
    ///     AttendanceDay::absent(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(), true),
    /// ];
    /// let totals = AttendanceTotals::from_days(&days);
    /// assert_eq!(totals.hours_normal, Decimal::new(9, 0));
    /// assert_eq!(totals.days_worked, 1);
    /// assert_eq!(totals.days_absent, 1);
    /// ```
    pub fn from_days(days: &[AttendanceDay]) -> Self {
        days.iter().fold(Self::default(), |mut totals, day| {
            totals.hours_normal += day.hours_normal;
            totals.hours_ot_1_5 += day.hours_ot_1_5;
            totals.hours_ot_2_0 += day.hours_ot_2_0;
            if day.absent {
                totals.days_absent += 1;
            } else {
                totals.days_worked += 1;
            }
            totals
        })
    }
}

//! Leave allocation functionality.
//!
//! This module draws a period's absences against an employee's leave
//! balance, one day at a time and in date order, under the Employment Act
//! priority: sick days come from full-pay sick leave, then half-pay sick
//! leave; other absences come from annual leave. Anything no balance can
//! cover is unpaid.

use crate::models::{AttendanceDay, LeaveAllocation, LeaveBalance};

/// Allocates a period's absences against a leave balance.
///
/// The cascade is strict: a category once exhausted is never revisited,
/// and balances only ever decrease. The input balance is not modified;
/// the carry-forward balance is returned on the allocation.
///
/// # Arguments
///
/// * `attendance_days` - The period's attendance records, in any order
/// * `balance` - The leave balance brought forward
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::allocate_leave;
/// use kenya_payroll::models::{AttendanceDay, LeaveBalance};
/// use chrono::NaiveDate;
///
/// let balance = LeaveBalance {
///     employee_id: "1".to_string(),
///     sick_full_pay: 7,
///     sick_half_pay: 7,
///     annual_leave: 21,
///     as_of_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// let days: Vec<AttendanceDay> = (2..=7)
///     .map(|d| AttendanceDay::absent(NaiveDate::from_ymd_opt(2026, 2, d).unwrap(), true))
///     .collect();
///
/// let allocation = allocate_leave(&days, &balance);
/// assert_eq!(allocation.sick_full_pay_used, 6);
/// assert_eq!(allocation.updated_balance.sick_full_pay, 1);
/// ```
pub fn allocate_leave(attendance_days: &[AttendanceDay], balance: &LeaveBalance) -> LeaveAllocation {
    let mut absences: Vec<&AttendanceDay> = attendance_days.iter().filter(|d| d.absent).collect();
    absences.sort_by_key(|d| d.date);

    let mut remaining = balance.clone();
    let mut sick_full_pay_used = 0;
    let mut sick_half_pay_used = 0;
    let mut annual_leave_used = 0;
    let mut unpaid_days = 0;

    for day in absences {
        if day.sick {
            if remaining.sick_full_pay > 0 {
                remaining.sick_full_pay -= 1;
                sick_full_pay_used += 1;
            } else if remaining.sick_half_pay > 0 {
                remaining.sick_half_pay -= 1;
                sick_half_pay_used += 1;
            } else {
                unpaid_days += 1;
            }
        } else if remaining.annual_leave > 0 {
            remaining.annual_leave -= 1;
            annual_leave_used += 1;
        } else {
            unpaid_days += 1;
        }
    }

    LeaveAllocation {
        sick_full_pay_used,
        sick_half_pay_used,
        annual_leave_used,
        unpaid_days,
        updated_balance: remaining,
    }
}

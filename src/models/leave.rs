//! Leave balance and allocation models.
//!
//! The [`LeaveBalance`] is the only state that outlives a payroll run: the
//! allocator hands back a new balance and the caller stores it for the
//! next period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Remaining leave days for an employee as of a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee this balance belongs to.
    pub employee_id: String,
    /// Remaining sick days paid in full.
    pub sick_full_pay: u32,
    /// Remaining sick days paid at half rate.
    pub sick_half_pay: u32,
    /// Remaining annual leave days.
    pub annual_leave: u32,
    /// The date the balance was last brought forward.
    pub as_of_date: NaiveDate,
}

/// The outcome of drawing a period's absences against a leave balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAllocation {
    /// Sick days drawn from the full-pay balance.
    pub sick_full_pay_used: u32,
    /// Sick days drawn from the half-pay balance.
    pub sick_half_pay_used: u32,
    /// Non-sick absences drawn from annual leave.
    pub annual_leave_used: u32,
    /// Absences no balance could cover.
    pub unpaid_days: u32,
    /// The balance to carry into the next period.
    pub updated_balance: LeaveBalance,
}

impl LeaveAllocation {
    /// Total absent days accounted for by this allocation.
    pub fn total_days(&self) -> u32 {
        self.sick_full_pay_used + self.sick_half_pay_used + self.annual_leave_used + self.unpaid_days
    }

    /// Returns true if any absence was allocated.
    pub fn has_leave(&self) -> bool {
        self.total_days() > 0
    }
}

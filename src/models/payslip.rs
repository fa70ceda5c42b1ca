//! Payslip model and its reconciled components.
//!
//! Every amount on a payslip is already rounded to cents, and every total
//! is the sum of the rounded parts it covers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceDay, Contract, Employee, LeaveAllocation};

/// Cash earnings for the period, plus the non-cash housing benefit.
///
/// `total_gross` covers cash earnings only; `housing_benefit` enters
/// chargeable pay but is never paid out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossBreakdown {
    /// Pay for normal hours (or the monthly salary).
    pub base_pay: Decimal,
    /// Pay for hours at 1.5x.
    pub overtime_1_5: Decimal,
    /// Pay for hours at 2.0x.
    pub overtime_2_0: Decimal,
    /// Mandatory cash housing allowance.
    pub housing_allowance: Decimal,
    /// Taxable value of employer-provided housing.
    pub housing_benefit: Decimal,
    /// Total cash gross.
    pub total_gross: Decimal,
}

impl GrossBreakdown {
    /// Sum of the cash components.
    pub fn cash_components(&self) -> Decimal {
        self.base_pay + self.overtime_1_5 + self.overtime_2_0 + self.housing_allowance
    }

    /// Total overtime pay at both rates.
    pub fn overtime_total(&self) -> Decimal {
        self.overtime_1_5 + self.overtime_2_0
    }
}

/// The four statutory employee-side deductions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Pension contribution on earnings up to the lower threshold.
    pub pension_tier_1: Decimal,
    /// Pension contribution on earnings between the thresholds.
    pub pension_tier_2: Decimal,
    /// Health insurance contribution.
    pub health_insurance: Decimal,
    /// Housing levy.
    pub housing_levy: Decimal,
    /// Income tax payable.
    pub income_tax: Decimal,
    /// Sum of all of the above.
    pub total: Decimal,
}

impl Deductions {
    /// Total pension contribution across both tiers.
    pub fn pension_total(&self) -> Decimal {
        self.pension_tier_1 + self.pension_tier_2
    }

    /// Deductions allowed against chargeable pay.
    pub fn allowable(&self) -> Decimal {
        self.pension_total() + self.health_insurance + self.housing_levy
    }
}

/// How the income tax on a payslip was arrived at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputation {
    /// Gross pay plus benefits less allowable deductions.
    pub chargeable_pay: Decimal,
    /// Tax from the band walk, before relief.
    pub tax_before_relief: Decimal,
    /// Personal relief in effect for the period.
    pub personal_relief: Decimal,
    /// Tax after relief, never negative.
    pub tax_payable: Decimal,
}

/// A single step in the payroll calculation audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// Identifier of the rule that was applied.
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// Statute or schedule the rule implements.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Explanation of what was applied.
    pub reasoning: String,
}

/// The ordered record of every stage the engine ran for one payslip.
///
/// Held in memory on the payslip; nothing in this crate persists it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Finds the first step recorded for `rule_id`.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The fully reconciled payroll result for one employee and one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySlip {
    /// The employee paid.
    pub employee: Employee,
    /// The contract the pay was computed from.
    pub contract: Contract,
    /// Period label, e.g. "February 2026".
    pub period: String,
    /// The payroll date the rates were resolved for.
    pub payroll_date: NaiveDate,
    /// Cash earnings and housing benefit.
    pub gross: GrossBreakdown,
    /// Statutory deductions.
    pub deductions: Deductions,
    /// Tax computation behind `deductions.income_tax`.
    pub tax: TaxComputation,
    /// Leave drawn this period and the balance carried forward.
    pub leave: LeaveAllocation,
    /// Cash gross less total deductions.
    pub net_pay: Decimal,
    /// The attendance records the payslip was computed from.
    pub attendance: Vec<AttendanceDay>,
    /// Advisory warnings, such as a minimum-wage shortfall.
    #[serde(default)]
    pub warnings: Vec<String>,
    /// In-memory audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

impl PaySlip {
    /// Total hours worked at every rate.
    pub fn hours_worked(&self) -> Decimal {
        self.attendance
            .iter()
            .map(|d| d.hours_normal + d.hours_ot_1_5 + d.hours_ot_2_0)
            .sum()
    }

    /// Number of days with attendance that were not absences.
    pub fn days_worked(&self) -> usize {
        self.attendance.iter().filter(|d| !d.absent).count()
    }
}

//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine:
//! the inputs loaded once per run (employee, contract, attendance, leave
//! balance) and the reconciled payslip produced for each employee.

mod attendance;
mod contract;
mod employee;
mod leave;
mod payslip;

pub use attendance::{AttendanceDay, AttendanceTotals};
pub use contract::{
    Contract, ContractStatus, ContractType, HourlyDivisor, HousingArrangement, PensionTier,
    SalaryBasis,
};
pub use employee::Employee;
pub use leave::{LeaveAllocation, LeaveBalance};
pub use payslip::{AuditStep, AuditTrace, Deductions, GrossBreakdown, PaySlip, TaxComputation};

//! Statutory payroll engine for Kenya.
//!
//! This crate turns an employee's contract, a month's attendance and a
//! leave balance into a reconciled payslip: gross pay with the mandatory
//! housing allowance, leave consumption, pension (NSSF), health insurance
//! (SHIF), housing levy (AHL), income tax (PAYE) and net pay. Rates are
//! selected by payroll date from versioned regimes.
//!
//! Around the engine sit thin adapters: tab-separated input loaders,
//! renderers for the payslip and the regulator returns, and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod loaders;
pub mod models;
pub mod money;
pub mod reports;

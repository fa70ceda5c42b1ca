//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoint that runs a month's payroll for
//! a list of employees.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ContractRequest, EmployeePayrollRequest, PayrollRequest};
pub use response::{ApiError, EmployeeFailure, PayrollResponse};
pub use state::AppState;

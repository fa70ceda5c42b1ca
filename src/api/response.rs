//! Response types for the payroll API.
//!
//! This module defines the success body, the per-employee failure entries
//! and the error responses for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::PaySlip;

/// Response body for a payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Period label, e.g. "February 2026".
    pub period: String,
    /// Payslips for every employee that could be paid, in request order.
    pub payslips: Vec<PaySlip>,
    /// Employees that could not be paid, in request order.
    pub failures: Vec<EmployeeFailure>,
}

/// An employee the run could not pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFailure {
    /// The employee's id.
    pub employee_id: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl EmployeeFailure {
    /// Creates a failure entry from an engine error.
    pub fn new(employee_id: impl Into<String>, error: EngineError) -> Self {
        let api_error = ApiErrorResponse::from(error).error;
        Self {
            employee_id: employee_id.into(),
            code: api_error.code,
            message: api_error.message,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidRateTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::UnknownContractType { value } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "UNKNOWN_CONTRACT_TYPE",
                    message,
                    format!(
                        "'{}' is not one of hourly, fixed_monthly, prorated_minimum_wage",
                        value
                    ),
                ),
            ),
            EngineError::InvalidContract { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_CONTRACT", message))
            }
            EngineError::RateRegimeNotFound { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "RATE_REGIME_NOT_FOUND",
                    message,
                    "The payroll date precedes every configured statutory rate regime",
                ))
            }
            EngineError::InvalidPeriod { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_PERIOD", message))
            }
            EngineError::DataLoad { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("DATA_LOAD_ERROR", message),
            },
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            EngineError::Render { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("RENDER_ERROR", message),
            },
        }
    }
}

//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{PayrollEngine, PayrollInput};
use crate::error::EngineError;
use crate::models::Contract;

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse, EmployeeFailure, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Handler for POST /payroll endpoint.
///
/// Runs payroll for every employee in the request. Employees that cannot be
/// paid are reported in `failures` without affecting the others.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let engine =
        match PayrollEngine::with_config(request.payroll_date, state.config(), state.options()) {
            Ok(engine) => engine,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    payroll_date = %request.payroll_date,
                    error = %err,
                    "No rate regime for payroll date"
                );
                return ApiErrorResponse::from(err).into_response();
            }
        };

    let start_time = Instant::now();
    let employee_count = request.employees.len();

    // Contracts that fail to convert never reach the engine.
    let mut slots: Vec<Result<usize, EmployeeFailure>> = Vec::with_capacity(employee_count);
    let mut inputs: Vec<PayrollInput> = Vec::with_capacity(employee_count);
    for entry in request.employees {
        let employee_id = entry.employee.id.clone();
        match Contract::try_from(entry.contract) {
            Ok(contract) => {
                slots.push(Ok(inputs.len()));
                inputs.push(PayrollInput {
                    employee: entry.employee,
                    contract,
                    attendance: entry.attendance,
                    leave_balance: entry.leave_balance,
                });
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %employee_id,
                    error = %err,
                    "Rejected contract"
                );
                slots.push(Err(EmployeeFailure::new(employee_id, err)));
            }
        }
    }

    let period = engine.period();
    let batch = tokio::task::spawn_blocking(move || {
        let results = engine.process_batch(&inputs);
        inputs
            .into_iter()
            .map(|input| input.employee.id)
            .zip(results)
            .collect::<Vec<_>>()
    })
    .await;

    let results = match batch {
        Ok(results) => results,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll batch aborted");
            return ApiErrorResponse::from(EngineError::CalculationError {
                message: err.to_string(),
            })
            .into_response();
        }
    };

    let mut results: Vec<Option<_>> = results.into_iter().map(Some).collect();
    let mut response = PayrollResponse {
        period,
        payslips: Vec::new(),
        failures: Vec::new(),
    };
    for slot in slots {
        match slot {
            Ok(index) => match results.get_mut(index).and_then(Option::take) {
                Some((_, Ok(payslip))) => response.payslips.push(payslip),
                Some((employee_id, Err(err))) => {
                    response.failures.push(EmployeeFailure::new(employee_id, err))
                }
                None => {}
            },
            Err(failure) => response.failures.push(failure),
        }
    }

    info!(
        correlation_id = %correlation_id,
        period = %response.period,
        employees = employee_count,
        paid = response.payslips.len(),
        failed = response.failures.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Payroll completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

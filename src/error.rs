//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can abort a payroll computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Minimum-wage shortfalls are deliberately absent: they are advisory and
/// surface as payslip warnings, never as errors.
///
/// # Example
///
/// ```
/// use kenya_payroll::error::EngineError;
///
/// let error = EngineError::UnknownContractType {
///     value: "casual".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown contract type: casual");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A contract named a contract type the engine does not know.
    #[error("Unknown contract type: {value}")]
    UnknownContractType {
        /// The unrecognised contract type text.
        value: String,
    },

    /// A contract field was missing or inconsistent with its contract type.
    #[error("Invalid contract field '{field}': {message}")]
    InvalidContract {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No statutory rate regime covers the requested payroll date.
    #[error("No statutory rate regime in effect on {date}")]
    RateRegimeNotFound {
        /// The payroll date that preceded every known regime.
        date: NaiveDate,
    },

    /// A statutory rate table violated its ordering invariants.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// A year/month pair did not name a calendar month.
    #[error("Invalid payroll period {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// An input data file was missing or malformed.
    #[error("Failed to load '{path}': {message}")]
    DataLoad {
        /// The path of the input file.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// A report could not be written.
    #[error("Failed to render {report}: {message}")]
    Render {
        /// The report being rendered.
        report: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/holidays.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/holidays.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/rates/2026-02-01.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/rates/2026-02-01.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_contract_type_displays_value() {
        let error = EngineError::UnknownContractType {
            value: "piecework".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown contract type: piecework");
    }

    #[test]
    fn test_invalid_contract_displays_field_and_message() {
        let error = EngineError::InvalidContract {
            field: "weekly_hours".to_string(),
            message: "required for prorated_minimum_wage contracts".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid contract field 'weekly_hours': required for prorated_minimum_wage contracts"
        );
    }

    #[test]
    fn test_rate_regime_not_found_displays_date() {
        let error = EngineError::RateRegimeNotFound {
            date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No statutory rate regime in effect on 2024-12-31"
        );
    }

    #[test]
    fn test_invalid_period_pads_month() {
        let error = EngineError::InvalidPeriod {
            year: 2026,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid payroll period 2026-13");

        let error = EngineError::InvalidPeriod { year: 2026, month: 0 };
        assert_eq!(error.to_string(), "Invalid payroll period 2026-00");
    }

    #[test]
    fn test_data_load_displays_path_and_message() {
        let error = EngineError::DataLoad {
            path: "data/contracts.tsv".to_string(),
            message: "missing field `base_salary`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to load 'data/contracts.tsv': missing field `base_salary`"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_type() -> EngineResult<()> {
            Err(EngineError::UnknownContractType {
                value: "casual".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_type()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

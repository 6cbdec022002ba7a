//! Error types for the Leave Balance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing leave balances.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Leave Balance Engine.
///
/// Future start dates and over-consumed balances are not errors; they
/// produce well-defined zero or clamped results. Everything here is an
/// input or programmer error surfaced immediately.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::UnknownEmploymentType {
///     value: "intern".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employment type: intern");
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

    /// A date value could not be parsed as an ISO calendar date.
    #[error("Invalid date for '{field}': {value}")]
    InvalidDate {
        /// The input field holding the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A date range ended before it started.
    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// The employment type is not one of the supported accrual models.
    #[error("Unknown employment type: {value}")]
    UnknownEmploymentType {
        /// The unrecognised classification.
        value: String,
    },

    /// The operation only applies to a different employment type.
    #[error("Operation '{operation}' is not supported for {employment_type} employees")]
    UnsupportedEmploymentType {
        /// The operation that was requested.
        operation: String,
        /// The employment type of the employee.
        employment_type: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An approved leave request was invalid.
    #[error("Invalid leave request for employee '{employee_id}': {message}")]
    InvalidLeaveRequest {
        /// The employee the request belongs to.
        employee_id: String,
        /// A description of what made the request invalid.
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
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/policy.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/policy.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_date_displays_field_and_value() {
        let error = EngineError::InvalidDate {
            field: "start_date".to_string(),
            value: "2026-13-01".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid date for 'start_date': 2026-13-01");
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2026-02-01 is before 2026-03-01"
        );
    }

    #[test]
    fn test_unsupported_employment_type_displays_operation() {
        let error = EngineError::UnsupportedEmploymentType {
            operation: "contract_status".to_string(),
            employment_type: "permanent".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Operation 'contract_status' is not supported for permanent employees"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "monthly_accrual_rate".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'monthly_accrual_rate': must be positive"
        );
    }

    #[test]
    fn test_invalid_leave_request_displays_employee_and_message() {
        let error = EngineError::InvalidLeaveRequest {
            employee_id: "EMP-001".to_string(),
            message: "duration must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid leave request for employee 'EMP-001': duration must be positive"
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
            Err(EngineError::UnknownEmploymentType {
                value: "intern".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_type()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

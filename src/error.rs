//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll generation.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{PayMonth, PayrollStatus};

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth {
///     value: "2026-13".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid payroll month '2026-13': expected YYYY-MM"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The payroll month token was missing or malformed.
    #[error("Invalid payroll month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected month token.
        value: String,
    },

    /// A payroll record already exists for the employee and month.
    ///
    /// This is the benign "already generated" signal raised by the ledger's
    /// unique index; batch generation folds it into the skipped set.
    #[error("Payroll already generated for employee '{employee_id}' in {month}")]
    DuplicateRecord {
        /// The company that owns the record.
        company_id: String,
        /// The employee the duplicate was attempted for.
        employee_id: String,
        /// The payroll month of the duplicate.
        month: PayMonth,
    },

    /// No payroll record exists with the given id.
    #[error("Payroll record not found: {record_id}")]
    RecordNotFound {
        /// The id that was looked up.
        record_id: Uuid,
    },

    /// A status transition was attempted on a record that has already been
    /// finalized (paid or cancelled).
    #[error("Payroll record {record_id} is already {status}")]
    InvalidTransition {
        /// The record the transition was attempted on.
        record_id: Uuid,
        /// The record's current (terminal) status.
        status: PayrollStatus,
    },

    /// An employee's input data was invalid for payroll calculation.
    #[error("Invalid payroll input for employee '{employee_id}': {message}")]
    EmployeeData {
        /// The employee whose data was rejected.
        employee_id: String,
        /// A description of what was invalid.
        message: String,
    },

    /// An external store (attendance, employee directory, ledger backend)
    /// was unavailable.
    #[error("Store '{store}' unavailable: {message}")]
    TransientStore {
        /// The name of the unreachable store.
        store: String,
        /// A description of the failure.
        message: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_invalid_month_displays_value() {
        let error = EngineError::InvalidMonth {
            value: "March 2026".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll month 'March 2026': expected YYYY-MM"
        );
    }

    #[test]
    fn test_duplicate_record_displays_employee_and_month() {
        let error = EngineError::DuplicateRecord {
            company_id: "acme".to_string(),
            employee_id: "emp_042".to_string(),
            month: PayMonth::from_str("2026-03").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Payroll already generated for employee 'emp_042' in 2026-03"
        );
    }

    #[test]
    fn test_record_not_found_displays_id() {
        let record_id = Uuid::new_v4();
        let error = EngineError::RecordNotFound { record_id };
        assert_eq!(
            error.to_string(),
            format!("Payroll record not found: {}", record_id)
        );
    }

    #[test]
    fn test_invalid_transition_displays_status() {
        let record_id = Uuid::new_v4();
        let error = EngineError::InvalidTransition {
            record_id,
            status: PayrollStatus::Paid,
        };
        assert_eq!(
            error.to_string(),
            format!("Payroll record {} is already paid", record_id)
        );
    }

    #[test]
    fn test_employee_data_displays_message() {
        let error = EngineError::EmployeeData {
            employee_id: "emp_001".to_string(),
            message: "basic salary is negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll input for employee 'emp_001': basic salary is negative"
        );
    }

    #[test]
    fn test_transient_store_displays_store_name() {
        let error = EngineError::TransientStore {
            store: "attendance".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Store 'attendance' unavailable: connection refused"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth {
                value: "bad".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

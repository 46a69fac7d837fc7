//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report, along with the stable
//! [`ErrorKind`] callers match on.

use chrono::NaiveDate;
use thiserror::Error;

use crate::store::RepositoryError;

/// Stable, machine-checkable category of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied malformed or inconsistent data.
    Validation,
    /// A referenced employee or timesheet does not exist.
    NotFound,
    /// The request collides with existing state.
    Conflict,
    /// A payrun matched no active employees.
    NoEligibleEmployees,
    /// A payrun matched employees but none had a timesheet.
    NoPayslipsGenerated,
    /// A store failure or otherwise unexpected state.
    Internal,
}

impl ErrorKind {
    /// Returns the stable string code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::NoEligibleEmployees => "NO_ELIGIBLE_EMPLOYEES",
            ErrorKind::NoPayslipsGenerated => "NO_PAYSLIPS_GENERATED",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

/// The main error type for the Payroll Engine.
///
/// Every operation in the engine returns this error type, so domain rule
/// violations can be matched on by variant or by [`EngineError::kind`].
///
/// # Example
///
/// ```
/// use payroll_engine::error::{EngineError, ErrorKind};
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "EMP-0000001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP-0000001");
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A process setting from the environment was invalid.
    #[error("Invalid setting '{name}': {message}")]
    InvalidSetting {
        /// The environment variable name.
        name: String,
        /// A description of the problem.
        message: String,
    },

    /// A timesheet entry could not be converted into paid minutes.
    #[error("Invalid timesheet entry on {date}: {message}")]
    InvalidEntry {
        /// The date of the offending entry.
        date: NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A request field failed a domain check.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The referenced employee does not exist.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee identifier that was looked up.
        employee_id: String,
    },

    /// The referenced employee exists but is not `ACTIVE`.
    #[error("Employee '{employee_id}' is inactive")]
    EmployeeInactive {
        /// The inactive employee's identifier.
        employee_id: String,
    },

    /// The referenced timesheet does not exist.
    #[error("Timesheet not found: {timesheet_id}")]
    TimesheetNotFound {
        /// The timesheet identifier that was looked up.
        timesheet_id: String,
    },

    /// The period overlaps another timesheet for the same employee.
    #[error(
        "Period {period_start} to {period_end} overlaps an existing timesheet for employee '{employee_id}'"
    )]
    PeriodConflict {
        /// The employee owning the conflicting timesheets.
        employee_id: String,
        /// Start of the rejected period.
        period_start: NaiveDate,
        /// End of the rejected period.
        period_end: NaiveDate,
    },

    /// Another employee already uses this email address.
    #[error("Employee with email '{email}' already exists")]
    DuplicateEmployee {
        /// The duplicated email address.
        email: String,
    },

    /// No active employees matched the payrun request.
    #[error("No active employees found for the given criteria")]
    NoEligibleEmployees,

    /// Eligible employees exist but none produced a payslip.
    #[error("No payslips generated for period {period_start} to {period_end}")]
    NoPayslipsGenerated {
        /// Start of the requested period.
        period_start: NaiveDate,
        /// End of the requested period.
        period_end: NaiveDate,
    },

    /// The underlying store failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

impl EngineError {
    /// Returns the stable category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidEntry { .. }
            | EngineError::Validation { .. }
            | EngineError::EmployeeInactive { .. } => ErrorKind::Validation,
            EngineError::EmployeeNotFound { .. } | EngineError::TimesheetNotFound { .. } => {
                ErrorKind::NotFound
            }
            EngineError::PeriodConflict { .. } | EngineError::DuplicateEmployee { .. } => {
                ErrorKind::Conflict
            }
            EngineError::NoEligibleEmployees => ErrorKind::NoEligibleEmployees,
            EngineError::NoPayslipsGenerated { .. } => ErrorKind::NoPayslipsGenerated,
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidSetting { .. }
            | EngineError::Store { .. } => ErrorKind::Internal,
        }
    }

    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for EngineError {
    fn from(error: RepositoryError) -> Self {
        EngineError::Store {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
        assert_eq!(error.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_invalid_entry_displays_date_and_message() {
        let error = EngineError::InvalidEntry {
            date: date("2026-01-05"),
            message: "unpaid break exceeds worked span".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid timesheet entry on 2026-01-05: unpaid break exceeds worked span"
        );
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_period_conflict_is_conflict_kind() {
        let error = EngineError::PeriodConflict {
            employee_id: "EMP-00000A1".to_string(),
            period_start: date("2026-01-05"),
            period_end: date("2026-01-10"),
        };
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert!(error.to_string().contains("2026-01-05 to 2026-01-10"));
    }

    #[test]
    fn test_inactive_employee_is_validation_kind() {
        let error = EngineError::EmployeeInactive {
            employee_id: "EMP-00000A1".to_string(),
        };
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.to_string(), "Employee 'EMP-00000A1' is inactive");
    }

    #[test]
    fn test_payrun_outcome_kinds() {
        assert_eq!(
            EngineError::NoEligibleEmployees.kind(),
            ErrorKind::NoEligibleEmployees
        );
        let error = EngineError::NoPayslipsGenerated {
            period_start: date("2026-01-01"),
            period_end: date("2026-01-07"),
        };
        assert_eq!(error.kind(), ErrorKind::NoPayslipsGenerated);
    }

    #[test]
    fn test_repository_error_becomes_internal() {
        let error: EngineError = RepositoryError::Storage("lock poisoned".to_string()).into();
        assert_eq!(error.kind(), ErrorKind::Internal);
        assert_eq!(error.to_string(), "Store error: Storage error: lock poisoned");
    }

    #[test]
    fn test_kind_codes_are_stable() {
        assert_eq!(ErrorKind::Validation.code(), "VALIDATION_ERROR");
        assert_eq!(ErrorKind::NotFound.code(), "NOT_FOUND");
        assert_eq!(ErrorKind::Conflict.code(), "CONFLICT");
        assert_eq!(ErrorKind::Internal.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::TimesheetNotFound {
                timesheet_id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

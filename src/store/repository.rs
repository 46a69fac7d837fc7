//! Repository traits for employee, timesheet and payrun persistence.
//!
//! Services depend on these traits only. Each method is a single atomic
//! store operation, so invariants that must hold under concurrent callers
//! (unique email, non-overlapping periods) are checked inside the store.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Employee, EmployeeId, PayPeriod, Payrun, Timesheet};

/// Failure reported by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The record to update does not exist.
    #[error("Record not found")]
    NotFound,

    /// The write would violate a uniqueness invariant.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Persistence for the employee registry.
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee. Fails with `Conflict` if the email is taken.
    fn insert(&self, employee: Employee) -> Result<Employee, RepositoryError>;

    /// Looks up an employee by id.
    fn get(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError>;

    /// Replaces a stored employee.
    ///
    /// Fails with `NotFound` for an unknown id and `Conflict` if another
    /// employee already holds the email.
    fn update(&self, employee: Employee) -> Result<Employee, RepositoryError>;

    /// Returns every employee, ordered by id.
    fn list(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Returns active employees, restricted to `ids` when given.
    fn find_active(&self, ids: Option<&[EmployeeId]>) -> Result<Vec<Employee>, RepositoryError>;
}

/// Persistence for timesheets.
pub trait TimesheetRepository: Send + Sync {
    /// Stores a timesheet unless another one for the same employee overlaps
    /// its period, in which case `Conflict` is returned and nothing is written.
    fn insert_if_no_overlap(&self, timesheet: Timesheet) -> Result<Timesheet, RepositoryError>;

    /// Replaces a stored timesheet, checking overlap against every other
    /// timesheet of the (possibly new) employee.
    fn replace(&self, timesheet: Timesheet) -> Result<Timesheet, RepositoryError>;

    /// Looks up a timesheet by id.
    fn get(&self, id: Uuid) -> Result<Option<Timesheet>, RepositoryError>;

    /// Returns an employee's timesheets sharing at least one day with `period`.
    fn find_intersecting(
        &self,
        employee_id: &EmployeeId,
        period: &PayPeriod,
    ) -> Result<Vec<Timesheet>, RepositoryError>;
}

/// Persistence for completed payruns.
pub trait PayrunRepository: Send + Sync {
    /// Stores a payrun with all of its payslips in one write.
    fn insert(&self, payrun: Payrun) -> Result<Payrun, RepositoryError>;

    /// Returns every payrun, newest first.
    fn list(&self) -> Result<Vec<Payrun>, RepositoryError>;
}

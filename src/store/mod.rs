//! Persistence layer for employees, timesheets and payruns.
//!
//! The engine is written against the traits in this module; the in-memory
//! implementations back the HTTP server and the tests.

mod memory;
mod repository;

pub use memory::{InMemoryEmployeeRepository, InMemoryPayrunRepository, InMemoryTimesheetRepository};
pub use repository::{EmployeeRepository, PayrunRepository, RepositoryError, TimesheetRepository};

//! Payroll services.
//!
//! Each service is an explicitly constructed component holding the
//! repositories it needs. [`PayrollServices`] wires all three over a shared
//! set of repositories.

mod employee;
mod payrun;
mod timesheet;

use std::sync::Arc;

pub use employee::EmployeeService;
pub use payrun::{PayrunService, WorkSummary, summarize_work};
pub use timesheet::TimesheetService;

use crate::config::PayrollConfig;
use crate::store::{
    EmployeeRepository, InMemoryEmployeeRepository, InMemoryPayrunRepository,
    InMemoryTimesheetRepository, PayrunRepository, TimesheetRepository,
};

/// The employee registry, timesheet store and payrun orchestrator over one
/// set of repositories.
#[derive(Clone)]
pub struct PayrollServices {
    /// Employee registry.
    pub employees: EmployeeService,
    /// Timesheet period store.
    pub timesheets: TimesheetService,
    /// Payrun orchestrator.
    pub payruns: PayrunService,
}

impl PayrollServices {
    /// Wires the services over the given repositories.
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        timesheets: Arc<dyn TimesheetRepository>,
        payruns: Arc<dyn PayrunRepository>,
        config: PayrollConfig,
    ) -> Self {
        Self {
            employees: EmployeeService::new(employees.clone()),
            timesheets: TimesheetService::new(employees.clone(), timesheets.clone()),
            payruns: PayrunService::new(employees, timesheets, payruns, Arc::new(config)),
        }
    }

    /// Wires the services over fresh in-memory repositories.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::PayrollConfig;
    /// use payroll_engine::services::PayrollServices;
    ///
    /// let services = PayrollServices::in_memory(PayrollConfig::default());
    /// assert!(services.employees.list().unwrap().is_empty());
    /// ```
    pub fn in_memory(config: PayrollConfig) -> Self {
        Self::new(
            Arc::new(InMemoryEmployeeRepository::new()),
            Arc::new(InMemoryTimesheetRepository::new()),
            Arc::new(InMemoryPayrunRepository::new()),
            config,
        )
    }
}

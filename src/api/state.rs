//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::config::PayrollConfig;
use crate::services::{EmployeeService, PayrollServices, PayrunService, TimesheetService};

/// Shared application state.
///
/// Contains the payroll services; each holds its repositories behind `Arc`,
/// so cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    services: PayrollServices,
}

impl AppState {
    /// Creates a new application state over the given services.
    pub fn new(services: PayrollServices) -> Self {
        Self { services }
    }

    /// Creates a state backed by fresh in-memory repositories.
    pub fn in_memory(config: PayrollConfig) -> Self {
        Self::new(PayrollServices::in_memory(config))
    }

    /// The employee registry.
    pub fn employees(&self) -> &EmployeeService {
        &self.services.employees
    }

    /// The timesheet period store.
    pub fn timesheets(&self) -> &TimesheetService {
        &self.services.timesheets
    }

    /// The payrun orchestrator.
    pub fn payruns(&self) -> &PayrunService {
        &self.services.payruns
    }
}

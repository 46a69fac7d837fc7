//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_period;
mod payrun;
mod timesheet;

pub use employee::{
    BankDetails, Employee, EmployeeId, EmployeePatch, EmployeeStatus, EmployeeType, NewEmployee,
};
pub(crate) use employee::prefixed_code;
pub use pay_period::PayPeriod;
pub use payrun::{Payrun, PayrunTotals, Payslip};
pub use timesheet::{NewTimesheet, Timesheet, TimesheetEntry, TimesheetPatch};

//! Request types for the Payroll Engine API.
//!
//! Employee and timesheet bodies deserialize straight into the model input
//! types ([`NewEmployee`](crate::models::NewEmployee),
//! [`NewTimesheet`](crate::models::NewTimesheet) and their patches); this
//! module holds the shapes that exist only at the HTTP boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeId, PayPeriod};

/// Request body for `POST /payruns/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPayrunRequest {
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Restrict the run to these employees; all active employees when omitted.
    #[serde(default)]
    pub employee_ids: Option<Vec<EmployeeId>>,
}

impl RunPayrunRequest {
    /// Returns the requested period.
    pub fn period(&self) -> PayPeriod {
        PayPeriod::new(self.period_start, self.period_end)
    }
}

/// Query string for `GET /timesheets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetQuery {
    /// The employee whose timesheets to return.
    pub employee_id: EmployeeId,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
}

impl TimesheetQuery {
    /// Returns the queried period.
    pub fn period(&self) -> PayPeriod {
        PayPeriod::new(self.period_start, self.period_end)
    }
}

//! Timesheet model and related types.
//!
//! This module defines the [`Timesheet`] and [`TimesheetEntry`] structs for
//! representing an employee's submitted work for a period, plus the input
//! shapes used to submit and patch timesheets.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeId, PayPeriod};

/// A single worked span on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// The day worked.
    pub date: NaiveDate,
    /// Start time of day, `HH:MM` 24-hour.
    pub start: String,
    /// End time of day, `HH:MM` 24-hour. Spans do not cross midnight.
    pub end: String,
    /// Unpaid break taken during the span, in minutes.
    #[serde(default)]
    pub unpaid_break_minutes: u32,
}

/// An employee's timesheet for an inclusive period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// The owning employee.
    pub employee_id: EmployeeId,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Worked spans, in submission order.
    pub entries: Vec<TimesheetEntry>,
    /// Flat addition to gross pay.
    pub allowances: Decimal,
    /// When the timesheet was first stored.
    pub created_at: DateTime<Utc>,
    /// When the timesheet was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Timesheet {
    /// Returns the timesheet's period.
    pub fn period(&self) -> PayPeriod {
        PayPeriod::new(self.period_start, self.period_end)
    }

    /// Iterates over the entries whose date falls inside `period`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeId, PayPeriod, Timesheet, TimesheetEntry};
    /// use chrono::{NaiveDate, Utc};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
    /// let entry = |day| TimesheetEntry {
    ///     date: d(day),
    ///     start: "09:00".to_string(),
    ///     end: "17:00".to_string(),
    ///     unpaid_break_minutes: 30,
    /// };
    /// let timesheet = Timesheet {
    ///     id: Uuid::new_v4(),
    ///     employee_id: EmployeeId::from("EMP-0000001"),
    ///     period_start: d(1),
    ///     period_end: d(14),
    ///     entries: vec![entry(2), entry(9)],
    ///     allowances: Decimal::ZERO,
    ///     created_at: Utc::now(),
    ///     updated_at: Utc::now(),
    /// };
    ///
    /// let first_week = PayPeriod::new(d(1), d(7));
    /// assert_eq!(timesheet.entries_within(&first_week).count(), 1);
    /// ```
    pub fn entries_within<'a>(
        &'a self,
        period: &'a PayPeriod,
    ) -> impl Iterator<Item = &'a TimesheetEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| period.contains_date(entry.date))
    }
}

/// Input for submitting a timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTimesheet {
    /// The submitting employee.
    pub employee_id: EmployeeId,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Worked spans; at least one is required.
    pub entries: Vec<TimesheetEntry>,
    /// Flat addition to gross pay, zero when omitted.
    #[serde(default)]
    pub allowances: Decimal,
}

impl NewTimesheet {
    /// Returns the submitted period.
    pub fn period(&self) -> PayPeriod {
        PayPeriod::new(self.period_start, self.period_end)
    }
}

/// Partial update of a timesheet; `None` fields keep their prior value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetPatch {
    /// Reassign the timesheet to another employee.
    pub employee_id: Option<EmployeeId>,
    /// New first day of the period.
    pub period_start: Option<NaiveDate>,
    /// New last day of the period.
    pub period_end: Option<NaiveDate>,
    /// Replacement entries.
    pub entries: Option<Vec<TimesheetEntry>>,
    /// New allowances amount.
    pub allowances: Option<Decimal>,
}

impl TimesheetPatch {
    /// Returns true if the patch touches the owner or the period.
    pub fn changes_owner_or_period(&self) -> bool {
        self.employee_id.is_some() || self.period_start.is_some() || self.period_end.is_some()
    }
}

//! Timesheet period store.
//!
//! Owns per-employee timesheet records and enforces that no two timesheets
//! of the same employee have overlapping periods, on create and on update.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::net_minutes;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Employee, EmployeeId, NewTimesheet, PayPeriod, Timesheet, TimesheetEntry, TimesheetPatch,
};
use crate::store::{EmployeeRepository, RepositoryError, TimesheetRepository};

/// Creates, updates and looks up timesheets.
#[derive(Clone)]
pub struct TimesheetService {
    employees: Arc<dyn EmployeeRepository>,
    timesheets: Arc<dyn TimesheetRepository>,
}

impl TimesheetService {
    /// Creates a service over the given repositories.
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        timesheets: Arc<dyn TimesheetRepository>,
    ) -> Self {
        Self {
            employees,
            timesheets,
        }
    }

    /// Stores a new timesheet.
    ///
    /// # Errors
    ///
    /// - `Validation` / `InvalidEntry` for an inverted period, no entries,
    ///   negative allowances, or an entry yielding negative paid minutes
    /// - `EmployeeNotFound` / `EmployeeInactive` for an unusable employee
    /// - `PeriodConflict` if the period overlaps one of the employee's
    ///   existing timesheets
    pub fn create(&self, new: NewTimesheet) -> EngineResult<Timesheet> {
        let period = new.period();
        validate_contents(&period, &new.entries, new.allowances)?;
        self.require_active(&new.employee_id)?;

        let now = Utc::now();
        let employee_id = new.employee_id.clone();
        let timesheet = Timesheet {
            id: Uuid::new_v4(),
            employee_id: new.employee_id,
            period_start: new.period_start,
            period_end: new.period_end,
            entries: new.entries,
            allowances: new.allowances,
            created_at: now,
            updated_at: now,
        };

        let stored = self
            .timesheets
            .insert_if_no_overlap(timesheet)
            .map_err(|e| period_conflict_or_store(e, &employee_id, &period))?;

        info!(
            timesheet_id = %stored.id,
            employee_id = %stored.employee_id,
            period_start = %stored.period_start,
            period_end = %stored.period_end,
            entries = stored.entries.len(),
            "Created timesheet"
        );
        Ok(stored)
    }

    /// Returns an active employee's timesheets intersecting `period`.
    ///
    /// # Errors
    ///
    /// `Validation` for an inverted period, `EmployeeNotFound` or
    /// `EmployeeInactive` for an unusable employee.
    pub fn fetch(&self, employee_id: &EmployeeId, period: &PayPeriod) -> EngineResult<Vec<Timesheet>> {
        period.validate()?;
        self.require_active(employee_id)?;
        self.find_for_period(employee_id, period)
    }

    /// Returns every timesheet of `employee_id` sharing at least one day
    /// with `period`, without checking the employee.
    pub fn find_for_period(
        &self,
        employee_id: &EmployeeId,
        period: &PayPeriod,
    ) -> EngineResult<Vec<Timesheet>> {
        Ok(self.timesheets.find_intersecting(employee_id, period)?)
    }

    /// Applies a partial update to a timesheet.
    ///
    /// Reassigning the employee or moving the period re-validates the
    /// resulting employee and the overlap invariant against every other
    /// timesheet of that employee.
    ///
    /// # Errors
    ///
    /// - `TimesheetNotFound` for an unknown id
    /// - `EmployeeNotFound` / `EmployeeInactive` for an unusable new employee
    /// - `Validation` / `InvalidEntry` if the resulting timesheet is invalid
    /// - `PeriodConflict` if the resulting period overlaps another timesheet
    pub fn update(&self, id: Uuid, patch: TimesheetPatch) -> EngineResult<Timesheet> {
        let mut timesheet = self
            .timesheets
            .get(id)?
            .ok_or_else(|| EngineError::TimesheetNotFound {
                timesheet_id: id.to_string(),
            })?;

        let revalidate_owner = patch.changes_owner_or_period();
        if let Some(employee_id) = patch.employee_id {
            timesheet.employee_id = employee_id;
        }
        if let Some(start) = patch.period_start {
            timesheet.period_start = start;
        }
        if let Some(end) = patch.period_end {
            timesheet.period_end = end;
        }
        if let Some(entries) = patch.entries {
            timesheet.entries = entries;
        }
        if let Some(allowances) = patch.allowances {
            timesheet.allowances = allowances;
        }

        let period = timesheet.period();
        validate_contents(&period, &timesheet.entries, timesheet.allowances)?;
        if revalidate_owner {
            self.require_active(&timesheet.employee_id)?;
        }
        timesheet.updated_at = Utc::now();

        let employee_id = timesheet.employee_id.clone();
        let stored = self.timesheets.replace(timesheet).map_err(|e| match e {
            RepositoryError::NotFound => EngineError::TimesheetNotFound {
                timesheet_id: id.to_string(),
            },
            other => period_conflict_or_store(other, &employee_id, &period),
        })?;

        info!(
            timesheet_id = %stored.id,
            employee_id = %stored.employee_id,
            "Updated timesheet"
        );
        Ok(stored)
    }

    fn require_active(&self, employee_id: &EmployeeId) -> EngineResult<Employee> {
        let employee = self
            .employees
            .get(employee_id)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })?;
        if !employee.is_active() {
            warn!(employee_id = %employee_id, "Rejected timesheet for inactive employee");
            return Err(EngineError::EmployeeInactive {
                employee_id: employee_id.to_string(),
            });
        }
        Ok(employee)
    }
}

fn period_conflict_or_store(
    error: RepositoryError,
    employee_id: &EmployeeId,
    period: &PayPeriod,
) -> EngineError {
    match error {
        RepositoryError::Conflict(_) => EngineError::PeriodConflict {
            employee_id: employee_id.to_string(),
            period_start: period.start_date,
            period_end: period.end_date,
        },
        other => other.into(),
    }
}

/// Checks everything about a timesheet that does not need the store.
fn validate_contents(
    period: &PayPeriod,
    entries: &[TimesheetEntry],
    allowances: Decimal,
) -> EngineResult<()> {
    period.validate()?;
    if entries.is_empty() {
        return Err(EngineError::validation(
            "entries",
            "at least one entry is required",
        ));
    }
    if allowances < Decimal::ZERO {
        return Err(EngineError::validation("allowances", "must not be negative"));
    }
    for entry in entries {
        net_minutes(entry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{BankDetails, EmployeeStatus, EmployeeType};
    use crate::store::{InMemoryEmployeeRepository, InMemoryTimesheetRepository};
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn employee(id: &str, status: EmployeeStatus) -> Employee {
        Employee {
            id: EmployeeId::from(id),
            first_name: "Test".to_string(),
            last_name: "Worker".to_string(),
            email: format!("{}@example.com", id.to_lowercase()),
            employee_type: EmployeeType::Hourly,
            base_hourly_rate: Decimal::new(20, 0),
            super_rate: None,
            bank: BankDetails {
                bsb: "083-123".to_string(),
                account: "12345678".to_string(),
            },
            status,
        }
    }

    fn service() -> TimesheetService {
        let employees = InMemoryEmployeeRepository::new();
        employees
            .insert(employee("EMP-0000001", EmployeeStatus::Active))
            .unwrap();
        employees
            .insert(employee("EMP-0000002", EmployeeStatus::Active))
            .unwrap();
        employees
            .insert(employee("EMP-0000009", EmployeeStatus::Inactive))
            .unwrap();
        TimesheetService::new(
            Arc::new(employees),
            Arc::new(InMemoryTimesheetRepository::new()),
        )
    }

    fn entry(date: &str, start: &str, end: &str, unpaid_break_minutes: u32) -> TimesheetEntry {
        TimesheetEntry {
            date: make_date(date),
            start: start.to_string(),
            end: end.to_string(),
            unpaid_break_minutes,
        }
    }

    fn new_timesheet(employee_id: &str, start: &str, end: &str) -> NewTimesheet {
        NewTimesheet {
            employee_id: EmployeeId::from(employee_id),
            period_start: make_date(start),
            period_end: make_date(end),
            entries: vec![entry(start, "09:00", "17:00", 30)],
            allowances: Decimal::ZERO,
        }
    }

    #[test]
    fn test_create_and_fetch() {
        let service = service();
        let created = service
            .create(new_timesheet("EMP-0000001", "2026-01-05", "2026-01-11"))
            .unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let period = PayPeriod::new(make_date("2026-01-01"), make_date("2026-01-31"));
        let found = service
            .fetch(&EmployeeId::from("EMP-0000001"), &period)
            .unwrap();
        assert_eq!(found, vec![created]);
    }

    #[test]
    fn test_create_overlap_conflicts() {
        let service = service();
        service
            .create(new_timesheet("EMP-0000001", "2026-01-05", "2026-01-11"))
            .unwrap();
        let err = service
            .create(new_timesheet("EMP-0000001", "2026-01-08", "2026-01-14"))
            .unwrap_err();
        assert!(matches!(err, EngineError::PeriodConflict { .. }));
        assert_eq!(err.kind(), ErrorKind::Conflict);

        // same period for another employee is fine
        service
            .create(new_timesheet("EMP-0000002", "2026-01-05", "2026-01-11"))
            .unwrap();
    }

    #[test]
    fn test_create_unknown_and_inactive_employee() {
        let service = service();
        let err = service
            .create(new_timesheet("EMP-0000404", "2026-01-05", "2026-01-11"))
            .unwrap_err();
        assert!(matches!(err, EngineError::EmployeeNotFound { .. }));

        let err = service
            .create(new_timesheet("EMP-0000009", "2026-01-05", "2026-01-11"))
            .unwrap_err();
        assert!(matches!(err, EngineError::EmployeeInactive { .. }));
    }

    #[test]
    fn test_create_rejects_invalid_contents() {
        let service = service();

        let err = service
            .create(new_timesheet("EMP-0000001", "2026-01-11", "2026-01-05"))
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation { ref field, .. } if field == "period_end"));

        let mut empty = new_timesheet("EMP-0000001", "2026-01-05", "2026-01-11");
        empty.entries.clear();
        assert_eq!(service.create(empty).unwrap_err().kind(), ErrorKind::Validation);

        let mut overnight = new_timesheet("EMP-0000001", "2026-01-05", "2026-01-11");
        overnight.entries = vec![entry("2026-01-05", "22:00", "06:00", 0)];
        let err = service.create(overnight).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEntry { .. }));
    }

    #[test]
    fn test_fetch_requires_active_employee() {
        let service = service();
        let period = PayPeriod::new(make_date("2026-01-01"), make_date("2026-01-31"));
        let err = service
            .fetch(&EmployeeId::from("EMP-0000009"), &period)
            .unwrap_err();
        assert!(matches!(err, EngineError::EmployeeInactive { .. }));
    }

    #[test]
    fn test_update_moves_period_excluding_itself() {
        let service = service();
        let created = service
            .create(new_timesheet("EMP-0000001", "2026-01-05", "2026-01-11"))
            .unwrap();
        let patch = TimesheetPatch {
            period_end: Some(make_date("2026-01-12")),
            allowances: Some(Decimal::new(50, 0)),
            ..TimesheetPatch::default()
        };
        let updated = service.update(created.id, patch).unwrap();
        assert_eq!(updated.period_end, make_date("2026-01-12"));
        assert_eq!(updated.allowances, Decimal::new(50, 0));
        assert_eq!(updated.entries, created.entries);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_update_into_overlap_conflicts() {
        let service = service();
        service
            .create(new_timesheet("EMP-0000001", "2026-01-05", "2026-01-11"))
            .unwrap();
        let second = service
            .create(new_timesheet("EMP-0000001", "2026-01-12", "2026-01-18"))
            .unwrap();
        let patch = TimesheetPatch {
            period_start: Some(make_date("2026-01-09")),
            entries: Some(vec![entry("2026-01-12", "09:00", "17:00", 30)]),
            ..TimesheetPatch::default()
        };
        let err = service.update(second.id, patch).unwrap_err();
        assert!(matches!(err, EngineError::PeriodConflict { .. }));
    }

    #[test]
    fn test_update_reassign_to_inactive_employee() {
        let service = service();
        let created = service
            .create(new_timesheet("EMP-0000001", "2026-01-05", "2026-01-11"))
            .unwrap();
        let patch = TimesheetPatch {
            employee_id: Some(EmployeeId::from("EMP-0000009")),
            ..TimesheetPatch::default()
        };
        let err = service.update(created.id, patch).unwrap_err();
        assert!(matches!(err, EngineError::EmployeeInactive { .. }));
    }

    #[test]
    fn test_update_reassign_checks_new_employee_overlap() {
        let service = service();
        let first = service
            .create(new_timesheet("EMP-0000001", "2026-01-05", "2026-01-11"))
            .unwrap();
        service
            .create(new_timesheet("EMP-0000002", "2026-01-05", "2026-01-11"))
            .unwrap();
        let patch = TimesheetPatch {
            employee_id: Some(EmployeeId::from("EMP-0000002")),
            ..TimesheetPatch::default()
        };
        let err = service.update(first.id, patch).unwrap_err();
        assert!(matches!(err, EngineError::PeriodConflict { ref employee_id, .. } if employee_id == "EMP-0000002"));
    }

    #[test]
    fn test_update_unknown_timesheet() {
        let err = service()
            .update(Uuid::new_v4(), TimesheetPatch::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

//! In-memory repository implementations.
//!
//! Each repository guards its records with a [`RwLock`]; check-and-write
//! operations run under a single write guard.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::{Employee, EmployeeId, PayPeriod, Payrun, Timesheet};

use super::repository::{
    EmployeeRepository, PayrunRepository, RepositoryError, TimesheetRepository,
};

fn read<'a, T>(lock: &'a RwLock<T>, name: &str) -> Result<RwLockReadGuard<'a, T>, RepositoryError> {
    lock.read()
        .map_err(|_| RepositoryError::Storage(format!("{} lock poisoned", name)))
}

fn write<'a, T>(
    lock: &'a RwLock<T>,
    name: &str,
) -> Result<RwLockWriteGuard<'a, T>, RepositoryError> {
    lock.write()
        .map_err(|_| RepositoryError::Storage(format!("{} lock poisoned", name)))
}

/// Employee registry held in memory, keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<BTreeMap<EmployeeId, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn insert(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let mut employees = write(&self.employees, "employee")?;
        if employees.values().any(|e| e.email == employee.email) {
            return Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                employee.email
            )));
        }
        if employees.contains_key(&employee.id) {
            return Err(RepositoryError::Conflict(format!(
                "employee id {} already exists",
                employee.id
            )));
        }
        employees.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    fn get(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(read(&self.employees, "employee")?.get(id).cloned())
    }

    fn update(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let mut employees = write(&self.employees, "employee")?;
        if !employees.contains_key(&employee.id) {
            return Err(RepositoryError::NotFound);
        }
        if employees
            .values()
            .any(|e| e.id != employee.id && e.email == employee.email)
        {
            return Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                employee.email
            )));
        }
        employees.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    fn list(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(read(&self.employees, "employee")?.values().cloned().collect())
    }

    fn find_active(&self, ids: Option<&[EmployeeId]>) -> Result<Vec<Employee>, RepositoryError> {
        let employees = read(&self.employees, "employee")?;
        Ok(employees
            .values()
            .filter(|e| e.is_active())
            .filter(|e| ids.is_none_or(|ids| ids.contains(&e.id)))
            .cloned()
            .collect())
    }
}

/// Timesheets held in memory in submission order.
#[derive(Debug, Default)]
pub struct InMemoryTimesheetRepository {
    timesheets: RwLock<Vec<Timesheet>>,
}

impl InMemoryTimesheetRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn overlap_conflict(timesheet: &Timesheet) -> RepositoryError {
    RepositoryError::Conflict(format!(
        "period {} to {} overlaps an existing timesheet for {}",
        timesheet.period_start, timesheet.period_end, timesheet.employee_id
    ))
}

fn has_overlap(existing: &[Timesheet], candidate: &Timesheet) -> bool {
    let period = candidate.period();
    existing.iter().any(|ts| {
        ts.id != candidate.id
            && ts.employee_id == candidate.employee_id
            && ts.period().overlaps(&period)
    })
}

impl TimesheetRepository for InMemoryTimesheetRepository {
    fn insert_if_no_overlap(&self, timesheet: Timesheet) -> Result<Timesheet, RepositoryError> {
        let mut timesheets = write(&self.timesheets, "timesheet")?;
        if has_overlap(&timesheets, &timesheet) {
            return Err(overlap_conflict(&timesheet));
        }
        timesheets.push(timesheet.clone());
        Ok(timesheet)
    }

    fn replace(&self, timesheet: Timesheet) -> Result<Timesheet, RepositoryError> {
        let mut timesheets = write(&self.timesheets, "timesheet")?;
        let index = timesheets
            .iter()
            .position(|ts| ts.id == timesheet.id)
            .ok_or(RepositoryError::NotFound)?;
        if has_overlap(&timesheets, &timesheet) {
            return Err(overlap_conflict(&timesheet));
        }
        timesheets[index] = timesheet.clone();
        Ok(timesheet)
    }

    fn get(&self, id: Uuid) -> Result<Option<Timesheet>, RepositoryError> {
        Ok(read(&self.timesheets, "timesheet")?
            .iter()
            .find(|ts| ts.id == id)
            .cloned())
    }

    fn find_intersecting(
        &self,
        employee_id: &EmployeeId,
        period: &PayPeriod,
    ) -> Result<Vec<Timesheet>, RepositoryError> {
        Ok(read(&self.timesheets, "timesheet")?
            .iter()
            .filter(|ts| &ts.employee_id == employee_id && ts.period().intersects(period))
            .cloned()
            .collect())
    }
}

/// Completed payruns held in memory.
#[derive(Debug, Default)]
pub struct InMemoryPayrunRepository {
    payruns: RwLock<Vec<Payrun>>,
}

impl InMemoryPayrunRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PayrunRepository for InMemoryPayrunRepository {
    fn insert(&self, payrun: Payrun) -> Result<Payrun, RepositoryError> {
        let mut payruns = write(&self.payruns, "payrun")?;
        if payruns.iter().any(|p| p.id == payrun.id) {
            return Err(RepositoryError::Conflict(format!(
                "payrun {} already exists",
                payrun.id
            )));
        }
        payruns.push(payrun.clone());
        Ok(payrun)
    }

    fn list(&self) -> Result<Vec<Payrun>, RepositoryError> {
        let mut payruns = read(&self.payruns, "payrun")?.clone();
        // later inserts first on equal timestamps
        payruns.reverse();
        payruns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(payruns)
    }
}

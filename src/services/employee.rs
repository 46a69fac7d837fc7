//! Employee registry service.
//!
//! Validates onboarding and update requests before they reach the
//! [`EmployeeRepository`], and answers the `find_active` / `find_by_id`
//! lookups the payrun orchestrator relies on.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{BankDetails, Employee, EmployeeId, EmployeePatch, NewEmployee};
use crate::store::{EmployeeRepository, RepositoryError};

/// Onboards, updates and looks up employees.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a service over the given repository.
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    /// Registers a new employee with a generated id.
    ///
    /// The email is trimmed and lower-cased before the uniqueness check.
    ///
    /// # Errors
    ///
    /// - `Validation` for blank names, a malformed email or bank details, or
    ///   negative rates
    /// - `DuplicateEmployee` if the email is already registered
    pub fn onboard(&self, new: NewEmployee) -> EngineResult<Employee> {
        let employee = Employee {
            id: EmployeeId::generate(),
            first_name: new.first_name.trim().to_string(),
            last_name: new.last_name.trim().to_string(),
            email: normalize_email(&new.email),
            employee_type: new.employee_type,
            base_hourly_rate: new.base_hourly_rate,
            super_rate: new.super_rate,
            bank: new.bank,
            status: new.status,
        };
        validate_employee(&employee)?;

        let email = employee.email.clone();
        let stored = self
            .employees
            .insert(employee)
            .map_err(|e| duplicate_or_store(e, &email))?;

        info!(employee_id = %stored.id, "Onboarded employee");
        Ok(stored)
    }

    /// Applies a partial update to an employee.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` for an unknown id
    /// - `Validation` if the resulting record is invalid
    /// - `DuplicateEmployee` if the new email belongs to someone else
    pub fn update(&self, id: &EmployeeId, patch: EmployeePatch) -> EngineResult<Employee> {
        let mut employee = self
            .employees
            .get(id)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: id.to_string(),
            })?;

        if let Some(first_name) = patch.first_name {
            employee.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = patch.last_name {
            employee.last_name = last_name.trim().to_string();
        }
        if let Some(email) = patch.email {
            employee.email = normalize_email(&email);
        }
        if let Some(rate) = patch.base_hourly_rate {
            employee.base_hourly_rate = rate;
        }
        if let Some(super_rate) = patch.super_rate {
            employee.super_rate = Some(super_rate);
        }
        if let Some(bank) = patch.bank {
            employee.bank = bank;
        }
        if let Some(status) = patch.status {
            employee.status = status;
        }
        validate_employee(&employee)?;

        let email = employee.email.clone();
        let stored = self.employees.update(employee).map_err(|e| match e {
            RepositoryError::NotFound => EngineError::EmployeeNotFound {
                employee_id: id.to_string(),
            },
            other => duplicate_or_store(other, &email),
        })?;

        info!(employee_id = %stored.id, status = ?stored.status, "Updated employee");
        Ok(stored)
    }

    /// Returns every employee.
    pub fn list(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.list()?)
    }

    /// Returns active employees, restricted to `ids` when given.
    pub fn find_active(&self, ids: Option<&[EmployeeId]>) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.find_active(ids)?)
    }

    /// Looks up an employee by id.
    pub fn find_by_id(&self, id: &EmployeeId) -> EngineResult<Option<Employee>> {
        Ok(self.employees.get(id)?)
    }
}

fn duplicate_or_store(error: RepositoryError, email: &str) -> EngineError {
    match error {
        RepositoryError::Conflict(_) => EngineError::DuplicateEmployee {
            email: email.to_string(),
        },
        other => other.into(),
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_employee(employee: &Employee) -> EngineResult<()> {
    if employee.first_name.is_empty() {
        return Err(EngineError::validation("first_name", "must not be blank"));
    }
    if employee.last_name.is_empty() {
        return Err(EngineError::validation("last_name", "must not be blank"));
    }
    if !is_valid_email(&employee.email) {
        return Err(EngineError::validation(
            "email",
            format!("'{}' is not a valid email address", employee.email),
        ));
    }
    if employee.base_hourly_rate < Decimal::ZERO {
        return Err(EngineError::validation(
            "base_hourly_rate",
            "must not be negative",
        ));
    }
    if employee.super_rate.is_some_and(|rate| rate < Decimal::ZERO) {
        return Err(EngineError::validation("super_rate", "must not be negative"));
    }
    validate_bank(&employee.bank)
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn validate_bank(bank: &BankDetails) -> EngineResult<()> {
    let bsb_ok = bank.bsb.len() == 7
        && bank.bsb.char_indices().all(|(i, c)| {
            if i == 3 {
                c == '-'
            } else {
                c.is_ascii_digit()
            }
        });
    if !bsb_ok {
        return Err(EngineError::validation(
            "bank.bsb",
            format!("'{}' must be formatted ddd-ddd", bank.bsb),
        ));
    }

    let account_ok = (6..=12).contains(&bank.account.len())
        && bank.account.chars().all(|c| c.is_ascii_digit());
    if !account_ok {
        return Err(EngineError::validation(
            "bank.account",
            "must be 6 to 12 digits",
        ));
    }
    Ok(())
}

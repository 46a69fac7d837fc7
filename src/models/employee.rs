//! Employee model and related types.
//!
//! This module defines the [`Employee`] record held by the employee registry,
//! its canonical [`EmployeeId`], and the input shapes used to onboard and
//! update employees.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical employee reference (`EMP-` followed by 7 uppercase hex chars).
///
/// This is the only employee identifier used by the engine; storage-level
/// keys never leak past the store boundary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(prefixed_code("EMP"))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds `PREFIX-XXXXXXX` from the tail of a random v4 UUID.
pub(crate) fn prefixed_code(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}-{}", prefix, &hex[hex.len() - 7..])
}

/// Whether an employee participates in timesheets and payruns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeStatus {
    /// Eligible for timesheets and payruns.
    #[default]
    Active,
    /// Soft-deleted or suspended; excluded from all payroll operations.
    Inactive,
}

/// The pay basis of an employee. Only hourly employees are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeType {
    /// Paid per hour worked.
    #[default]
    Hourly,
}

/// Bank account the employee is paid into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// Bank-state-branch number, formatted `ddd-ddd`.
    pub bsb: String,
    /// Account number, 6 to 12 digits.
    pub account: String,
}

/// An employee as held by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Canonical identifier.
    pub id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Lower-cased, unique email address.
    pub email: String,
    /// Pay basis.
    pub employee_type: EmployeeType,
    /// Base hourly rate (non-negative).
    pub base_hourly_rate: Decimal,
    /// Superannuation rate as a fraction; the configured default applies when unset.
    #[serde(default)]
    pub super_rate: Option<Decimal>,
    /// Payment details.
    pub bank: BankDetails,
    /// Participation status.
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee participates in payroll.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{BankDetails, Employee, EmployeeId, EmployeeStatus, EmployeeType};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: EmployeeId::from("EMP-0000001"),
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Lovelace".to_string(),
    ///     email: "ada@example.com".to_string(),
    ///     employee_type: EmployeeType::Hourly,
    ///     base_hourly_rate: Decimal::new(20, 0),
    ///     super_rate: None,
    ///     bank: BankDetails { bsb: "083-123".to_string(), account: "12345678".to_string() },
    ///     status: EmployeeStatus::Active,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns the employee's super rate, or `default_rate` when unset.
    pub fn super_rate_or(&self, default_rate: Decimal) -> Decimal {
        self.super_rate.unwrap_or(default_rate)
    }
}

/// Input for onboarding a new employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address; normalized to lower case.
    pub email: String,
    /// Pay basis.
    #[serde(default)]
    pub employee_type: EmployeeType,
    /// Base hourly rate.
    pub base_hourly_rate: Decimal,
    /// Optional super rate.
    #[serde(default)]
    pub super_rate: Option<Decimal>,
    /// Payment details.
    pub bank: BankDetails,
    /// Initial status, `ACTIVE` when omitted.
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// Partial update of an employee; `None` fields keep their prior value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeePatch {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New base hourly rate.
    pub base_hourly_rate: Option<Decimal>,
    /// New super rate.
    pub super_rate: Option<Decimal>,
    /// New payment details.
    pub bank: Option<BankDetails>,
    /// New status.
    pub status: Option<EmployeeStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(status: EmployeeStatus) -> Employee {
        Employee {
            id: EmployeeId::from("EMP-00000A1"),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            employee_type: EmployeeType::Hourly,
            base_hourly_rate: dec("32.50"),
            super_rate: Some(dec("0.12")),
            bank: BankDetails {
                bsb: "083-123".to_string(),
                account: "12345678".to_string(),
            },
            status,
        }
    }

    #[test]
    fn test_generated_id_shape() {
        let id = EmployeeId::generate();
        let s = id.as_str();
        assert_eq!(s.len(), 11);
        assert!(s.starts_with("EMP-"));
        assert!(s[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_is_active() {
        assert!(create_test_employee(EmployeeStatus::Active).is_active());
        assert!(!create_test_employee(EmployeeStatus::Inactive).is_active());
    }

    #[test]
    fn test_super_rate_fallback() {
        let mut employee = create_test_employee(EmployeeStatus::Active);
        assert_eq!(employee.super_rate_or(dec("0.115")), dec("0.12"));
        employee.super_rate = None;
        assert_eq!(employee.super_rate_or(dec("0.115")), dec("0.115"));
    }

    #[test]
    fn test_deserialize_employee_defaults() {
        let json = r#"{
            "id": "EMP-00000B2",
            "first_name": "Alan",
            "last_name": "Turing",
            "email": "alan@example.com",
            "employee_type": "HOURLY",
            "base_hourly_rate": "20",
            "bank": { "bsb": "083-123", "account": "123456" }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id.as_str(), "EMP-00000B2");
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(employee.super_rate, None);
        assert_eq!(employee.base_hourly_rate, dec("20"));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Inactive).unwrap(),
            "\"INACTIVE\""
        );
    }

    #[test]
    fn test_patch_fields_default_to_none() {
        let patch: EmployeePatch = serde_json::from_str(r#"{"status": "INACTIVE"}"#).unwrap();
        assert_eq!(patch.status, Some(EmployeeStatus::Inactive));
        assert!(patch.email.is_none());
        assert!(patch.base_hourly_rate.is_none());
    }
}

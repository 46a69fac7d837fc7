//! Payrun result models.
//!
//! This module contains the [`Payrun`] type and the [`Payslip`] and
//! [`PayrunTotals`] it is assembled from.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// One employee's computed pay for a payrun.
///
/// All monetary amounts and hours are rounded to 2 decimal places.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EmployeeId, Payslip};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let payslip = Payslip {
///     employee_id: EmployeeId::from("EMP-0000001"),
///     normal_hours: Decimal::from_str("7.50").unwrap(),
///     overtime_hours: Decimal::ZERO,
///     gross: Decimal::from_str("150.00").unwrap(),
///     tax: Decimal::ZERO,
///     super_amount: Decimal::from_str("17.25").unwrap(),
///     net: Decimal::from_str("150.00").unwrap(),
/// };
/// let json = serde_json::to_value(&payslip).unwrap();
/// assert_eq!(json["super"], "17.25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The employee paid.
    pub employee_id: EmployeeId,
    /// Hours paid at the base rate.
    pub normal_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: Decimal,
    /// Pre-tax pay including allowances.
    pub gross: Decimal,
    /// Progressive tax on gross.
    pub tax: Decimal,
    /// Employer superannuation contribution, not deducted from net.
    #[serde(rename = "super")]
    pub super_amount: Decimal,
    /// Gross minus tax.
    pub net: Decimal,
}

/// Aggregate amounts across every payslip in a payrun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrunTotals {
    /// Sum of gross pay.
    pub gross: Decimal,
    /// Sum of tax.
    pub tax: Decimal,
    /// Sum of superannuation.
    #[serde(rename = "super")]
    pub super_amount: Decimal,
    /// Sum of net pay.
    pub net: Decimal,
}

/// A persisted payrun. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payrun {
    /// Generated identifier (`PAYRUN-` followed by 7 uppercase hex chars).
    pub id: String,
    /// First day of the paid period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the paid period (inclusive).
    pub period_end: NaiveDate,
    /// Totals, each rounded once after summation.
    pub totals: PayrunTotals,
    /// One payslip per paid employee.
    pub payslips: Vec<Payslip>,
    /// When the payrun was executed.
    pub created_at: DateTime<Utc>,
}

//! Payslip assembly.
//!
//! Drives the hours classifier and tax schedule for one employee and
//! produces a rounded [`Payslip`] alongside the unrounded amounts the payrun
//! accumulates into its totals.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Payslip};

use super::hours_classifier::{HoursClassification, classify_hours};
use super::rounding::round_money;

/// Unrounded monetary amounts for one payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayAmounts {
    /// Pre-tax pay including allowances.
    pub gross: Decimal,
    /// Tax on gross.
    pub tax: Decimal,
    /// Employer superannuation contribution.
    pub super_amount: Decimal,
    /// Gross minus tax.
    pub net: Decimal,
}

/// The result of calculating a payslip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipCalculation {
    /// The rounded payslip.
    pub payslip: Payslip,
    /// The hours split before rounding.
    pub hours: HoursClassification,
    /// The amounts before rounding.
    pub amounts: PayAmounts,
}

/// Calculates an employee's payslip from their paid minutes and allowances.
///
/// 1. Classify `total_minutes` into normal and overtime hours
/// 2. `gross = normal * rate + overtime * rate * multiplier + allowances`
/// 3. `tax` from the configured progressive schedule
/// 4. `super = gross * super_rate` (configured default when the employee has none)
/// 5. `net = gross - tax`; super is recorded but not deducted
///
/// Every payslip field is rounded to 2 decimal places; `amounts` keeps the
/// unrounded values.
///
/// # Errors
///
/// Returns `Validation` if gross or super falls outside the range a
/// [`Decimal`] can hold.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payslip;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{BankDetails, Employee, EmployeeId, EmployeeStatus, EmployeeType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
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
///
/// let result = calculate_payslip(&employee, 450, Decimal::ZERO, &PayrollConfig::default())?;
/// assert_eq!(result.payslip.gross, Decimal::new(150, 0));
/// assert_eq!(result.payslip.super_amount, Decimal::from_str("17.25").unwrap());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_payslip(
    employee: &Employee,
    total_minutes: i64,
    allowances: Decimal,
    config: &PayrollConfig,
) -> EngineResult<PayslipCalculation> {
    let hours = classify_hours(total_minutes, config.normal_time_threshold());
    let rate = employee.base_hourly_rate;
    let out_of_range = |field: &str| {
        EngineError::validation(
            field,
            format!("pay for employee '{}' is out of range", employee.id),
        )
    };

    let normal_pay = hours.normal_hours.checked_mul(rate);
    let overtime_pay = hours
        .overtime_hours
        .checked_mul(rate)
        .and_then(|pay| pay.checked_mul(config.overtime_multiplier()));
    let gross = normal_pay
        .zip(overtime_pay)
        .and_then(|(normal, overtime)| normal.checked_add(overtime))
        .and_then(|pay| pay.checked_add(allowances))
        .ok_or_else(|| out_of_range("gross"))?;

    // tax never exceeds gross, so neither it nor net can overflow
    let tax = config.tax_schedule().calculate(gross);
    let super_amount = gross
        .checked_mul(employee.super_rate_or(config.default_super_rate()))
        .ok_or_else(|| out_of_range("super_amount"))?;
    let net = gross - tax;

    debug!(
        employee_id = %employee.id,
        total_minutes,
        normal_hours = %hours.normal_hours.normalize(),
        overtime_hours = %hours.overtime_hours.normalize(),
        gross = %gross.normalize(),
        tax = %tax.normalize(),
        "Calculated payslip"
    );

    let payslip = Payslip {
        employee_id: employee.id.clone(),
        normal_hours: round_money(hours.normal_hours),
        overtime_hours: round_money(hours.overtime_hours),
        gross: round_money(gross),
        tax: round_money(tax),
        super_amount: round_money(super_amount),
        net: round_money(net),
    };

    Ok(PayslipCalculation {
        payslip,
        hours,
        amounts: PayAmounts {
            gross,
            tax,
            super_amount,
            net,
        },
    })
}

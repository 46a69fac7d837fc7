//! Payrun orchestrator.
//!
//! Resolves the eligible employees for a period, aggregates their timesheet
//! minutes and allowances, calculates a payslip per employee, and persists
//! the resulting [`Payrun`] in a single write.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::{PayAmounts, calculate_payslip, net_minutes, round_money};
use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeId, PayPeriod, Payrun, PayrunTotals, Timesheet, prefixed_code};
use crate::store::{EmployeeRepository, PayrunRepository, TimesheetRepository};

/// Paid minutes and allowances gathered for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkSummary {
    /// Sum of net minutes over entries dated inside the period.
    pub total_minutes: i64,
    /// Sum of allowances over every matched timesheet.
    pub allowances: Decimal,
}

/// Sums minutes and allowances across `timesheets`, counting only entries
/// dated within `period`.
///
/// # Errors
///
/// Returns `InvalidEntry` if any counted entry yields negative paid minutes,
/// or `Validation` if the allowances sum out of range.
pub fn summarize_work(timesheets: &[Timesheet], period: &PayPeriod) -> EngineResult<WorkSummary> {
    let mut summary = WorkSummary::default();
    for timesheet in timesheets {
        for entry in timesheet.entries_within(period) {
            summary.total_minutes += net_minutes(entry)?;
        }
        summary.allowances = summary
            .allowances
            .checked_add(timesheet.allowances)
            .ok_or_else(|| {
                EngineError::validation(
                    "allowances",
                    format!(
                        "allowances for employee '{}' are out of range",
                        timesheet.employee_id
                    ),
                )
            })?;
    }
    Ok(summary)
}

fn accumulate(totals: &mut PayAmounts, amounts: &PayAmounts) -> EngineResult<()> {
    let sum = |total: Decimal, amount: Decimal, field: &str| {
        total.checked_add(amount).ok_or_else(|| {
            EngineError::validation(field, "payrun total is out of range")
        })
    };
    totals.gross = sum(totals.gross, amounts.gross, "gross")?;
    totals.tax = sum(totals.tax, amounts.tax, "tax")?;
    totals.super_amount = sum(totals.super_amount, amounts.super_amount, "super_amount")?;
    totals.net = sum(totals.net, amounts.net, "net")?;
    Ok(())
}

/// Runs and lists payruns.
#[derive(Clone)]
pub struct PayrunService {
    employees: Arc<dyn EmployeeRepository>,
    timesheets: Arc<dyn TimesheetRepository>,
    payruns: Arc<dyn PayrunRepository>,
    config: Arc<PayrollConfig>,
}

impl PayrunService {
    /// Creates an orchestrator over the given repositories and configuration.
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        timesheets: Arc<dyn TimesheetRepository>,
        payruns: Arc<dyn PayrunRepository>,
        config: Arc<PayrollConfig>,
    ) -> Self {
        Self {
            employees,
            timesheets,
            payruns,
            config,
        }
    }

    /// Runs payroll for `period`, optionally restricted to `employee_ids`.
    /// An empty filter selects every active employee.
    ///
    /// Employees without a timesheet intersecting the period are skipped.
    /// Totals accumulate the unrounded payslip amounts and are rounded once.
    /// Nothing is written unless every employee was processed successfully.
    ///
    /// # Errors
    ///
    /// - `Validation` if the period ends before it starts
    /// - `NoEligibleEmployees` if no active employee matches
    /// - `NoPayslipsGenerated` if no matching employee has a timesheet
    /// - `InvalidEntry` if a stored entry cannot be converted to minutes
    /// - `Validation` if an amount falls outside the representable range
    pub fn run(
        &self,
        period: PayPeriod,
        employee_ids: Option<&[EmployeeId]>,
    ) -> EngineResult<Payrun> {
        let start_time = Instant::now();
        period.validate()?;

        let employee_ids = employee_ids.filter(|ids| !ids.is_empty());
        let employees = self.employees.find_active(employee_ids)?;
        if employees.is_empty() {
            return Err(EngineError::NoEligibleEmployees);
        }

        let mut payslips = Vec::with_capacity(employees.len());
        let mut running = PayAmounts {
            gross: Decimal::ZERO,
            tax: Decimal::ZERO,
            super_amount: Decimal::ZERO,
            net: Decimal::ZERO,
        };

        for employee in &employees {
            let timesheets = self.timesheets.find_intersecting(&employee.id, &period)?;
            if timesheets.is_empty() {
                debug!(employee_id = %employee.id, "No timesheet for period, skipping");
                continue;
            }

            let work = summarize_work(&timesheets, &period)?;
            let calculation =
                calculate_payslip(employee, work.total_minutes, work.allowances, &self.config)?;
            accumulate(&mut running, &calculation.amounts)?;
            payslips.push(calculation.payslip);
        }

        if payslips.is_empty() {
            return Err(EngineError::NoPayslipsGenerated {
                period_start: period.start_date,
                period_end: period.end_date,
            });
        }

        let payrun = Payrun {
            id: prefixed_code("PAYRUN"),
            period_start: period.start_date,
            period_end: period.end_date,
            totals: PayrunTotals {
                gross: round_money(running.gross),
                tax: round_money(running.tax),
                super_amount: round_money(running.super_amount),
                net: round_money(running.net),
            },
            payslips,
            created_at: Utc::now(),
        };
        let stored = self.payruns.insert(payrun)?;

        info!(
            payrun_id = %stored.id,
            period_start = %stored.period_start,
            period_end = %stored.period_end,
            eligible = employees.len(),
            payslips = stored.payslips.len(),
            gross = %stored.totals.gross,
            duration_us = start_time.elapsed().as_micros(),
            "Payrun completed"
        );
        Ok(stored)
    }

    /// Returns every stored payrun, newest first.
    pub fn list_payruns(&self) -> EngineResult<Vec<Payrun>> {
        Ok(self.payruns.list()?)
    }
}

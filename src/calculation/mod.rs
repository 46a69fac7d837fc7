//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure calculation functions behind a payrun:
//! converting timesheet entries into paid minutes, classifying hours into
//! normal time and overtime, applying the progressive tax schedule, monetary
//! rounding, and assembling a payslip from those pieces.

mod hours_classifier;
mod payslip;
mod progressive_tax;
mod rounding;
mod time_interval;

pub use hours_classifier::{
    DEFAULT_NORMAL_TIME_THRESHOLD, HoursClassification, classify_hours, minutes_to_hours,
};
pub use payslip::{PayAmounts, PayslipCalculation, calculate_payslip};
pub use progressive_tax::{
    BracketBase, DEFAULT_TAX_BRACKETS, TaxBracket, TaxSchedule, calculate_tax,
};
pub use rounding::round_money;
pub use time_interval::{MINUTES_PER_HOUR, net_minutes, parse_time_of_day};

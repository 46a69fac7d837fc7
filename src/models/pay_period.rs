//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: an inclusive calendar range
//! used both for timesheet periods and for payrun requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive `[start_date, end_date]` calendar range.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 7).unwrap(),
/// );
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a new period. Use [`PayPeriod::validate`] to check ordering.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Ensures the period does not end before it starts.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::validation(
                "period_end",
                format!(
                    "period end {} is before period start {}",
                    self.end_date, self.start_date
                ),
            ));
        }
        Ok(())
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if two timesheet periods conflict.
    ///
    /// Uses the strict test `self.start < other.end && self.end > other.start`,
    /// so periods that merely touch on a boundary day do not conflict.
    /// Identical ranges always conflict: two copies of the same single-day
    /// period fail the strict test because `start == end`.
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
    ///
    /// assert!(PayPeriod::new(d(1), d(7)).overlaps(&PayPeriod::new(d(5), d(10))));
    /// assert!(!PayPeriod::new(d(1), d(7)).overlaps(&PayPeriod::new(d(8), d(14))));
    /// assert!(PayPeriod::new(d(3), d(3)).overlaps(&PayPeriod::new(d(3), d(3))));
    /// ```
    pub fn overlaps(&self, other: &PayPeriod) -> bool {
        (self.start_date < other.end_date && self.end_date > other.start_date) || self == other
    }

    /// Returns true if the two ranges share at least one calendar day.
    pub fn intersects(&self, other: &PayPeriod) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }
}

//! Normal-time and overtime classification.
//!
//! Splits the total paid minutes of a period into normal hours (up to the
//! normal-time threshold) and overtime hours (everything above it).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::time_interval::MINUTES_PER_HOUR;

/// Default normal-time threshold in hours per pay period.
pub const DEFAULT_NORMAL_TIME_THRESHOLD: Decimal = Decimal::from_parts(38, 0, 0, false, 0);

/// The split of a period's hours into normal time and overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursClassification {
    /// Hours up to the threshold.
    pub normal_hours: Decimal,
    /// Hours exceeding the threshold; zero when at or under it.
    pub overtime_hours: Decimal,
}

impl HoursClassification {
    /// Total hours represented by this classification.
    pub fn total_hours(&self) -> Decimal {
        self.normal_hours + self.overtime_hours
    }
}

/// Converts whole minutes into decimal hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

/// Classifies a period's paid minutes against the normal-time threshold.
///
/// `normal = min(total, threshold)` and `overtime = max(total - threshold, 0)`,
/// so `normal + overtime` always equals `total_minutes / 60`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{classify_hours, DEFAULT_NORMAL_TIME_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let under = classify_hours(450, DEFAULT_NORMAL_TIME_THRESHOLD);
/// assert_eq!(under.normal_hours, Decimal::new(75, 1));
/// assert_eq!(under.overtime_hours, Decimal::ZERO);
///
/// let over = classify_hours(42 * 60, DEFAULT_NORMAL_TIME_THRESHOLD);
/// assert_eq!(over.normal_hours, Decimal::new(38, 0));
/// assert_eq!(over.overtime_hours, Decimal::new(4, 0));
/// ```
pub fn classify_hours(total_minutes: i64, threshold: Decimal) -> HoursClassification {
    let total_hours = minutes_to_hours(total_minutes);

    let normal_hours = total_hours.min(threshold);
    let overtime_hours = (total_hours - threshold).max(Decimal::ZERO);

    HoursClassification {
        normal_hours,
        overtime_hours,
    }
}

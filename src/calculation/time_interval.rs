//! Time interval calculation.
//!
//! Converts a single [`TimesheetEntry`] into net paid minutes: the span
//! between its start and end time of day, minus the unpaid break.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};
use crate::models::TimesheetEntry;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Parses a strict `HH:MM` 24-hour time of day.
///
/// Both fields must be exactly two digits; `24:00` and `9:00` are rejected.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
/// assert_eq!(parse_time_of_day("9:30"), None);
/// assert_eq!(parse_time_of_day("24:00"), None);
/// ```
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_formed {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Calculates the net paid minutes for a single timesheet entry.
///
/// Both times are anchored to midnight of `entry.date`, so a span never
/// crosses midnight. The result is `(end - start)` in whole minutes minus
/// `unpaid_break_minutes`; no rounding is applied.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEntry`] if either time is not a valid
/// `HH:MM` time of day, or if the result would be negative (end before
/// start, or a break longer than the span).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::net_minutes;
/// use payroll_engine::models::TimesheetEntry;
/// use chrono::NaiveDate;
///
/// let entry = TimesheetEntry {
///     date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     start: "09:00".to_string(),
///     end: "17:00".to_string(),
///     unpaid_break_minutes: 30,
/// };
/// assert_eq!(net_minutes(&entry).unwrap(), 450);
/// ```
pub fn net_minutes(entry: &TimesheetEntry) -> EngineResult<i64> {
    let start_time = parse_time_of_day(&entry.start).ok_or_else(|| EngineError::InvalidEntry {
        date: entry.date,
        message: format!("start time '{}' is not a valid HH:MM time", entry.start),
    })?;
    let end_time = parse_time_of_day(&entry.end).ok_or_else(|| EngineError::InvalidEntry {
        date: entry.date,
        message: format!("end time '{}' is not a valid HH:MM time", entry.end),
    })?;

    let start = entry.date.and_time(start_time);
    let end = entry.date.and_time(end_time);

    let span_minutes = (end - start).num_minutes();
    let minutes = span_minutes - i64::from(entry.unpaid_break_minutes);

    if minutes < 0 {
        return Err(EngineError::InvalidEntry {
            date: entry.date,
            message: format!(
                "{} to {} with {} unpaid break minutes yields {} paid minutes",
                entry.start, entry.end, entry.unpaid_break_minutes, minutes
            ),
        });
    }

    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(start: &str, end: &str, unpaid_break_minutes: u32) -> TimesheetEntry {
        TimesheetEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            start: start.to_string(),
            end: end.to_string(),
            unpaid_break_minutes,
        }
    }

    #[test]
    fn test_8_hour_span_no_break() {
        assert_eq!(net_minutes(&entry("09:00", "17:00", 0)).unwrap(), 480);
    }

    #[test]
    fn test_span_with_30min_unpaid_break() {
        assert_eq!(net_minutes(&entry("09:00", "17:00", 30)).unwrap(), 450);
    }

    #[test]
    fn test_uneven_minutes() {
        assert_eq!(net_minutes(&entry("08:45", "12:10", 15)).unwrap(), 190);
    }

    #[test]
    fn test_zero_duration_span() {
        assert_eq!(net_minutes(&entry("09:00", "09:00", 0)).unwrap(), 0);
    }

    #[test]
    fn test_break_consuming_whole_span_is_zero() {
        assert_eq!(net_minutes(&entry("09:00", "10:00", 60)).unwrap(), 0);
    }

    #[test]
    fn test_break_longer_than_span_rejected() {
        let err = net_minutes(&entry("09:00", "10:00", 61)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEntry { .. }));
    }

    #[test]
    fn test_end_before_start_rejected() {
        // Spans are anchored to the entry date, so 22:00-06:00 does not wrap.
        let err = net_minutes(&entry("22:00", "06:00", 0)).unwrap_err();
        assert!(err.to_string().contains("-960 paid minutes"));
    }

    #[test]
    fn test_malformed_start_rejected() {
        let err = net_minutes(&entry("9am", "17:00", 0)).unwrap_err();
        assert!(err.to_string().contains("start time '9am'"));
    }

    #[test]
    fn test_out_of_range_end_rejected() {
        let err = net_minutes(&entry("09:00", "24:00", 0)).unwrap_err();
        assert!(err.to_string().contains("end time '24:00'"));
    }

    #[test]
    fn test_parse_time_of_day_bounds() {
        assert_eq!(parse_time_of_day("00:00"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time_of_day("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(parse_time_of_day("12:60"), None);
        assert_eq!(parse_time_of_day("12-30"), None);
        assert_eq!(parse_time_of_day("12:3"), None);
        assert_eq!(parse_time_of_day(""), None);
    }
}

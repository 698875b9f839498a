//! Attendance entry model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single raw attendance record from the time-tracking UI.
///
/// A worker may have zero or more entries per month, including several
/// entries for the same calendar day. `man_days` is fractional: 0.5
/// records a half-day, and values above 1.0 record overtime volume.
///
/// # Examples
///
/// ```
/// use daywage_engine::models::AttendanceEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = AttendanceEntry {
///     work_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     man_days: Decimal::new(5, 1), // 0.5
/// };
/// assert_eq!(entry.man_days.to_string(), "0.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The calendar date the work was performed.
    pub work_date: NaiveDate,
    /// The labor volume recorded for that date, in man-days.
    pub man_days: Decimal,
}

//! Attendance aggregation.
//!
//! This module counts qualifying attendance days for one employee within one
//! calendar month. The counting rule is a pure function over fetched rows so
//! it can be tested without a store; the store-backed wrapper lives in the
//! engine.

use crate::models::{AttendanceDay, PayMonth};

/// The aggregated attendance figures for one employee and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    /// Entries counted as present (present + late).
    pub days_present: u32,
    /// Calendar days in the month.
    pub total_days: u32,
}

/// Counts qualifying attendance days within a month.
///
/// An entry qualifies when its date falls inside `month` and its status
/// counts as present (present or late; half-day entries do not count).
/// `total_days` is the month's raw calendar day count; weekends and holidays
/// are not excluded.
///
/// # Arguments
///
/// * `days` - The attendance entries fetched for the employee and month
/// * `month` - The payroll month being aggregated
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::summarize_attendance;
/// use payroll_engine::models::{AttendanceDay, AttendanceStatus, PayMonth};
/// use std::str::FromStr;
///
/// let month = PayMonth::from_str("2026-03").unwrap();
/// let days = vec![AttendanceDay {
///     company_id: "acme".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     status: AttendanceStatus::Present,
/// }];
///
/// let summary = summarize_attendance(&days, month);
/// assert_eq!(summary.days_present, 1);
/// assert_eq!(summary.total_days, 31);
/// ```
pub fn summarize_attendance(days: &[AttendanceDay], month: PayMonth) -> AttendanceSummary {
    let days_present = days
        .iter()
        .filter(|day| month.contains(day.date) && day.status.counts_as_present())
        .count() as u32;

    AttendanceSummary {
        days_present,
        total_days: month.days_in_month(),
    }
}

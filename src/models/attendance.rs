//! Attendance models.
//!
//! Attendance records are a read-only input: the engine counts them per
//! month but never creates or mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The recorded status of a single attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Checked in on time.
    Present,
    /// No attendance recorded for the day.
    Absent,
    /// Checked in after the grace period.
    Late,
    /// Worked half of the scheduled day.
    HalfDay,
}

impl AttendanceStatus {
    /// Whether this status counts toward an employee's days present.
    ///
    /// Present and late days count in full; half-day entries do not count
    /// at all toward the prorated salary.
    pub fn counts_as_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

/// One attendance entry for one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The company (tenant) the entry belongs to.
    pub company_id: String,
    /// The employee the entry was recorded for.
    pub employee_id: String,
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}

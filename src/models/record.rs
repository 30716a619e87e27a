//! The persisted payroll record and its status lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayMonth;

/// The lifecycle state of a payroll record.
///
/// Records are created `Pending` and move to exactly one terminal state:
/// `Paid` or `Cancelled`. No transition leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Generated, awaiting review.
    Pending,
    /// Paid out; `paid_date` records when.
    Paid,
    /// Cancelled before payment.
    Cancelled,
}

impl PayrollStatus {
    /// Whether the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PayrollStatus::Paid | PayrollStatus::Cancelled)
    }
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PayrollStatus::Pending => "pending",
            PayrollStatus::Paid => "paid",
            PayrollStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// One generated payroll row, unique per `(company, employee, month)`.
///
/// Every monetary field is a snapshot taken at generation time. The record
/// is never overwritten by a later generation run; only its status (and the
/// status-driven `paid_date`/`updated_at`) ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Surrogate key used by status-transition operations.
    pub id: Uuid,
    /// The company (tenant) that owns the record.
    pub company_id: String,
    /// The employee the record was generated for.
    pub employee_id: String,
    /// The payroll month the record covers.
    pub month: PayMonth,
    /// Calendar days in the month.
    pub total_days: u32,
    /// Attendance days counted as present (present + late).
    pub days_present: u32,
    /// The employee's monthly salary at generation time.
    pub basic_salary: Decimal,
    /// Overtime pay applied for the month.
    pub overtime: Decimal,
    /// Bonus pay applied for the month.
    pub bonuses: Decimal,
    /// Deductions applied for the month.
    pub deductions: Decimal,
    /// The final payable amount, stored rather than recomputed on read.
    pub total_salary: Decimal,
    /// Lifecycle state.
    pub status: PayrollStatus,
    /// Set exactly when the record transitions to `Paid`.
    pub paid_date: Option<DateTime<Utc>>,
    /// Free-form administrative notes.
    pub notes: Option<String>,
    /// When the record was inserted into the ledger.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

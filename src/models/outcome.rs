//! Batch outcome models.
//!
//! A generation run never succeeds or fails atomically: it reports per-item
//! outcomes so callers can render "generated for N of M employees". The
//! preview service reports the same partial-failure shape without writes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayMonth, PayrollRecord};

/// A single employee's failure within a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFailure {
    /// The employee whose generation failed.
    pub employee_id: String,
    /// Human-readable reason, taken from the underlying engine error.
    pub reason: String,
}

/// The aggregate result of one `generate` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Records created by this run, in no particular order.
    pub created: Vec<PayrollRecord>,
    /// Employees that already had a record for the month.
    pub skipped: Vec<String>,
    /// Employees whose generation failed; the rest of the batch is
    /// unaffected.
    pub errors: Vec<GenerationFailure>,
}

/// One employee's figures as they would be persisted, produced without
/// touching the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    /// The employee the row was computed for.
    pub employee_id: String,
    /// Display name from the directory, for admin review screens.
    pub display_name: String,
    /// The payroll month previewed.
    pub month: PayMonth,
    /// Calendar days in the month.
    pub total_days: u32,
    /// Attendance days counted as present.
    pub days_present: u32,
    /// The employee's current monthly salary.
    pub basic_salary: Decimal,
    /// Overtime that would be applied.
    pub overtime: Decimal,
    /// Bonuses that would be applied.
    pub bonuses: Decimal,
    /// Deductions that would be applied.
    pub deductions: Decimal,
    /// The payable amount a generation run would store.
    pub total_salary: Decimal,
}

/// The aggregate result of one `preview` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewOutcome {
    /// Computed rows, one per successfully previewed employee.
    pub rows: Vec<PreviewRow>,
    /// Employees whose preview failed, same shape as generation errors.
    pub errors: Vec<GenerationFailure>,
}

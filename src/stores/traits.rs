//! Collaborator store traits.
//!
//! The attendance store and the employee directory are owned by the
//! surrounding HR system; the engine only reads from them. These traits are
//! the seams a deployment plugs its backends into.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceDay, Employee};

/// Read-only access to attendance entries.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Fetches an employee's attendance entries with dates in
    /// `[from, to]` inclusive.
    ///
    /// An unreachable backend fails with `TransientStore`; in a batch run
    /// that fails only the one employee being aggregated.
    async fn entries_for_range(
        &self,
        company_id: &str,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceDay>>;
}

/// Read-only access to the company's employee directory.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Lists the company's active employees, the population of a
    /// generation run.
    ///
    /// A failure here is systemic: the caller aborts the whole batch.
    async fn active_employees(&self, company_id: &str) -> EngineResult<Vec<Employee>>;
}

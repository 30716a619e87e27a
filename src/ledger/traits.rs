//! The payroll ledger trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{PayMonth, PayrollRecord};

/// The authoritative store of payroll records.
///
/// The ledger owns two invariants: no two records ever share a
/// `(company, employee, month)` triple, and status moves only
/// `pending -> paid` or `pending -> cancelled`, each exactly once.
///
/// Uniqueness is enforced at insert: callers insert and catch
/// `DuplicateRecord` rather than pre-checking, so a race between two
/// concurrent generation runs resolves to exactly one stored record and one
/// benign rejection. Records are never deleted through this interface.
#[async_trait]
pub trait PayrollLedger: Send + Sync {
    /// Inserts a new record, stamping `created_at`/`updated_at`.
    ///
    /// Fails with `DuplicateRecord` if a record already exists for the
    /// record's `(company, employee, month)` triple.
    async fn insert(&self, record: PayrollRecord) -> EngineResult<PayrollRecord>;

    /// Looks up the record for a `(company, employee, month)` triple.
    async fn find(
        &self,
        company_id: &str,
        employee_id: &str,
        month: PayMonth,
    ) -> EngineResult<Option<PayrollRecord>>;

    /// Fetches a record by id, failing with `RecordNotFound` if absent.
    async fn get(&self, record_id: Uuid) -> EngineResult<PayrollRecord>;

    /// Lists a company's records, optionally filtered by month and/or
    /// employee.
    async fn list(
        &self,
        company_id: &str,
        month: Option<PayMonth>,
        employee_id: Option<&str>,
    ) -> EngineResult<Vec<PayrollRecord>>;

    /// Transitions a pending record to paid and stamps `paid_date`.
    ///
    /// Fails with `InvalidTransition` if the record is already paid or
    /// cancelled, leaving it untouched.
    async fn mark_paid(&self, record_id: Uuid) -> EngineResult<PayrollRecord>;

    /// Transitions a pending record to cancelled.
    ///
    /// Fails with `InvalidTransition` if the record is already paid or
    /// cancelled, leaving it untouched.
    async fn cancel(&self, record_id: Uuid) -> EngineResult<PayrollRecord>;
}

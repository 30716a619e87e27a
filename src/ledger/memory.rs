//! In-memory ledger implementation.
//!
//! The reference backend for tests, benches, and single-process
//! deployments. The unique index's occupied-entry check plays the role a
//! database's unique key plays in a persistent backend; the trait is the
//! seam for swapping one in.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayMonth, PayrollRecord, PayrollStatus};

use super::traits::PayrollLedger;

type TripleKey = (String, String, PayMonth);

#[derive(Debug, Default)]
struct LedgerInner {
    records: HashMap<Uuid, PayrollRecord>,
    by_triple: HashMap<TripleKey, Uuid>,
}

/// A [`PayrollLedger`] backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    inner: Mutex<LedgerInner>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The total number of stored records, across all companies.
    pub fn record_count(&self) -> usize {
        self.inner.lock().expect("ledger lock poisoned").records.len()
    }
}

#[async_trait]
impl PayrollLedger for InMemoryLedger {
    async fn insert(&self, mut record: PayrollRecord) -> EngineResult<PayrollRecord> {
        let mut inner = self.inner.lock().expect("ledger lock poisoned");

        let key = (
            record.company_id.clone(),
            record.employee_id.clone(),
            record.month,
        );

        match inner.by_triple.entry(key) {
            Entry::Occupied(_) => Err(EngineError::DuplicateRecord {
                company_id: record.company_id,
                employee_id: record.employee_id,
                month: record.month,
            }),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                record.created_at = now;
                record.updated_at = now;

                slot.insert(record.id);
                inner.records.insert(record.id, record.clone());
                Ok(record)
            }
        }
    }

    async fn find(
        &self,
        company_id: &str,
        employee_id: &str,
        month: PayMonth,
    ) -> EngineResult<Option<PayrollRecord>> {
        let inner = self.inner.lock().expect("ledger lock poisoned");

        let key = (company_id.to_string(), employee_id.to_string(), month);
        Ok(inner
            .by_triple
            .get(&key)
            .and_then(|id| inner.records.get(id))
            .cloned())
    }

    async fn get(&self, record_id: Uuid) -> EngineResult<PayrollRecord> {
        let inner = self.inner.lock().expect("ledger lock poisoned");

        inner
            .records
            .get(&record_id)
            .cloned()
            .ok_or(EngineError::RecordNotFound { record_id })
    }

    async fn list(
        &self,
        company_id: &str,
        month: Option<PayMonth>,
        employee_id: Option<&str>,
    ) -> EngineResult<Vec<PayrollRecord>> {
        let inner = self.inner.lock().expect("ledger lock poisoned");

        let mut records: Vec<PayrollRecord> = inner
            .records
            .values()
            .filter(|r| r.company_id == company_id)
            .filter(|r| month.is_none_or(|m| r.month == m))
            .filter(|r| employee_id.is_none_or(|e| r.employee_id == e))
            .cloned()
            .collect();

        records.sort_by(|a, b| {
            b.month
                .cmp(&a.month)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });
        Ok(records)
    }

    async fn mark_paid(&self, record_id: Uuid) -> EngineResult<PayrollRecord> {
        let mut inner = self.inner.lock().expect("ledger lock poisoned");

        let record = inner
            .records
            .get_mut(&record_id)
            .ok_or(EngineError::RecordNotFound { record_id })?;

        if record.status != PayrollStatus::Pending {
            return Err(EngineError::InvalidTransition {
                record_id,
                status: record.status,
            });
        }

        let now = Utc::now();
        record.status = PayrollStatus::Paid;
        record.paid_date = Some(now);
        record.updated_at = now;
        Ok(record.clone())
    }

    async fn cancel(&self, record_id: Uuid) -> EngineResult<PayrollRecord> {
        let mut inner = self.inner.lock().expect("ledger lock poisoned");

        let record = inner
            .records
            .get_mut(&record_id)
            .ok_or(EngineError::RecordNotFound { record_id })?;

        if record.status != PayrollStatus::Pending {
            return Err(EngineError::InvalidTransition {
                record_id,
                status: record.status,
            });
        }

        record.status = PayrollStatus::Cancelled;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn create_test_record(employee_id: &str, month: &str) -> PayrollRecord {
        let now = Utc::now();
        PayrollRecord {
            id: Uuid::new_v4(),
            company_id: "acme".to_string(),
            employee_id: employee_id.to_string(),
            month: PayMonth::from_str(month).unwrap(),
            total_days: 30,
            days_present: 25,
            basic_salary: Decimal::new(30_000, 0),
            overtime: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            deductions: Decimal::ZERO,
            total_salary: Decimal::new(25_000, 0),
            status: PayrollStatus::Pending,
            paid_date: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let ledger = InMemoryLedger::new();
        let record = ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();

        let found = ledger
            .find("acme", "emp_001", PayMonth::from_str("2026-03").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(record));
    }

    #[tokio::test]
    async fn test_duplicate_triple_is_rejected() {
        let ledger = InMemoryLedger::new();
        ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();

        let err = ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::DuplicateRecord { .. }));
        assert_eq!(ledger.record_count(), 1);
    }

    #[tokio::test]
    async fn test_same_employee_different_month_is_allowed() {
        let ledger = InMemoryLedger::new();
        ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();
        ledger
            .insert(create_test_record("emp_001", "2026-04"))
            .await
            .unwrap();

        assert_eq!(ledger.record_count(), 2);
    }

    #[tokio::test]
    async fn test_same_triple_different_company_is_allowed() {
        let ledger = InMemoryLedger::new();
        ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();

        let mut other = create_test_record("emp_001", "2026-03");
        other.company_id = "globex".to_string();
        ledger.insert(other).await.unwrap();

        assert_eq!(ledger.record_count(), 2);
    }

    #[tokio::test]
    async fn test_mark_paid_sets_status_and_paid_date() {
        let ledger = InMemoryLedger::new();
        let record = ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();

        let paid = ledger.mark_paid(record.id).await.unwrap();
        assert_eq!(paid.status, PayrollStatus::Paid);
        assert!(paid.paid_date.is_some());
    }

    #[tokio::test]
    async fn test_mark_paid_twice_fails_and_preserves_paid_date() {
        let ledger = InMemoryLedger::new();
        let record = ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();

        let paid = ledger.mark_paid(record.id).await.unwrap();
        let err = ledger.mark_paid(record.id).await.unwrap_err();

        assert!(matches!(
            err,
            EngineError::InvalidTransition {
                status: PayrollStatus::Paid,
                ..
            }
        ));
        let current = ledger.get(record.id).await.unwrap();
        assert_eq!(current.paid_date, paid.paid_date);
    }

    #[tokio::test]
    async fn test_cancel_pending_record() {
        let ledger = InMemoryLedger::new();
        let record = ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();

        let cancelled = ledger.cancel(record.id).await.unwrap();
        assert_eq!(cancelled.status, PayrollStatus::Cancelled);
        assert!(cancelled.paid_date.is_none());
    }

    #[tokio::test]
    async fn test_cancel_after_paid_fails() {
        let ledger = InMemoryLedger::new();
        let record = ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();

        ledger.mark_paid(record.id).await.unwrap();
        let err = ledger.cancel(record.id).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_transition_on_unknown_id_is_not_found() {
        let ledger = InMemoryLedger::new();
        let err = ledger.mark_paid(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, EngineError::RecordNotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_filters_by_month_and_employee() {
        let ledger = InMemoryLedger::new();
        ledger
            .insert(create_test_record("emp_001", "2026-03"))
            .await
            .unwrap();
        ledger
            .insert(create_test_record("emp_002", "2026-03"))
            .await
            .unwrap();
        ledger
            .insert(create_test_record("emp_001", "2026-04"))
            .await
            .unwrap();

        let march = PayMonth::from_str("2026-03").unwrap();
        let all = ledger.list("acme", None, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let march_only = ledger.list("acme", Some(march), None).await.unwrap();
        assert_eq!(march_only.len(), 2);

        let one = ledger
            .list("acme", Some(march), Some("emp_002"))
            .await
            .unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].employee_id, "emp_002");

        let none = ledger.list("globex", None, None).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_insert_stamps_timestamps() {
        let ledger = InMemoryLedger::new();
        let mut record = create_test_record("emp_001", "2026-03");
        record.created_at = chrono::DateTime::UNIX_EPOCH;
        record.updated_at = chrono::DateTime::UNIX_EPOCH;

        let stored = ledger.insert(record).await.unwrap();
        assert!(stored.created_at > chrono::DateTime::UNIX_EPOCH);
        assert_eq!(stored.created_at, stored.updated_at);
    }
}

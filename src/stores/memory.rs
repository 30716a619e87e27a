//! In-memory store implementations.
//!
//! Reference backends for tests, benches, and single-process deployments.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceDay, Employee};

use super::traits::{AttendanceStore, EmployeeDirectory};

/// An [`AttendanceStore`] backed by a vector of entries.
#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    entries: Mutex<Vec<AttendanceDay>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one attendance entry.
    pub fn record(&self, entry: AttendanceDay) {
        self.entries
            .lock()
            .expect("attendance store lock poisoned")
            .push(entry);
    }

    /// Adds a batch of attendance entries.
    pub fn record_all(&self, entries: impl IntoIterator<Item = AttendanceDay>) {
        self.entries
            .lock()
            .expect("attendance store lock poisoned")
            .extend(entries);
    }
}

#[async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn entries_for_range(
        &self,
        company_id: &str,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceDay>> {
        let entries = self
            .entries
            .lock()
            .expect("attendance store lock poisoned");

        Ok(entries
            .iter()
            .filter(|e| {
                e.company_id == company_id
                    && e.employee_id == employee_id
                    && e.date >= from
                    && e.date <= to
            })
            .cloned()
            .collect())
    }
}

/// An [`EmployeeDirectory`] backed by a vector of employees.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one employee.
    pub fn add(&self, employee: Employee) {
        self.employees
            .lock()
            .expect("employee directory lock poisoned")
            .push(employee);
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn active_employees(&self, company_id: &str) -> EngineResult<Vec<Employee>> {
        let employees = self
            .employees
            .lock()
            .expect("employee directory lock poisoned");

        Ok(employees
            .iter()
            .filter(|e| e.company_id == company_id && e.is_active())
            .cloned()
            .collect())
    }
}

//! Employee model and related types.
//!
//! This module defines the read-only employee input consumed by payroll
//! generation. The engine never writes employee rows; the directory that
//! owns them is an external collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee's standing in the company directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently employed and eligible for payroll generation.
    Active,
    /// On the books but not eligible (e.g. unpaid leave of absence).
    Inactive,
    /// No longer employed.
    Terminated,
}

/// Represents an employee as read from the company directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The company (tenant) the employee belongs to.
    pub company_id: String,
    /// Unique identifier for the employee within the company.
    pub employee_id: String,
    /// Display name, carried through for logs and preview rows.
    pub display_name: String,
    /// The configured monthly salary. Snapshotted into each payroll record
    /// at generation time; later edits never alter generated records.
    pub basic_salary: Decimal,
    /// The employee's standing in the directory.
    pub status: EmploymentStatus,
}

impl Employee {
    /// Returns true if the employee is eligible for payroll generation.
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }
}

//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation stages: attendance
//! summarization, salary proration, adjustment resolution, and the final
//! total under the single-rounding rule, plus the shared per-employee
//! computation that batch generation and preview both run.

mod attendance;
mod employee_pay;
mod proration;
mod resolver;
mod totals;

pub use attendance::{AttendanceSummary, summarize_attendance};
pub use employee_pay::{PayComputation, compute_employee_pay};
pub use proration::{ProrationResult, prorate_salary};
pub use resolver::AdjustmentSheet;
pub use totals::{TotalResult, calculate_total};

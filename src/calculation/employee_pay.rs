//! Per-employee pay computation.
//!
//! This is the single arithmetic path shared by batch generation and
//! preview. Both must produce identical figures for identical inputs, so
//! neither is allowed to re-implement any part of it.

use rust_decimal::Decimal;

use crate::config::{EngineSettings, ExcessAttendancePolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustments, Employee};

use super::attendance::AttendanceSummary;
use super::proration::prorate_salary;
use super::totals::calculate_total;

/// All figures computed for one employee in one month.
///
/// Batch generation persists these as a payroll record; preview returns them
/// as a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayComputation {
    /// Calendar days in the month.
    pub total_days: u32,
    /// The attendance count the proration actually used (post-policy).
    pub days_present: u32,
    /// The salary snapshot the computation was based on.
    pub basic_salary: Decimal,
    /// Salary per calendar day.
    pub daily_rate: Decimal,
    /// Salary earned for the counted days.
    pub earned_salary: Decimal,
    /// The adjustments applied.
    pub adjustments: Adjustments,
    /// The final payable amount.
    pub total_salary: Decimal,
}

/// Computes the pay figures for one employee.
///
/// Runs validation, the excess-attendance policy, proration, and the final
/// total in order. Fails with `EmployeeData` if the adjustments carry a
/// negative figure or the employee's salary is negative; such a failure
/// affects only this employee in a batch.
///
/// # Arguments
///
/// * `employee` - The employee being paid; `basic_salary` is snapshotted
/// * `summary` - The month's attendance aggregation
/// * `adjustments` - The resolved adjustments for this employee
/// * `settings` - Clamp policies to apply
pub fn compute_employee_pay(
    employee: &Employee,
    summary: &AttendanceSummary,
    adjustments: &Adjustments,
    settings: &EngineSettings,
) -> EngineResult<PayComputation> {
    adjustments.validate(&employee.employee_id)?;

    if employee.basic_salary < Decimal::ZERO {
        return Err(EngineError::EmployeeData {
            employee_id: employee.employee_id.clone(),
            message: "basic salary is negative".to_string(),
        });
    }

    let days_present = match settings.excess_attendance {
        ExcessAttendancePolicy::Allow => summary.days_present,
        ExcessAttendancePolicy::CapAtTotalDays => summary.days_present.min(summary.total_days),
    };

    let proration = prorate_salary(employee.basic_salary, days_present, summary.total_days);
    let total = calculate_total(proration.earned_salary, adjustments, settings.negative_total);

    Ok(PayComputation {
        total_days: summary.total_days,
        days_present,
        basic_salary: employee.basic_salary,
        daily_rate: proration.daily_rate,
        earned_salary: proration.earned_salary,
        adjustments: *adjustments,
        total_salary: total.total_salary,
    })
}

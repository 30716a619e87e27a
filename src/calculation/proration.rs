//! Salary proration.
//!
//! Converts a monthly base salary into the amount earned for the days
//! actually attended.

use rust_decimal::Decimal;

/// The result of prorating a monthly salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProrationResult {
    /// The salary attributable to one calendar day of the month.
    pub daily_rate: Decimal,
    /// The salary earned for the counted days.
    pub earned_salary: Decimal,
}

/// Prorates a monthly salary by attendance.
///
/// `daily_rate = basic_salary / total_days` and
/// `earned_salary = daily_rate * days_present`. No rounding happens here;
/// the final total is rounded exactly once downstream.
///
/// `total_days` must be greater than zero. This holds by construction since
/// it always comes from a calendar month (28 to 31 days). `days_present`
/// above `total_days` is not clamped here; the earned salary is then allowed
/// to exceed the basic salary unless the excess-attendance policy capped the
/// count upstream.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::prorate_salary;
/// use rust_decimal::Decimal;
///
/// let result = prorate_salary(Decimal::new(30_000, 0), 25, 30);
/// assert_eq!(result.daily_rate, Decimal::new(1_000, 0));
/// assert_eq!(result.earned_salary, Decimal::new(25_000, 0));
/// ```
pub fn prorate_salary(basic_salary: Decimal, days_present: u32, total_days: u32) -> ProrationResult {
    let daily_rate = basic_salary / Decimal::from(total_days);
    let earned_salary = daily_rate * Decimal::from(days_present);

    ProrationResult {
        daily_rate,
        earned_salary,
    }
}

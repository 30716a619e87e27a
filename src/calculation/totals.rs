//! Final pay calculation.
//!
//! Combines the prorated salary with adjustments under the engine's single
//! rounding rule.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::NegativeTotalPolicy;
use crate::models::Adjustments;

/// The result of the final pay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalResult {
    /// The sum before rounding, kept for diagnostics.
    pub unrounded: Decimal,
    /// The payable amount: rounded once to the nearest whole currency unit,
    /// then clamped if the negative-total policy says so.
    pub total_salary: Decimal,
}

/// Computes the final payable amount.
///
/// `total_salary = round(earned_salary + overtime + bonuses - deductions)`,
/// rounded to the nearest whole currency unit with midpoints away from zero.
/// Rounding is applied exactly once, here; intermediate stages keep full
/// precision. The total may be negative when deductions exceed earnings plus
/// bonuses unless the policy clamps it to zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_total;
/// use payroll_engine::config::NegativeTotalPolicy;
/// use payroll_engine::models::Adjustments;
/// use rust_decimal::Decimal;
///
/// let adjustments = Adjustments {
///     overtime: Decimal::new(500, 0),
///     bonuses: Decimal::ZERO,
///     deductions: Decimal::new(200, 0),
/// };
/// let result = calculate_total(
///     Decimal::new(25_000, 0),
///     &adjustments,
///     NegativeTotalPolicy::Allow,
/// );
/// assert_eq!(result.total_salary, Decimal::new(25_300, 0));
/// ```
pub fn calculate_total(
    earned_salary: Decimal,
    adjustments: &Adjustments,
    policy: NegativeTotalPolicy,
) -> TotalResult {
    let unrounded =
        earned_salary + adjustments.overtime + adjustments.bonuses - adjustments.deductions;

    let rounded = unrounded.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let total_salary = match policy {
        NegativeTotalPolicy::Allow => rounded,
        NegativeTotalPolicy::ClampToZero => rounded.max(Decimal::ZERO),
    };

    TotalResult {
        unrounded,
        total_salary,
    }
}

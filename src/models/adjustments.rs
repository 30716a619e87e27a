//! Per-employee pay adjustments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The manual adjustments applied on top of an employee's prorated salary
/// for one generation run.
///
/// All three figures are non-negative; deductions are subtracted at the
/// final calculation step. A missing adjustment entry means all zeroes.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Adjustments;
/// use rust_decimal::Decimal;
///
/// let adjustments = Adjustments {
///     overtime: Decimal::new(500, 0),
///     bonuses: Decimal::ZERO,
///     deductions: Decimal::new(200, 0),
/// };
/// assert!(adjustments.validate("emp_001").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Adjustments {
    /// Overtime pay for the month.
    #[serde(default)]
    pub overtime: Decimal,
    /// Bonus pay for the month.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Deductions from the month's pay.
    #[serde(default)]
    pub deductions: Decimal,
}

impl Adjustments {
    /// The zero adjustment set applied when no override exists.
    pub const ZERO: Adjustments = Adjustments {
        overtime: Decimal::ZERO,
        bonuses: Decimal::ZERO,
        deductions: Decimal::ZERO,
    };

    /// Validates that every figure is non-negative.
    ///
    /// Negative figures reject only the one employee they were supplied for.
    pub fn validate(&self, employee_id: &str) -> EngineResult<()> {
        let negative_field = if self.overtime < Decimal::ZERO {
            Some("overtime")
        } else if self.bonuses < Decimal::ZERO {
            Some("bonuses")
        } else if self.deductions < Decimal::ZERO {
            Some("deductions")
        } else {
            None
        };

        match negative_field {
            Some(field) => Err(EngineError::EmployeeData {
                employee_id: employee_id.to_string(),
                message: format!("{field} adjustment is negative"),
            }),
            None => Ok(()),
        }
    }
}

//! Adjustment resolution.
//!
//! A generation run carries one [`AdjustmentSheet`] of manual per-employee
//! overrides; every employee without an entry gets the zero adjustments.

use std::collections::HashMap;

use crate::models::Adjustments;

/// The per-run map of manual adjustment overrides.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::AdjustmentSheet;
/// use payroll_engine::models::Adjustments;
/// use rust_decimal::Decimal;
///
/// let mut sheet = AdjustmentSheet::new();
/// sheet.set(
///     "emp_001",
///     Adjustments {
///         overtime: Decimal::new(500, 0),
///         ..Adjustments::ZERO
///     },
/// );
///
/// assert_eq!(sheet.resolve("emp_001").overtime, Decimal::new(500, 0));
/// assert_eq!(sheet.resolve("emp_002"), Adjustments::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjustmentSheet {
    overrides: HashMap<String, Adjustments>,
}

impl AdjustmentSheet {
    /// Creates an empty sheet; every employee resolves to zero adjustments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override for one employee, replacing any previous entry.
    pub fn set(&mut self, employee_id: impl Into<String>, adjustments: Adjustments) {
        self.overrides.insert(employee_id.into(), adjustments);
    }

    /// Resolves the adjustments for an employee: the override if one was
    /// supplied, zero otherwise.
    pub fn resolve(&self, employee_id: &str) -> Adjustments {
        self.overrides
            .get(employee_id)
            .copied()
            .unwrap_or(Adjustments::ZERO)
    }

    /// The number of overrides on the sheet.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether the sheet carries no overrides.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl From<HashMap<String, Adjustments>> for AdjustmentSheet {
    fn from(overrides: HashMap<String, Adjustments>) -> Self {
        Self { overrides }
    }
}

//! Engine settings types.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from the YAML settings file. Both clamp policies default to
//! `Allow`, which reproduces the historical behavior of the payroll system;
//! the stricter alternatives are opt-in.

use serde::Deserialize;

/// Policy for totals where deductions exceed earnings plus bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeTotalPolicy {
    /// Store the negative total as computed.
    #[default]
    Allow,
    /// Floor the stored total at zero.
    ClampToZero,
}

/// Policy for employees whose counted attendance exceeds the calendar days
/// in the month (possible with duplicate or mis-dated entries upstream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcessAttendancePolicy {
    /// Prorate over the raw count; earned salary may exceed basic salary.
    #[default]
    Allow,
    /// Cap the counted days at the calendar days in the month.
    CapAtTotalDays,
}

fn default_max_concurrency() -> usize {
    8
}

/// Tunable engine settings.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{EngineSettings, NegativeTotalPolicy};
///
/// let settings = EngineSettings::default();
/// assert_eq!(settings.negative_total, NegativeTotalPolicy::Allow);
/// assert_eq!(settings.max_concurrency, 8);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// How to treat a computed total below zero.
    #[serde(default)]
    pub negative_total: NegativeTotalPolicy,
    /// How to treat counted days above the month's calendar days.
    #[serde(default)]
    pub excess_attendance: ExcessAttendancePolicy,
    /// Upper bound on concurrent per-employee calculations in a batch run.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            negative_total: NegativeTotalPolicy::default(),
            excess_attendance: ExcessAttendancePolicy::default(),
            max_concurrency: default_max_concurrency(),
        }
    }
}

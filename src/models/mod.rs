//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod adjustments;
mod attendance;
mod employee;
mod month;
mod outcome;
mod record;

pub use adjustments::Adjustments;
pub use attendance::{AttendanceDay, AttendanceStatus};
pub use employee::{Employee, EmploymentStatus};
pub use month::PayMonth;
pub use outcome::{GenerationFailure, GenerationOutcome, PreviewOutcome, PreviewRow};
pub use record::{PayrollRecord, PayrollStatus};

//! The payroll generation engine.
//!
//! Ties the calculation stages to the collaborator stores and the ledger:
//! batch generation with idempotent upserts and partial-failure reporting,
//! and the ledger-free preview that shares the same calculation path.

mod generate;
mod preview;

pub use generate::PayrollEngine;

//! Payroll Generation & Calculation Engine
//!
//! This crate implements the payroll core of a multi-tenant HR platform:
//! attendance aggregation over calendar months, salary proration, adjustment
//! resolution, idempotent batch generation into a payroll ledger, and a
//! preview service that shares the exact calculation path with generation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod models;
pub mod stores;

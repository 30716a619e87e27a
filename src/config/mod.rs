//! Engine configuration.
//!
//! Settings are deserialized from YAML and default to the historical
//! calculation behavior when absent.

mod loader;
mod types;

pub use types::{EngineSettings, ExcessAttendancePolicy, NegativeTotalPolicy};

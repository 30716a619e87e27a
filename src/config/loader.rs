//! Settings loading functionality.
//!
//! This module loads [`EngineSettings`] from a YAML file. Deployments that
//! do not ship a settings file use [`EngineSettings::default`], which keeps
//! the historical calculation behavior.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineSettings;

impl EngineSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/payroll.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed settings, or an error if the file is missing
    /// (`ConfigNotFound`) or not valid YAML for this schema (`ConfigParse`).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::EngineSettings;
    ///
    /// let settings = EngineSettings::load("./config/payroll.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}

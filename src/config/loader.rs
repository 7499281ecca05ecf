//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use super::types::EngineConfig;
use crate::error::{PayrollError, PayrollResult};

impl EngineConfig {
    /// Loads settings from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/payroll.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed settings, or an error if:
    /// - the file does not exist or cannot be read (`ConfigNotFound`)
    /// - the file contains invalid YAML (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/payroll.yaml")?;
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

//! Configuration loading functionality.
//!
//! Loads a [`RuleConfig`] from a YAML file, mirroring the shape produced by
//! serializing the default table.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::RuleConfig;

impl RuleConfig {
    /// Loads a rule configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rules file (e.g., "./config/ec103/rules.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is missing
    /// or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use benefit_engine::config::RuleConfig;
    ///
    /// let config = RuleConfig::load("./config/ec103/rules.yaml")?;
    /// # Ok::<(), benefit_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RuleConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, "loaded transition-rule configuration");
        Ok(config)
    }
}

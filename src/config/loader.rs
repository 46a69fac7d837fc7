//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollSettings};

/// Name of the settings file inside a configuration directory.
pub const SETTINGS_FILE: &str = "payroll.yaml";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml   # thresholds, multipliers and tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Normal time: {}h", loader.config().normal_time_threshold());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from `payroll.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The settings file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or fails validation (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings_path = path.as_ref().join(SETTINGS_FILE);
        let path_str = settings_path.display().to_string();

        let content = fs::read_to_string(&settings_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|message| {
            EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            }
        })?;

        info!(
            path = %path_str,
            normal_time_threshold = %loader.config.normal_time_threshold(),
            tax_brackets = loader.config.tax_schedule().brackets().len(),
            "Loaded payroll configuration"
        );

        Ok(loader)
    }

    /// Parses and validates configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        let settings: PayrollSettings =
            serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        let config = PayrollConfig::from_settings(settings)?;
        Ok(Self { config })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_repository_config() {
        let loader = ConfigLoader::load("./config").expect("Failed to load config");
        let config = loader.config();
        assert_eq!(config.normal_time_threshold(), dec("38"));
        assert_eq!(config.tax_schedule().brackets().len(), 5);
        assert_eq!(config.tax_schedule().calculate(dec("1000")), dec("72"));
    }

    #[test]
    fn test_missing_directory_is_config_not_found() {
        let err = ConfigLoader::load("./does/not/exist").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { ref path } if path.ends_with("payroll.yaml")));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = ConfigLoader::from_yaml_str("tax_brackets: [unclosed").unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn test_custom_brackets_are_sorted() {
        let yaml = r#"
tax_brackets:
  - { threshold: "100", rate: "0.1" }
  - { threshold: "1000", rate: "0.3" }
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        let brackets = loader.config().tax_schedule().brackets();
        assert_eq!(brackets[0].threshold, dec("1000"));
        assert_eq!(brackets[1].threshold, dec("100"));
    }

    #[test]
    fn test_default_loader_uses_default_config() {
        assert_eq!(ConfigLoader::default().into_config(), PayrollConfig::default());
    }
}

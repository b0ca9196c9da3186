//! Runtime configuration.
//!
//! Tolerance and best-fit settings for the `cunits` tool and for building a
//! [`UnitRegistry`](crate::units::UnitRegistry) from a JSON file.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::tolerance::EPSILON;

/// Unit system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    /// Absolute tolerance for comparisons
    pub epsilon: f64,

    /// Magnitude that best-fit display aims for
    pub display_target: f64,

    /// Register the standard catalog
    pub standard_catalog: bool,

    /// Extra best-fit candidates, as unit expressions (`"mi"`, `"km/h"`)
    pub display_units: Vec<String>,
}

impl UnitsConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        UnitsConfig {
            epsilon: EPSILON,
            display_target: 1.0,
            standard_catalog: true,
            display_units: Vec::new(),
        }
    }

    /// A config with no catalog at all
    pub fn bare() -> Self {
        let mut config = Self::new();
        config.standard_catalog = false;
        config
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: UnitsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "epsilon",
                reason: format!("must be finite and non-negative, got {}", self.epsilon),
            });
        }
        if !(self.display_target.is_finite() && self.display_target > 0.0) {
            return Err(ConfigError::Invalid {
                field: "display_target",
                reason: format!("must be finite and positive, got {}", self.display_target),
            });
        }
        Ok(())
    }
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration loading errors
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    #[diagnostic(code(C0001))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    #[diagnostic(code(C0002), help("The config is a JSON object, e.g. {{\"epsilon\": 1e-12}}."))]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    #[diagnostic(code(C0003))]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UnitsConfig::default();
        assert_eq!(config.epsilon, 1e-15);
        assert_eq!(config.display_target, 1.0);
        assert!(config.standard_catalog);
        assert!(config.display_units.is_empty());
        assert!(!UnitsConfig::bare().standard_catalog);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = UnitsConfig::from_json_str(r#"{"display_target": 10.0}"#).unwrap();
        assert_eq!(config.display_target, 10.0);
        assert_eq!(config.epsilon, 1e-15);
        assert!(config.standard_catalog);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = UnitsConfig::from_json_str(r#"{"display_target": 0.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "display_target", .. }));

        let err = UnitsConfig::from_json_str(r#"{"epsilon": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "epsilon", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = UnitsConfig::from_json_str("{epsilon").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = UnitsConfig::new();
        config.display_units.push("km/h".to_string());
        let json = config.to_json().unwrap();
        assert_eq!(UnitsConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("units.json");
        std::fs::write(&path, r#"{"display_units": ["mi"], "standard_catalog": true}"#).unwrap();
        let config = UnitsConfig::from_file(&path).unwrap();
        assert_eq!(config.display_units, vec!["mi".to_string()]);

        let missing = UnitsConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}

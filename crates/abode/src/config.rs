//! Analysis configuration.
//!
//! Stored as JSON. Every field has a default, so a partial file such as
//! `{"target": "CSUSHPISA", "cases": ["all", {"top": 3}]}` is valid.

use abode_factors::{FactorSelection, TARGET_INDEX};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading or validating an [`AnalysisConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// File that was read
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds an unusable value.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Column the other indicators are ranked against (default: `CSUSHPISA`)
    pub target: String,
    /// Factor selections to regress the target on, in display order
    pub cases: Vec<FactorSelection>,
    /// Minimum shared observations for a correlation (default: 2)
    pub min_periods: usize,
    /// Rows shown by the correlation and ranking tables (default: 10)
    pub display_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target: TARGET_INDEX.to_string(),
            cases: FactorSelection::default_cases().to_vec(),
            min_periods: 2,
            display_limit: 10,
        }
    }
}

impl AnalysisConfig {
    /// Check the configuration for unusable values.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for an empty target, no cases, a
    /// `Top(0)` case, or `min_periods` below 2.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.trim().is_empty() {
            return Err(ConfigError::Invalid("target must not be empty".to_string()));
        }
        if self.cases.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one comparison case is required".to_string(),
            ));
        }
        if self.cases.contains(&FactorSelection::Top(0)) {
            return Err(ConfigError::Invalid(
                "top 0 selects no factors; use \"all\" for every factor".to_string(),
            ));
        }
        if self.min_periods < 2 {
            return Err(ConfigError::Invalid(format!(
                "min_periods must be at least 2, got {}",
                self.min_periods
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Pretty JSON form, suitable for a config file.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

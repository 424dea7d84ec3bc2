//! Configuration file discovery.
//!
//! An explicit `--config` path wins. Otherwise the user config file is used
//! when it exists, and the built-in defaults apply when it does not.

use abode::{AnalysisConfig, ConfigError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the default configuration directory.
///
/// Uses platform-specific config directories:
/// - Linux: `~/.config/abode/`
/// - macOS: `~/Library/Application Support/abode/`
/// - Windows: `%APPDATA%\abode\`
pub(crate) fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("abode")
}

/// Get the default configuration file path.
pub(crate) fn default_config_path() -> PathBuf {
    default_config_dir().join("config.json")
}

/// Load the configuration for this run.
pub(crate) fn load(explicit: Option<&Path>) -> Result<AnalysisConfig, ConfigError> {
    resolve(explicit, &default_config_path())
}

fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<AnalysisConfig, ConfigError> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config");
        return AnalysisConfig::from_file(path);
    }
    if fallback.is_file() {
        debug!(path = %fallback.display(), "loading user config");
        return AnalysisConfig::from_file(fallback);
    }
    debug!("using default config");
    Ok(AnalysisConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use abode::factors::FactorSelection;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("abode_cli_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_without_files() {
        let missing = temp_path("missing.json");
        let config = resolve(None, &missing).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_user_file_is_used() {
        let path = temp_path("user.json");
        std::fs::write(&path, r#"{"target": "PERMIT1", "cases": [{"top": 2}]}"#).unwrap();

        let config = resolve(None, &path).unwrap();
        assert_eq!(config.target, "PERMIT1");
        assert_eq!(config.cases, vec![FactorSelection::Top(2)]);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = temp_path("explicit.json");
        let fallback = temp_path("fallback.json");
        std::fs::write(&explicit, r#"{"display_limit": 3}"#).unwrap();
        std::fs::write(&fallback, r#"{"display_limit": 7}"#).unwrap();

        let config = resolve(Some(&explicit), &fallback).unwrap();
        assert_eq!(config.display_limit, 3);

        std::fs::remove_file(explicit).ok();
        std::fs::remove_file(fallback).ok();
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let missing = temp_path("nope.json");
        assert!(matches!(
            resolve(Some(&missing), &missing),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_default_path_layout() {
        assert!(default_config_path().ends_with("abode/config.json"));
    }
}

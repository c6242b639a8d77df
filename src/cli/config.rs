//! Configuration management for the health advisor
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.healthadvisor/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::cli::args::Verbosity;
use crate::errors::{AdvisorError, Result};
use crate::evaluator::{HeartRateThresholds, SeverityThresholds, TemperatureThresholds, Thresholds};

/// Complete configuration for the health advisor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub temperature: TemperatureThresholds,
    pub heart_rate: HeartRateThresholds,
    pub severity: SeverityThresholds,
    pub display: DisplayConfig,
}

/// Report display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub show_disclaimer: bool,
    pub default_verbosity: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_disclaimer: true,
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match Self::locate(path) {
            Some(config_path) => Self::load_from_file(&config_path),
            None => Ok(Config::default()),
        }
    }

    /// File `load` would read: the explicit path, else the standard one if it exists
    pub fn locate(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(explicit) => Some(explicit.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        }
    }

    /// Human-readable description of where configuration comes from
    pub fn source_label(path: Option<&Path>) -> String {
        match Self::locate(path) {
            Some(config_path) => config_path.display().to_string(),
            None => "built-in defaults".to_string(),
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config location, if a home directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".healthadvisor").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.thresholds().validate().map_err(AdvisorError::ConfigError)?;

        if Verbosity::from_name(&self.display.default_verbosity).is_none() {
            return Err(AdvisorError::ConfigError(
                format!("Invalid verbosity level: {}", self.display.default_verbosity)
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AdvisorError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Configured default verbosity
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.display.default_verbosity).unwrap_or(Verbosity::Normal)
    }

    /// Evaluator bounds from this configuration
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            temperature: self.temperature,
            heart_rate: self.heart_rate,
            severity: self.severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.temperature.fever_above, 38.0);
        assert_eq!(config.heart_rate.above_normal, 100);
        assert!(config.display.color_output);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_thresholds() {
        let mut config = Config::default();
        config.severity.moderate_max = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_verbosity() {
        let mut config = Config::default();
        config.display.default_verbosity = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[heart_rate]\nbelow_normal = 50\nabove_normal = 110\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.heart_rate.below_normal, 50);
        assert_eq!(config.heart_rate.above_normal, 110);
        assert_eq!(config.temperature, TemperatureThresholds::default());
        assert!(config.display.show_disclaimer);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[temperature]\nlow_below = 40.0\nfever_above = 38.0\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, AdvisorError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_explicit_path_is_the_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");

        assert_eq!(Config::locate(Some(path.as_path())), Some(path.clone()));
        assert_eq!(
            Config::source_label(Some(path.as_path())),
            path.display().to_string()
        );
    }

    #[test]
    fn test_default_source_without_file() {
        let expected = match Config::default_path() {
            Some(p) if p.exists() => p.display().to_string(),
            _ => "built-in defaults".to_string(),
        };
        assert_eq!(Config::source_label(None), expected);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.display.color_output = false;
        config.save(&path).unwrap();

        let reloaded = Config::load_from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }
}

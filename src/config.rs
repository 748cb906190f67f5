//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`V4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Numeric tolerances
    #[serde(default)]
    pub math: MathConfig,
    /// Text output
    #[serde(default)]
    pub display: DisplayConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`V4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // V4D_DISPLAY__PRECISION=2 -> display.precision = 2
        figment = figment.merge(Env::prefixed("V4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Fall back to defaults when loading failed, logging the reason
    pub fn or_defaults(loaded: Result<Self, ConfigError>) -> Self {
        loaded.unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }
}

/// Numeric tolerances
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// Per-component tolerance for approximate comparisons
    pub epsilon: f64,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self { epsilon: 1e-6 }
    }
}

/// Text output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Fixed decimals for vectors and scalars (omitted prints the shortest form)
    #[serde(default)]
    pub precision: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: Some(3) }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.math.epsilon, 1e-6);
        assert_eq!(config.display.precision, Some(3));
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("epsilon"));
        assert!(toml.contains("precision"));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.math.epsilon, 1e-6);
        assert_eq!(config.display.precision, Some(3));
    }

    #[test]
    fn test_partial_toml_keeps_other_sections() {
        let config: AppConfig = toml::from_str("[math]\nepsilon = 0.5\n").unwrap();
        assert_eq!(config.math.epsilon, 0.5);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_empty_sections_use_field_defaults() {
        let config: AppConfig = toml::from_str("[math]\n[debug]\n").unwrap();
        assert_eq!(config.math.epsilon, 1e-6);
        assert_eq!(config.debug.log_level, "info");

        let config: AppConfig = toml::from_str("[display]\n").unwrap();
        assert_eq!(config.display.precision, None);
    }

    #[test]
    fn test_or_defaults_on_error() {
        let err: ConfigError = figment::Error::from("bad value".to_string()).into();
        let config = AppConfig::or_defaults(Err(err));
        assert_eq!(config.math.epsilon, 1e-6);
        assert_eq!(config.display.precision, Some(3));
    }

    #[test]
    fn test_or_defaults_keeps_loaded_config() {
        let mut loaded = AppConfig::default();
        loaded.math.epsilon = 0.5;
        assert_eq!(AppConfig::or_defaults(Ok(loaded)).math.epsilon, 0.5);
    }

    #[test]
    fn test_error_display() {
        let err: ConfigError = figment::Error::from("bad value".to_string()).into();
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad value"));
    }
}

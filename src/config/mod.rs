// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Display language
//! - `[lighting]` - Ignition step delay and the night shown at startup
//! - `[insight]` - Remote text-generation service
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `MENORAH_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_menorah::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("he".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::menorah::Day;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru", "he").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Candle lighting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightingConfig {
    /// Delay between two candles being lit, in milliseconds.
    #[serde(
        default = "default_step_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub step_interval_ms: Option<u64>,

    /// Night selected at startup (1-8).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_day: Option<u8>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: default_step_interval_ms(),
            start_day: None,
        }
    }
}

impl LightingConfig {
    /// Returns the step delay, clamped to the supported range.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        let millis = self
            .step_interval_ms
            .unwrap_or(DEFAULT_STEP_INTERVAL_MS)
            .clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
        Duration::from_millis(millis)
    }

    /// Returns the configured start night.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDay`] when the stored value is outside 1-8.
    pub fn start_day(&self) -> Result<Option<Day>> {
        self.start_day
            .map(Day::new)
            .transpose()
            .map_err(Error::from)
    }
}

/// Daily insight service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightConfig {
    /// Whether the insight button talks to the remote service.
    #[serde(default = "default_insight_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Model name passed to the service.
    #[serde(default = "default_insight_model", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Base URL of the REST API.
    #[serde(default = "default_insight_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_insight_timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            enabled: default_insight_enabled(),
            model: default_insight_model(),
            endpoint: default_insight_endpoint(),
            timeout_secs: default_insight_timeout_secs(),
        }
    }
}

impl InsightConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(DEFAULT_INSIGHT_ENABLED)
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or(DEFAULT_INSIGHT_MODEL)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or(DEFAULT_INSIGHT_ENDPOINT)
    }

    /// Returns the request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_INSIGHT_TIMEOUT_SECS)
            .clamp(MIN_INSIGHT_TIMEOUT_SECS, MAX_INSIGHT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Candle lighting settings.
    #[serde(default)]
    pub lighting: LightingConfig,

    /// Daily insight settings.
    #[serde(default)]
    pub insight: InsightConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_step_interval_ms() -> Option<u64> {
    Some(DEFAULT_STEP_INTERVAL_MS)
}

fn default_insight_enabled() -> Option<bool> {
    Some(DEFAULT_INSIGHT_ENABLED)
}

fn default_insight_model() -> Option<String> {
    Some(DEFAULT_INSIGHT_MODEL.to_string())
}

fn default_insight_endpoint() -> Option<String> {
    Some(DEFAULT_INSIGHT_ENDPOINT.to_string())
}

fn default_insight_timeout_secs() -> Option<u64> {
    Some(DEFAULT_INSIGHT_TIMEOUT_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("he".to_string()),
            },
            lighting: LightingConfig {
                step_interval_ms: Some(400),
                start_day: Some(5),
            },
            insight: InsightConfig {
                enabled: Some(false),
                model: Some("gemini-2.0-flash".to_string()),
                ..InsightConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[lighting]\nstep_interval_ms = \"fast\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"az\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("az"));
        assert_eq!(loaded.lighting, LightingConfig::default());
        assert_eq!(loaded.insight, InsightConfig::default());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.lighting.step_interval(), Duration::from_millis(800));
        assert_eq!(config.lighting.start_day().expect("valid"), None);
        assert!(config.insight.is_enabled());
        assert_eq!(config.insight.model(), DEFAULT_INSIGHT_MODEL);
        assert_eq!(config.insight.endpoint(), DEFAULT_INSIGHT_ENDPOINT);
        assert_eq!(config.insight.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn step_interval_is_clamped() {
        let too_fast = LightingConfig {
            step_interval_ms: Some(1),
            ..LightingConfig::default()
        };
        let too_slow = LightingConfig {
            step_interval_ms: Some(60_000),
            ..LightingConfig::default()
        };
        assert_eq!(too_fast.step_interval(), Duration::from_millis(MIN_STEP_INTERVAL_MS));
        assert_eq!(too_slow.step_interval(), Duration::from_millis(MAX_STEP_INTERVAL_MS));
    }

    #[test]
    fn start_day_out_of_range_is_rejected() {
        let lighting = LightingConfig {
            start_day: Some(9),
            ..LightingConfig::default()
        };
        assert!(matches!(lighting.start_day(), Err(Error::InvalidDay(_))));

        let lighting = LightingConfig {
            start_day: Some(3),
            ..LightingConfig::default()
        };
        assert_eq!(lighting.start_day().expect("valid").map(Day::get), Some(3));
    }

    #[test]
    fn blank_insight_strings_fall_back_to_defaults() {
        let insight = InsightConfig {
            model: Some("  ".to_string()),
            endpoint: Some(String::new()),
            timeout_secs: Some(0),
            ..InsightConfig::default()
        };
        assert_eq!(insight.model(), DEFAULT_INSIGHT_MODEL);
        assert_eq!(insight.endpoint(), DEFAULT_INSIGHT_ENDPOINT);
        assert_eq!(insight.timeout(), Duration::from_secs(MIN_INSIGHT_TIMEOUT_SECS));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("ru".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("ru"));
    }
}

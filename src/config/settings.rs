//! Application configuration

use anyhow::Result;
use pomowatch_core::DEFAULT_FACE_ID;
use pomowatch_render::Variant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Watchface selection and presentation
    #[serde(default)]
    pub watchface: WatchFaceSettings,
    /// Session defaults
    #[serde(default)]
    pub timer: TimerSettings,
}

fn default_version() -> u32 {
    1
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(super::project_dirs()?.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            watchface: WatchFaceSettings::default(),
            timer: TimerSettings::default(),
        }
    }
}

/// Watchface selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchFaceSettings {
    /// Id of the active face (built-in id or `custom_*`)
    #[serde(default = "default_face")]
    pub selected: String,
    /// Render variant for the active face
    #[serde(default)]
    pub variant: Variant,
    /// Start with the control buttons hidden
    #[serde(default)]
    pub hide_controls: bool,
}

fn default_face() -> String {
    DEFAULT_FACE_ID.to_string()
}

impl Default for WatchFaceSettings {
    fn default() -> Self {
        Self {
            selected: default_face(),
            variant: Variant::V1,
            hide_controls: false,
        }
    }
}

/// Session defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Session length in seconds
    #[serde(default = "default_duration")]
    pub default_duration_secs: u64,
}

fn default_duration() -> u64 {
    25 * 60
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.watchface.selected = "terminal".to_string();
        config.watchface.variant = Variant::V2;
        config.timer.default_duration_secs = 50 * 60;
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"watchface": {"variant": "v9"}, "unknown": true}"#).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.watchface.selected, "default");
        assert_eq!(config.watchface.variant, Variant::V1);
        assert_eq!(config.timer.default_duration_secs, 1500);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from_path(&dir.path().join("absent.json")).is_err());
    }
}

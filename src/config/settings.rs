//! Configuration settings for tomatui.
//!
//! Settings are loaded from `~/.tomatui/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::core::timer::clamp_minutes;
use crate::error::TomatuiError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Timer settings.
    pub timer: TimerConfig,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work interval length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break interval length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            notifications: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TomatuiError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// Durations outside the configurable range are clamped.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TomatuiError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TomatuiError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let mut config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            TomatuiError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.timer.work_minutes = clamp_minutes(config.timer.work_minutes);
        config.timer.break_minutes = clamp_minutes(config.timer.break_minutes);
        Ok(config)
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), TomatuiError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TomatuiError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TomatuiError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TomatuiError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

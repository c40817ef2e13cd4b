//! Configuration management for the alert demo

mod keys;

pub use keys::{KeyBindings, key_to_string};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::paths;

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A cell scale axis was zero points wide
    #[error("cell scale {axis} must be at least 1 point")]
    ZeroScale {
        /// `column_points` or `row_points`
        axis: &'static str,
    },
    /// The event poll interval was zero
    #[error("poll interval must be at least 1 ms")]
    ZeroPollInterval,
}

/// How many points one terminal cell stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellScale {
    /// Points per column
    #[serde(default = "default_column_points")]
    pub column_points: u16,
    /// Points per row
    #[serde(default = "default_row_points")]
    pub row_points: u16,
}

const fn default_column_points() -> u16 {
    6
}

const fn default_row_points() -> u16 {
    10
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            column_points: default_column_points(),
            row_points: default_row_points(),
        }
    }
}

impl CellScale {
    /// Columns needed to cover `points`, rounded up.
    #[must_use]
    pub const fn columns(self, points: u16) -> u16 {
        points.div_ceil(nonzero(self.column_points))
    }

    /// Rows needed to cover `points`, rounded up.
    #[must_use]
    pub const fn rows(self, points: u16) -> u16 {
        points.div_ceil(nonzero(self.row_points))
    }

    /// Check both axes are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroScale`] if either axis is zero.
    pub const fn validate(self) -> Result<(), ConfigError> {
        if self.column_points == 0 {
            return Err(ConfigError::ZeroScale {
                axis: "column_points",
            });
        }
        if self.row_points == 0 {
            return Err(ConfigError::ZeroScale { axis: "row_points" });
        }
        Ok(())
    }
}

// Unvalidated scales still render instead of dividing by zero.
const fn nonzero(points: u16) -> u16 {
    if points == 0 { 1 } else { points }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Point-to-cell projection for the alert card
    #[serde(default)]
    pub scale: CellScale,

    /// Poll interval in milliseconds for terminal events
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Keys that activate the alert buttons
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: CellScale::default(),
            poll_interval_ms: default_poll_interval(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, parsing or validating the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.keys.merge_defaults();
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Check values that serde cannot reject on its own
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scale.validate()?;
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("custom-alert")
            .join("config.json")
    }
}

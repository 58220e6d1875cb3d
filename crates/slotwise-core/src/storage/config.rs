//! TOML-based application configuration.
//!
//! Stores the work window and planner preferences:
//! - Work start/end times (`HH:MM`)
//! - Desired meeting duration and transition buffer
//! - Lunch avoidance
//!
//! Configuration is stored at `~/.config/slotwise/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, ParseError};
use crate::planner::PlannerConfig;
use crate::slots::WorkWindow;

/// Work window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkConfig {
    #[serde(default = "default_work_start")]
    pub start: String,
    #[serde(default = "default_work_end")]
    pub end: String,
}

/// Planner configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsConfig {
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
    #[serde(default = "default_buffer")]
    pub buffer_minutes: i32,
    #[serde(default = "default_true")]
    pub avoid_lunch: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/slotwise/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub work: WorkConfig,
    #[serde(default)]
    pub slots: SlotsConfig,
}

// Default functions
fn default_work_start() -> String {
    "09:00".to_string()
}
fn default_work_end() -> String {
    "17:00".to_string()
}
fn default_duration() -> i32 {
    30
}
fn default_buffer() -> i32 {
    10
}
fn default_true() -> bool {
    true
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            start: default_work_start(),
            end: default_work_end(),
        }
    }
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration(),
            buffer_minutes: default_buffer(),
            avoid_lunch: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work: WorkConfig::default(),
            slots: SlotsConfig::default(),
        }
    }
}

/// Allowed range for `slots.duration_minutes`.
const DURATION_RANGE: (i32, i32) = (15, 180);

/// Allowed range for `slots.buffer_minutes`.
const BUFFER_RANGE: (i32, i32) = (0, 30);

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Check every field against its allowed range.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = self
            .work_window()
            .map_err(|e| ConfigError::InvalidValue {
                key: "work".to_string(),
                message: e.to_string(),
            })?;
        if window.start >= window.end {
            return Err(ConfigError::InvalidValue {
                key: "work.end".to_string(),
                message: format!("work day must end after it starts ({window})"),
            });
        }

        let (lo, hi) = DURATION_RANGE;
        if !(lo..=hi).contains(&self.slots.duration_minutes) {
            return Err(ConfigError::InvalidValue {
                key: "slots.duration_minutes".to_string(),
                message: format!("must be between {lo} and {hi} minutes"),
            });
        }

        let (lo, hi) = BUFFER_RANGE;
        if !(lo..=hi).contains(&self.slots.buffer_minutes) {
            return Err(ConfigError::InvalidValue {
                key: "slots.buffer_minutes".to_string(),
                message: format!("must be between {lo} and {hi} minutes"),
            });
        }

        Ok(())
    }

    /// Get a config value as a string by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "work.start" => Some(self.work.start.clone()),
            "work.end" => Some(self.work.end.clone()),
            "slots.duration_minutes" => Some(self.slots.duration_minutes.to_string()),
            "slots.buffer_minutes" => Some(self.slots.buffer_minutes.to_string()),
            "slots.avoid_lunch" => Some(self.slots.avoid_lunch.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dotted key, validate, and persist.
    ///
    /// # Errors
    /// Returns an error when the key is unknown, the value does not parse,
    /// the resulting config fails validation, or saving fails.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut updated = self.clone();
        match key {
            "work.start" => updated.work.start = value.to_string(),
            "work.end" => updated.work.end = value.to_string(),
            "slots.duration_minutes" => {
                updated.slots.duration_minutes = value.parse().map_err(|_| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as minutes"),
                    }
                })?
            }
            "slots.buffer_minutes" => {
                updated.slots.buffer_minutes = value.parse().map_err(|_| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as minutes"),
                    }
                })?
            }
            "slots.avoid_lunch" => {
                updated.slots.avoid_lunch = value.parse().map_err(|_| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as bool"),
                    }
                })?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }

        updated.validate()?;
        updated.save()?;
        *self = updated;
        Ok(())
    }

    /// The configured work window.
    ///
    /// # Errors
    /// Returns [`ParseError`] when a stored time is malformed.
    pub fn work_window(&self) -> Result<WorkWindow, ParseError> {
        WorkWindow::from_times(&self.work.start, &self.work.end)
    }

    /// The configured planner settings.
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            duration_minutes: self.slots.duration_minutes,
            buffer_minutes: self.slots.buffer_minutes,
            avoid_lunch: self.slots.avoid_lunch,
        }
    }
}

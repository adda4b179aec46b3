//! File configuration for the seasonal terminal demo.
//!
//! Reads an optional `config.toml` from the platform config directory
//! (e.g. `~/.config/seasonal/config.toml` on Linux). Animation fields mirror
//! the public options schema; anything unset falls back to the documented
//! defaults when a run starts.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use seasonal_core::AnimatorOptions;
use serde::Deserialize;
use thiserror::Error;

/// Default time between event-loop ticks in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 33;

/// Errors from loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Animation options, passed through to the animator on start.
    pub animation: AnimatorOptions,
    /// Event-loop tick rate in milliseconds.
    pub tick_rate_ms: Option<u64>,
}

impl FileConfig {
    /// Effective tick rate, falling back to the default.
    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TICK_RATE_MS)
    }
}

/// Path of the config file, if a config directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "seasonal").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the config file. `Ok(None)` when there is no file to load.
pub fn load() -> Result<Option<FileConfig>, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&contents)?))
}

/// Load the config file, degrading to defaults on any error.
pub fn load_or_default() -> FileConfig {
    load().ok().flatten().unwrap_or_default()
}

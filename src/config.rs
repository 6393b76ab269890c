//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a game table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory the replay camera reads captures from.
    #[serde(default = "default_captures_dir")]
    captures_dir: PathBuf,

    /// Seconds between opening the camera and taking the picture.
    #[serde(default = "default_countdown_secs")]
    countdown_secs: u64,

    /// Seed for the computer's moves. Random each run when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_captures_dir() -> PathBuf {
    PathBuf::from("captures")
}

#[instrument]
fn default_countdown_secs() -> u64 {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            captures_dir: default_captures_dir(),
            countdown_secs: default_countdown_secs(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(captures_dir = %config.captures_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the captures directory.
    pub fn with_captures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.captures_dir = dir.into();
        self
    }

    /// Replaces the countdown.
    pub fn with_countdown_secs(mut self, secs: u64) -> Self {
        self.countdown_secs = secs;
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Countdown as a duration.
    pub fn countdown(&self) -> Duration {
        Duration::from_secs(self.countdown_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

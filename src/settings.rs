//! Player settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Seed for the secret generator. Unset means fresh entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File to write logs to. Logs go to stderr when unset.
    #[serde(default)]
    log_file: Option<PathBuf>,

    /// Whether the player may reveal the answer.
    #[serde(default = "default_allow_reveal")]
    allow_reveal: bool,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

#[instrument]
fn default_allow_reveal() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: default_log_filter(),
            log_file: None,
            allow_reveal: default_allow_reveal(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SettingsError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            SettingsError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(seeded = settings.seed.is_some(), "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path` if given, otherwise returns defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the seed when `seed` is `Some`.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the log filter when `filter` is `Some`.
    pub fn with_log_filter(mut self, filter: Option<String>) -> Self {
        if let Some(filter) = filter {
            self.log_filter = filter;
        }
        self
    }

    /// Overrides whether revealing the answer is allowed.
    pub fn with_allow_reveal(mut self, allow_reveal: bool) -> Self {
        self.allow_reveal = allow_reveal;
        self
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
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

//! TOML configuration.
//!
//! Every field has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! [sync]
//! tolerance_secs = 5.0
//! poll_interval_ms = 300
//!
//! [player]
//! src = "https://player.vimeo.com/video/76979871?api=1"
//!
//! [[steps]]
//! start = 0
//!
//! [[steps]]
//! start = "12.5"
//! width = 640
//! height = 360
//! ```

mod settings;

pub use settings::{DeclaredTime, PlayerSettings, Settings, StepSettings, SyncSettings};

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::core::step::StepMetadata;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl Settings {
    /// Load and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let tolerance = self.sync.tolerance_secs;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "sync.tolerance_secs must be a non-negative number, got {tolerance}"
            )));
        }
        if self.sync.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "sync.poll_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Step metadata in declaration order
    pub fn step_metadata(&self) -> Vec<StepMetadata> {
        self.steps.iter().map(StepSettings::to_metadata).collect()
    }
}

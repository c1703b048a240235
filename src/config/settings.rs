//! Settings structures, one section per concern.

use serde::{Deserialize, Serialize};

use crate::core::step::{StepMetadata, Viewport};

/// Root of the settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sync: SyncSettings,
    pub player: PlayerSettings,
    pub steps: Vec<StepSettings>,
}

/// Timing knobs of the synchronization loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Backward slack in seconds
    pub tolerance_secs: f64,
    pub poll_interval_ms: u64,
    /// Delay before resyncing after key navigation
    pub manual_settle_ms: u64,
    /// How long the buffering warm-up plays before pausing
    pub warmup_ms: u64,
    pub log_level: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            tolerance_secs: 5.0,
            poll_interval_ms: 300,
            manual_settle_ms: 100,
            warmup_ms: 1000,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Player source URL; the origin is everything before `?`
    pub src: String,
    pub default_width: u32,
    pub default_height: u32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            src: String::new(),
            default_width: 340,
            default_height: 290,
        }
    }
}

impl PlayerSettings {
    pub fn default_viewport(&self) -> Viewport {
        Viewport::new(self.default_width, self.default_height)
    }
}

/// Declared start of a step, as a number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredTime {
    Seconds(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSettings {
    pub start: Option<DeclaredTime>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl StepSettings {
    pub fn to_metadata(&self) -> StepMetadata {
        let declared_start = self.start.as_ref().map(|start| match start {
            DeclaredTime::Seconds(secs) => secs.to_string(),
            DeclaredTime::Text(text) => text.clone(),
        });
        let viewport = match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Viewport::new(width, height)),
            _ => None,
        };
        StepMetadata {
            declared_start,
            viewport,
        }
    }
}

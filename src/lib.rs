//! Keeps a step-based presentation in sync with a streaming video.
//!
//! As the video plays, the presentation follows whichever step owns the
//! current timestamp; when the presentation is navigated by hand, the video
//! seeks to the active step's start.

pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod playback;
pub mod presentation;
pub mod provider;
pub mod runtime;
pub mod timeline;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigError, Settings};
pub use playback::{EngineConfig, PlaybackState, SyncEngine};
pub use presentation::Presentation;
pub use provider::{ProviderError, VideoProvider, VimeoProvider};
pub use timeline::TimingTable;

/// Errors surfaced to the application
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

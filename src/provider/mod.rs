//! Boundary with the external video player.
//!
//! The engine depends only on [`VideoProvider`]; each player integration
//! supplies its own wire codec.

pub mod message;
pub mod vimeo;

pub use message::{
    EventKind, Inbound, Progress, ProviderCommand, ProviderEvent, Response, LISTENED_EVENTS,
};
pub use vimeo::{OutboundFrame, VimeoProvider};

/// Error type for provider communication
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Malformed provider message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Unexpected provider message shape: {0}")]
    InvalidShape(String),
    #[error("Provider channel closed")]
    ChannelClosed,
}

/// Capability set of a video player.
///
/// `send` is fire-and-forget; the channel gives no delivery guarantee.
pub trait VideoProvider {
    /// Post a command to the player
    fn send(&mut self, command: ProviderCommand) -> Result<(), ProviderError>;

    /// Decode one raw inbound message; unknown names yield `Ok(None)`
    fn decode(&self, raw: &str) -> Result<Option<Inbound>, ProviderError>;
}

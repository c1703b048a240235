//! Vimeo player message codec.
//!
//! Outbound: `{"method": ..., "value": ...}` posted to the player origin.
//! Inbound: either `{"method": ..., "value": ...}` (a response) or
//! `{"event": ..., "data": ...}` (a notification).

use crossbeam::channel;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::time::{self, Time};
use crate::provider::message::{
    EventKind, Inbound, Progress, ProviderCommand, ProviderEvent, Response,
};
use crate::provider::{ProviderError, VideoProvider};

/// A serialized command addressed to the player's origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundFrame {
    pub origin: String,
    pub payload: String,
}

#[derive(Serialize)]
struct RawCommand<'a> {
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

#[derive(Deserialize)]
struct RawInbound {
    method: Option<String>,
    value: Option<Value>,
    event: Option<String>,
    data: Option<Value>,
}

/// Vimeo provider writing frames to a crossbeam channel
pub struct VimeoProvider {
    origin: String,
    outbound: channel::Sender<OutboundFrame>,
}

impl VimeoProvider {
    /// Create a provider for the player at `player_src`.
    ///
    /// The origin is the source URL with its query string removed.
    pub fn new(player_src: &str, outbound: channel::Sender<OutboundFrame>) -> Self {
        Self {
            origin: origin_of(player_src).to_string(),
            outbound,
        }
    }

    /// Create a provider together with the receiving end of its frames
    pub fn with_channel(player_src: &str) -> (Self, channel::Receiver<OutboundFrame>) {
        let (tx, rx) = channel::unbounded();
        (Self::new(player_src, tx), rx)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl VideoProvider for VimeoProvider {
    fn send(&mut self, command: ProviderCommand) -> Result<(), ProviderError> {
        let payload = encode_command(&command)?;
        self.outbound
            .send(OutboundFrame {
                origin: self.origin.clone(),
                payload,
            })
            .map_err(|_| ProviderError::ChannelClosed)
    }

    fn decode(&self, raw: &str) -> Result<Option<Inbound>, ProviderError> {
        decode_inbound(raw)
    }
}

fn origin_of(player_src: &str) -> &str {
    player_src.split('?').next().unwrap_or(player_src)
}

/// Serialize a command to the Vimeo JSON shape
pub fn encode_command(command: &ProviderCommand) -> Result<String, ProviderError> {
    let value = match command {
        ProviderCommand::AddEventListener(kind) => Some(Value::from(kind.wire_name())),
        ProviderCommand::SeekTo(target) => Some(Value::from(time::to_seconds(*target))),
        ProviderCommand::Play | ProviderCommand::Pause | ProviderCommand::GetCurrentTime => None,
    };
    let raw = RawCommand {
        method: command.method_name(),
        value,
    };
    Ok(serde_json::to_string(&raw)?)
}

/// Parse an inbound Vimeo message.
///
/// Unknown methods and events yield `Ok(None)`.
pub fn decode_inbound(raw: &str) -> Result<Option<Inbound>, ProviderError> {
    let message: RawInbound = serde_json::from_str(raw)?;

    if let Some(method) = message.method {
        return match method.as_str() {
            "getCurrentTime" => {
                let position = message
                    .value
                    .as_ref()
                    .and_then(seconds_value)
                    .ok_or_else(|| {
                        ProviderError::InvalidShape("getCurrentTime without a usable value".into())
                    })?;
                Ok(Some(Inbound::Response(Response::CurrentTime(position))))
            }
            _ => Ok(None),
        };
    }

    let Some(event) = message.event else {
        return Err(ProviderError::InvalidShape(
            "message has neither method nor event".into(),
        ));
    };
    let Some(kind) = EventKind::from_wire(&event) else {
        return Ok(None);
    };

    let data = message.data.as_ref();
    let event = match kind {
        EventKind::Ready => ProviderEvent::Ready,
        EventKind::Play => ProviderEvent::Play,
        EventKind::Pause => ProviderEvent::Pause,
        EventKind::Finish => ProviderEvent::Finish,
        EventKind::Seek => ProviderEvent::Seek {
            position: data.and_then(|d| field_seconds(d, "seconds")),
        },
        EventKind::PlayProgress => ProviderEvent::PlayProgress {
            position: data.and_then(|d| field_seconds(d, "seconds")),
        },
        EventKind::LoadProgress => {
            let progress = data.and_then(progress_value).ok_or_else(|| {
                ProviderError::InvalidShape("loadProgress without percent/duration".into())
            })?;
            ProviderEvent::LoadProgress(progress)
        }
    };
    Ok(Some(Inbound::Event(event)))
}

/// Vimeo sends numbers either as JSON numbers or as numeric strings
fn number_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn seconds_value(value: &Value) -> Option<Time> {
    number_value(value).and_then(time::seconds_checked)
}

fn field_seconds(data: &Value, field: &str) -> Option<Time> {
    data.get(field).and_then(seconds_value)
}

fn progress_value(data: &Value) -> Option<Progress> {
    let percent = data.get("percent").and_then(number_value)?;
    let duration = field_seconds(data, "duration")?;
    Some(Progress { percent, duration })
}

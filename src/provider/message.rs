//! Provider-neutral commands and notifications.
//!
//! Concrete providers translate these to and from their own wire format.

use crate::core::time::{self, Time};

/// Events a provider can notify about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    Play,
    Pause,
    Finish,
    Seek,
    PlayProgress,
    LoadProgress,
}

/// Events the engine subscribes to once the player is ready.
/// `Ready` is delivered without registration.
pub const LISTENED_EVENTS: [EventKind; 6] = [
    EventKind::Pause,
    EventKind::Finish,
    EventKind::Play,
    EventKind::PlayProgress,
    EventKind::LoadProgress,
    EventKind::Seek,
];

impl EventKind {
    pub fn wire_name(self) -> &'static str {
        match self {
            EventKind::Ready => "ready",
            EventKind::Play => "play",
            EventKind::Pause => "pause",
            EventKind::Finish => "finish",
            EventKind::Seek => "seek",
            EventKind::PlayProgress => "playProgress",
            EventKind::LoadProgress => "loadProgress",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "ready" => Some(EventKind::Ready),
            "play" => Some(EventKind::Play),
            "pause" => Some(EventKind::Pause),
            "finish" => Some(EventKind::Finish),
            "seek" => Some(EventKind::Seek),
            "playProgress" => Some(EventKind::PlayProgress),
            "loadProgress" => Some(EventKind::LoadProgress),
            _ => None,
        }
    }
}

/// Command sent to the video provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCommand {
    AddEventListener(EventKind),
    Play,
    Pause,
    SeekTo(Time),
    GetCurrentTime,
}

impl ProviderCommand {
    pub fn method_name(&self) -> &'static str {
        match self {
            ProviderCommand::AddEventListener(_) => "addEventListener",
            ProviderCommand::Play => "play",
            ProviderCommand::Pause => "pause",
            ProviderCommand::SeekTo(_) => "seekTo",
            ProviderCommand::GetCurrentTime => "getCurrentTime",
        }
    }

    /// Resolve a payload-free command by its method name.
    ///
    /// Matching ignores ASCII case so button labels map directly.
    pub fn from_method_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "play" => Some(ProviderCommand::Play),
            "pause" => Some(ProviderCommand::Pause),
            "getcurrenttime" => Some(ProviderCommand::GetCurrentTime),
            _ => None,
        }
    }
}

/// Buffering or playback progress as a fraction of the total duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Fraction in `0.0..=1.0`
    pub percent: f64,
    pub duration: Time,
}

impl Progress {
    /// Amount of media covered (`percent * duration`)
    pub fn covered(&self) -> Time {
        let percent = if self.percent.is_finite() {
            self.percent.clamp(0.0, 1.0)
        } else {
            0.0
        };
        time::from_seconds(percent * time::to_seconds(self.duration))
    }
}

/// Notification pushed by the provider
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    Ready,
    Play,
    Pause,
    Finish,
    /// User seeked inside the player
    Seek { position: Option<Time> },
    PlayProgress { position: Option<Time> },
    LoadProgress(Progress),
}

impl ProviderEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ProviderEvent::Ready => EventKind::Ready,
            ProviderEvent::Play => EventKind::Play,
            ProviderEvent::Pause => EventKind::Pause,
            ProviderEvent::Finish => EventKind::Finish,
            ProviderEvent::Seek { .. } => EventKind::Seek,
            ProviderEvent::PlayProgress { .. } => EventKind::PlayProgress,
            ProviderEvent::LoadProgress(_) => EventKind::LoadProgress,
        }
    }
}

/// Answer to a previously sent command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    CurrentTime(Time),
}

/// Anything the provider can deliver
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Response(Response),
    Event(ProviderEvent),
}

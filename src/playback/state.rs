//! Playback state machine.
//!
//! Synchronization runs only in [`PlaybackState::Active`].

use std::fmt;

/// Synchronization state, driven by provider lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Player not ready yet
    #[default]
    Idle,
    /// Player ready, waiting for enough buffered media
    Buffering,
    /// Polling and reconciling
    Active,
    /// Video paused; steps and video are decoupled
    Paused,
    /// Video reached its end; only a fresh play resumes
    Finished,
}

/// What caused a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Ready,
    /// Buffered media passed the current step's start time
    Buffered,
    Play,
    /// Playback progress reported by the provider
    Progress,
    Pause,
    Finish,
}

impl PlaybackState {
    /// Check if synchronization is running
    pub fn is_active(&self) -> bool {
        matches!(self, PlaybackState::Active)
    }

    /// Check if the buffering latch may still fire
    pub fn is_buffering(&self) -> bool {
        matches!(self, PlaybackState::Buffering)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, PlaybackState::Finished)
    }

    /// State reached from `self` on `trigger`, `None` when the trigger
    /// does not apply in this state.
    pub fn on(self, trigger: Trigger) -> Option<PlaybackState> {
        use PlaybackState::*;

        match (self, trigger) {
            (Idle, Trigger::Ready) => Some(Buffering),
            (Buffering, Trigger::Buffered) | (Buffering, Trigger::Play) => Some(Active),
            (Active, Trigger::Pause) => Some(Paused),
            (Paused, Trigger::Play) | (Paused, Trigger::Progress) => Some(Active),
            (Finished, Trigger::Play) => Some(Active),
            (Buffering | Active | Paused, Trigger::Finish) => Some(Finished),
            _ => None,
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Buffering => "buffering",
            PlaybackState::Active => "active",
            PlaybackState::Paused => "paused",
            PlaybackState::Finished => "finished",
        };
        f.write_str(name)
    }
}

//! Mutable synchronization state for the lifetime of the engine.

use crate::core::step::StepIndex;
use crate::playback::position::PositionTracker;
use crate::playback::state::PlaybackState;

/// Synchronization session.
///
/// The next step index is always `current + 1`; it is derived, never stored.
#[derive(Debug, Clone, Default)]
pub struct SyncSession {
    current: StepIndex,
    position: PositionTracker,
    state: PlaybackState,
    /// Set once the first seek-and-activate has happened
    initial_seek_done: bool,
}

impl SyncSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> StepIndex {
        self.current
    }

    pub fn next_index(&self) -> StepIndex {
        self.current + 1
    }

    /// Move one step forward
    pub fn advance(&mut self) {
        self.current += 1;
    }

    /// Move one step back, never below zero
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Replace the current index from an authoritative source
    pub fn set_current(&mut self, index: StepIndex) {
        self.current = index;
    }

    pub fn position(&self) -> &PositionTracker {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut PositionTracker {
        &mut self.position
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn set_state(&mut self, state: PlaybackState) {
        self.state = state;
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn initial_seek_done(&self) -> bool {
        self.initial_seek_done
    }

    pub fn mark_initial_seek(&mut self) {
        self.initial_seek_done = true;
    }
}

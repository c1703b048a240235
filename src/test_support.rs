//! Recording doubles shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::step::{StepIndex, Viewport};
use crate::presentation::Presentation;
use crate::provider::vimeo;
use crate::provider::{Inbound, ProviderCommand, ProviderError, VideoProvider};

/// Provider that records every command; decoding uses the Vimeo codec
#[derive(Debug, Clone, Default)]
pub struct RecordingProvider {
    pub sent: Rc<RefCell<Vec<ProviderCommand>>>,
}

impl RecordingProvider {
    pub fn sent(&self) -> Vec<ProviderCommand> {
        self.sent.borrow().clone()
    }

    pub fn clear(&self) {
        self.sent.borrow_mut().clear();
    }

    pub fn seeks(&self) -> Vec<ProviderCommand> {
        self.sent()
            .into_iter()
            .filter(|c| matches!(c, ProviderCommand::SeekTo(_)))
            .collect()
    }
}

impl VideoProvider for RecordingProvider {
    fn send(&mut self, command: ProviderCommand) -> Result<(), ProviderError> {
        self.sent.borrow_mut().push(command);
        Ok(())
    }

    fn decode(&self, raw: &str) -> Result<Option<Inbound>, ProviderError> {
        vimeo::decode_inbound(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Next,
    Prev,
    Goto(StepIndex),
}

#[derive(Debug, Default)]
pub struct DeckState {
    pub active: StepIndex,
    pub moves: Vec<Move>,
    pub surfaces: Vec<Viewport>,
}

/// Presentation that records moves; `active` can be set to simulate
/// navigation the engine did not cause
#[derive(Debug, Clone, Default)]
pub struct RecordingPresentation {
    pub state: Rc<RefCell<DeckState>>,
}

impl RecordingPresentation {
    pub fn at(active: StepIndex) -> Self {
        let deck = Self::default();
        deck.state.borrow_mut().active = active;
        deck
    }

    pub fn set_active(&self, index: StepIndex) {
        self.state.borrow_mut().active = index;
    }

    pub fn moves(&self) -> Vec<Move> {
        self.state.borrow().moves.clone()
    }

    pub fn surfaces(&self) -> Vec<Viewport> {
        self.state.borrow().surfaces.clone()
    }

    pub fn active(&self) -> StepIndex {
        self.state.borrow().active
    }
}

impl Presentation for RecordingPresentation {
    fn next(&mut self) {
        let mut state = self.state.borrow_mut();
        state.active += 1;
        state.moves.push(Move::Next);
    }

    fn prev(&mut self) {
        let mut state = self.state.borrow_mut();
        state.active = state.active.saturating_sub(1);
        state.moves.push(Move::Prev);
    }

    fn goto_step(&mut self, index: StepIndex) {
        let mut state = self.state.borrow_mut();
        state.active = index;
        state.moves.push(Move::Goto(index));
    }

    fn active_step(&self) -> StepIndex {
        self.state.borrow().active
    }

    fn surface_changed(&mut self, viewport: Viewport) {
        self.state.borrow_mut().surfaces.push(viewport);
    }
}

//! Capability set of the step-based presentation.
//!
//! The engine never renders anything; it only asks the presentation to move
//! and reads back which step is active.

use crate::core::step::{StepIndex, Viewport};
use crate::input::NavKey;

pub trait Presentation {
    /// Move to the next step
    fn next(&mut self);

    /// Move to the previous step
    fn prev(&mut self);

    /// Jump directly to a step
    fn goto_step(&mut self, index: StepIndex);

    /// Index of the step currently shown, as the presentation sees it
    fn active_step(&self) -> StepIndex;

    /// The video surface should take these dimensions for the active step
    fn surface_changed(&mut self, _viewport: Viewport) {}

    /// A navigation key was released. Presentations that handle their own
    /// keys ignore this.
    fn key_released(&mut self, _key: NavKey) {}
}

/// In-memory presentation that tracks its position and logs moves.
///
/// Used by the stdio binary where no real renderer exists.
#[derive(Debug, Clone)]
pub struct LoggedPresentation {
    active: StepIndex,
    step_count: usize,
}

impl LoggedPresentation {
    pub fn new(step_count: usize) -> Self {
        Self {
            active: 0,
            step_count,
        }
    }
}

impl Presentation for LoggedPresentation {
    fn next(&mut self) {
        if self.active + 1 < self.step_count {
            self.active += 1;
        }
        tracing::info!(step = self.active, "presentation next");
    }

    fn prev(&mut self) {
        self.active = self.active.saturating_sub(1);
        tracing::info!(step = self.active, "presentation prev");
    }

    fn goto_step(&mut self, index: StepIndex) {
        self.active = index.min(self.step_count.saturating_sub(1));
        tracing::info!(step = self.active, "presentation goto");
    }

    fn active_step(&self) -> StepIndex {
        self.active
    }

    fn surface_changed(&mut self, viewport: Viewport) {
        tracing::debug!(width = viewport.width, height = viewport.height, "video surface resized");
    }

    fn key_released(&mut self, key: NavKey) {
        if key.is_forward() {
            self.next();
        } else {
            self.prev();
        }
    }
}

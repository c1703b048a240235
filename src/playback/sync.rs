//! Step position reconciler.
//!
//! Aligns the active step with a video time. Forward catch-up advances while
//! the video is past the next step's start. Backward catch-up only starts once
//! the video is more than `tolerance` before the current step's start, then
//! unwinds until the current step's start is no longer in the future.

use tracing::debug;

use crate::core::time::{self, Time};
use crate::playback::session::SyncSession;
use crate::presentation::Presentation;
use crate::timeline::TimingTable;

/// Default slack before stepping backwards (5 seconds)
pub const DEFAULT_TOLERANCE: Time = 5 * time::constants::NANOS_PER_SECOND;

/// Transitions issued by one reconciliation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub advanced: usize,
    pub retreated: usize,
}

impl Reconciliation {
    pub fn is_noop(&self) -> bool {
        self.advanced == 0 && self.retreated == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciler {
    tolerance: Time,
}

impl Reconciler {
    pub fn new(tolerance: Time) -> Self {
        Self {
            tolerance: tolerance.max(0),
        }
    }

    pub fn tolerance(&self) -> Time {
        self.tolerance
    }

    /// Drive the presentation to the step owning `video_time`.
    ///
    /// A missing next start time counts as unbounded, so forward catch-up
    /// halts there and at the last step. Backward catch-up halts at step 0
    /// and at a step with no start time.
    pub fn reconcile<D: Presentation>(
        &self,
        table: &TimingTable,
        session: &mut SyncSession,
        presentation: &mut D,
        video_time: Time,
    ) -> Reconciliation {
        let mut outcome = Reconciliation::default();

        while let Some(next_start) = table.start_time(session.next_index()) {
            if video_time <= next_start {
                break;
            }
            presentation.next();
            session.advance();
            outcome.advanced += 1;
            debug!(
                step = session.current(),
                video = %time::format_time(video_time),
                "advancing step to match video"
            );
        }

        if outcome.advanced > 0 {
            return outcome;
        }

        let Some(current_start) = table.start_time(session.current()) else {
            return outcome;
        };
        if video_time.saturating_add(self.tolerance) >= current_start {
            return outcome;
        }

        while session.current() > 0 {
            match table.start_time(session.current()) {
                Some(start) if video_time < start => {
                    presentation.prev();
                    session.retreat();
                    outcome.retreated += 1;
                    debug!(
                        step = session.current(),
                        video = %time::format_time(video_time),
                        "rewinding step to match video"
                    );
                }
                _ => break,
            }
        }

        outcome
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

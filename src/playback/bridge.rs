//! Manual navigation bridge.
//!
//! When the presentation moves on its own (keyboard, buttons), the session
//! is resynchronized from the presentation's active step and the video is
//! sought to that step's start.

use tracing::{debug, warn};

use crate::core::step::StepIndex;
use crate::core::time::{self, Time};
use crate::playback::session::SyncSession;
use crate::presentation::Presentation;
use crate::provider::{ProviderCommand, VideoProvider};
use crate::timeline::TimingTable;

/// Reset the session's indices from the presentation's active step.
///
/// An index past the end of the table is clamped to the last step.
pub fn resync_from_presentation<D: Presentation>(
    table: &TimingTable,
    session: &mut SyncSession,
    presentation: &D,
) -> StepIndex {
    let reported = presentation.active_step();
    let index = match table.last_index() {
        Some(last) if reported > last => {
            warn!(reported, last, "presentation reported a step outside the timing table");
            last
        }
        _ => reported,
    };
    session.set_current(index);
    index
}

/// Seek the video to the current step's start time.
///
/// Returns the target, or `None` when the step has no start time or the
/// command could not be sent.
pub fn seek_to_current<P: VideoProvider>(
    table: &TimingTable,
    session: &SyncSession,
    provider: &mut P,
) -> Option<Time> {
    let step = session.current();
    let Some(target) = table.start_time(step) else {
        warn!(step, "cannot seek: step has no start time");
        return None;
    };
    match provider.send(ProviderCommand::SeekTo(target)) {
        Ok(()) => {
            debug!(step, target = %time::format_time(target), "seeking video to step");
            Some(target)
        }
        Err(error) => {
            warn!(step, %error, "seek command was not sent");
            None
        }
    }
}

/// React to a step change that did not come from the video.
///
/// Does nothing unless synchronization is active.
pub fn on_manual_step_change<P: VideoProvider, D: Presentation>(
    table: &TimingTable,
    session: &mut SyncSession,
    presentation: &D,
    provider: &mut P,
) -> Option<Time> {
    if !session.is_active() {
        debug!(
            state = %session.state(),
            "manual navigation while not synchronizing; video left alone"
        );
        return None;
    }
    resync_from_presentation(table, session, presentation);
    seek_to_current(table, session, provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::state::PlaybackState;
    use crate::test_support::{RecordingPresentation, RecordingProvider};

    fn active_session(current: StepIndex) -> SyncSession {
        let mut session = SyncSession::new();
        session.set_current(current);
        session.set_state(PlaybackState::Active);
        session
    }

    #[test]
    fn test_manual_change_seeks_to_new_step() {
        let table = TimingTable::from_seconds(&[0.0, 10.0, 20.0, 30.0]);
        let mut session = active_session(1);
        let deck = RecordingPresentation::at(2);
        let mut provider = RecordingProvider::default();

        let target = on_manual_step_change(&table, &mut session, &deck, &mut provider);

        assert_eq!(target, Some(time::from_seconds(20.0)));
        assert_eq!(provider.sent(), vec![ProviderCommand::SeekTo(time::from_seconds(20.0))]);
        assert_eq!((session.current(), session.next_index()), (2, 3));
    }

    #[test]
    fn test_resync_uses_ground_truth_not_increment() {
        let table = TimingTable::from_seconds(&[0.0, 10.0, 20.0, 30.0]);
        let mut session = active_session(3);
        let deck = RecordingPresentation::at(0);
        let mut provider = RecordingProvider::default();

        on_manual_step_change(&table, &mut session, &deck, &mut provider);

        assert_eq!(session.current(), 0);
        assert_eq!(provider.sent(), vec![ProviderCommand::SeekTo(0)]);
    }

    #[test]
    fn test_inactive_session_leaves_video_alone() {
        let table = TimingTable::from_seconds(&[0.0, 10.0]);
        let mut session = SyncSession::new();
        session.set_state(PlaybackState::Paused);
        let deck = RecordingPresentation::at(1);
        let mut provider = RecordingProvider::default();

        assert_eq!(on_manual_step_change(&table, &mut session, &deck, &mut provider), None);
        assert!(provider.sent().is_empty());
        assert_eq!(session.current(), 0);
    }

    #[test]
    fn test_resync_clamps_out_of_range() {
        let table = TimingTable::from_seconds(&[0.0, 10.0]);
        let mut session = SyncSession::new();
        let deck = RecordingPresentation::at(7);

        assert_eq!(resync_from_presentation(&table, &mut session, &deck), 1);
        assert_eq!(session.current(), 1);
    }

    #[test]
    fn test_seek_skips_untimed_step() {
        let table = TimingTable::build(vec![
            crate::core::StepMetadata::at("0"),
            crate::core::StepMetadata::untimed(),
        ]);
        let mut session = active_session(1);
        let deck = RecordingPresentation::at(1);
        let mut provider = RecordingProvider::default();

        assert_eq!(on_manual_step_change(&table, &mut session, &deck, &mut provider), None);
        assert!(provider.sent().is_empty());
    }
}

//! Last known video position, refreshed by polling the provider.
//!
//! Asking for the time and receiving it are decoupled: the request goes out
//! through the provider and the answer arrives later as a response message.
//! Responses are not correlated with requests, so the latest answer wins.

use crate::core::time::Time;
use crate::provider::{ProviderCommand, ProviderError, VideoProvider};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionTracker {
    last_known: Option<Time>,
    /// Requests sent without a matching answer yet
    outstanding: u32,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the provider for its current time
    pub fn request_current_time<P: VideoProvider>(
        &mut self,
        provider: &mut P,
    ) -> Result<(), ProviderError> {
        provider.send(ProviderCommand::GetCurrentTime)?;
        self.outstanding = self.outstanding.saturating_add(1);
        Ok(())
    }

    /// Record a time answer
    pub fn on_time_received(&mut self, time: Time) -> Time {
        self.last_known = Some(time);
        self.outstanding = self.outstanding.saturating_sub(1);
        time
    }

    pub fn last_known(&self) -> Option<Time> {
        self.last_known
    }

    pub fn outstanding(&self) -> u32 {
        self.outstanding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time;
    use crate::test_support::RecordingProvider;

    #[test]
    fn test_request_sends_time_query() {
        let mut provider = RecordingProvider::default();
        let mut tracker = PositionTracker::new();

        tracker.request_current_time(&mut provider).unwrap();
        tracker.request_current_time(&mut provider).unwrap();

        assert_eq!(
            provider.sent(),
            vec![ProviderCommand::GetCurrentTime, ProviderCommand::GetCurrentTime]
        );
        assert_eq!(tracker.outstanding(), 2);
        assert_eq!(tracker.last_known(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut tracker = PositionTracker::new();
        tracker.on_time_received(time::from_seconds(12.0));
        tracker.on_time_received(time::from_seconds(11.0));

        assert_eq!(tracker.last_known(), Some(time::from_seconds(11.0)));
        assert_eq!(tracker.outstanding(), 0);
    }
}

//! Synchronization engine coordinating the provider, the presentation and
//! the session.
//!
//! The engine does no I/O and owns no clock. Whatever drives it delivers
//! provider messages, navigation triggers and timer expiries one at a time,
//! and drains [`TimerRequest`]s after each call.

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::config::Settings;
use crate::core::step::Viewport;
use crate::core::time::{self, Time};
use crate::input::{ButtonAction, NavKey};
use crate::playback::bridge;
use crate::playback::session::SyncSession;
use crate::playback::state::{PlaybackState, Trigger};
use crate::playback::sync::{Reconciler, DEFAULT_TOLERANCE};
use crate::presentation::Presentation;
use crate::provider::{
    Inbound, Progress, ProviderCommand, ProviderEvent, Response, VideoProvider, LISTENED_EVENTS,
};
use crate::timeline::TimingTable;

/// Timing parameters of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub tolerance: Time,
    pub poll_interval: Duration,
    pub manual_settle: Duration,
    pub warmup: Duration,
    pub default_viewport: Viewport,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            poll_interval: Duration::from_millis(300),
            manual_settle: Duration::from_millis(100),
            warmup: Duration::from_millis(1000),
            default_viewport: Viewport::new(340, 290),
        }
    }
}

impl From<&Settings> for EngineConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            tolerance: time::from_seconds(settings.sync.tolerance_secs),
            poll_interval: Duration::from_millis(settings.sync.poll_interval_ms),
            manual_settle: Duration::from_millis(settings.sync.manual_settle_ms),
            warmup: Duration::from_millis(settings.sync.warmup_ms),
            default_viewport: settings.player.default_viewport(),
        }
    }
}

/// Timers the engine wants armed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Next periodic time query
    Poll,
    /// End of the buffering warm-up
    WarmupPause,
    /// Presentation finished its own transition after key navigation
    ManualSettle,
    /// Deferred move into the addenda steps
    Addenda,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub delay: Duration,
}

/// Main synchronization engine
pub struct SyncEngine<P, D> {
    provider: P,
    presentation: D,
    table: TimingTable,
    session: SyncSession,
    reconciler: Reconciler,
    config: EngineConfig,
    timers: Vec<TimerRequest>,
    poll_armed: bool,
}

impl<P: VideoProvider, D: Presentation> SyncEngine<P, D> {
    pub fn new(provider: P, presentation: D, table: TimingTable, config: EngineConfig) -> Self {
        let gaps = table.gaps();
        if !gaps.is_empty() {
            warn!(?gaps, "timing table has steps without start times");
        }
        info!(steps = table.len(), "synchronization engine created");

        Self {
            provider,
            presentation,
            table,
            session: SyncSession::new(),
            reconciler: Reconciler::new(config.tolerance),
            config,
            timers: Vec::new(),
            poll_armed: false,
        }
    }

    pub fn session(&self) -> &SyncSession {
        &self.session
    }

    pub fn state(&self) -> PlaybackState {
        self.session.state()
    }

    pub fn table(&self) -> &TimingTable {
        &self.table
    }

    pub fn presentation(&self) -> &D {
        &self.presentation
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Take the timers requested since the last call
    pub fn drain_timers(&mut self) -> Vec<TimerRequest> {
        std::mem::take(&mut self.timers)
    }

    /// Decode and handle one raw provider message.
    ///
    /// Malformed messages are logged and dropped.
    pub fn handle_message(&mut self, raw: &str) {
        match self.provider.decode(raw) {
            Ok(Some(inbound)) => self.handle_inbound(inbound),
            Ok(None) => trace!(raw, "ignoring unknown provider message"),
            Err(error) => warn!(%error, raw, "discarding provider message"),
        }
    }

    pub fn handle_inbound(&mut self, inbound: Inbound) {
        match inbound {
            Inbound::Response(Response::CurrentTime(position)) => self.on_time_received(position),
            Inbound::Event(event) => self.handle_event(event),
        }
    }

    pub fn handle_event(&mut self, event: ProviderEvent) {
        trace!(event = ?event.kind(), state = %self.state(), "provider event");
        match event {
            ProviderEvent::Ready => self.on_ready(),
            ProviderEvent::LoadProgress(progress) => self.on_load_progress(progress),
            ProviderEvent::Play => self.on_play(),
            ProviderEvent::PlayProgress { .. } => {
                self.transition(Trigger::Progress);
            }
            ProviderEvent::Pause => {
                self.transition(Trigger::Pause);
            }
            ProviderEvent::Finish => {
                self.transition(Trigger::Finish);
            }
            ProviderEvent::Seek { position } => {
                // folded in at the next poll
                debug!(
                    position = ?position.map(time::format_time),
                    "provider reported a seek"
                );
            }
        }
    }

    /// A poll timer expired
    pub fn on_poll_tick(&mut self) {
        self.poll_armed = false;
        if !self.session.is_active() {
            debug!(state = %self.state(), "poll loop suspended");
            return;
        }
        let position = self.session.position_mut();
        if let Err(error) = position.request_current_time(&mut self.provider) {
            warn!(%error, "time query was not sent");
        }
        trace!(outstanding = position.outstanding(), "time query sent");
        self.arm_poll();
    }

    /// The warm-up play has run long enough
    pub fn on_warmup_elapsed(&mut self) {
        self.send(ProviderCommand::Pause);
    }

    pub fn on_timer(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::Poll => self.on_poll_tick(),
            TimerKind::WarmupPause => self.on_warmup_elapsed(),
            TimerKind::ManualSettle => self.on_manual_step_change(),
            TimerKind::Addenda => {
                self.presentation.next();
                self.on_manual_step_change();
            }
        }
    }

    /// A navigation key was released.
    ///
    /// Returns whether a resync was scheduled.
    pub fn on_key(&mut self, key_code: u32) -> bool {
        let Some(key) = NavKey::from_key_code(key_code) else {
            return false;
        };
        self.presentation.key_released(key);
        if !self.session.is_active() {
            trace!(?key, "navigation key while not synchronizing");
            return false;
        }
        self.request_timer(TimerKind::ManualSettle, self.config.manual_settle);
        true
    }

    /// A labelled button was clicked
    pub fn on_button(&mut self, label: &str) {
        match ButtonAction::from_label(label) {
            Some(ButtonAction::Command(command)) => self.send(command),
            Some(ButtonAction::Addenda) => self.request_timer(TimerKind::Addenda, Duration::ZERO),
            None => debug!(label, "button label names no command"),
        }
    }

    /// The presentation changed step on its own; seek the video to match
    pub fn on_manual_step_change(&mut self) {
        if bridge::on_manual_step_change(
            &self.table,
            &mut self.session,
            &self.presentation,
            &mut self.provider,
        )
        .is_some()
        {
            self.surface_changed();
        }
    }

    fn on_ready(&mut self) {
        if !self.transition(Trigger::Ready) {
            debug!(state = %self.state(), "duplicate ready ignored");
            return;
        }
        for kind in LISTENED_EVENTS {
            self.send(ProviderCommand::AddEventListener(kind));
        }
        self.send(ProviderCommand::Play);
        self.request_timer(TimerKind::WarmupPause, self.config.warmup);
    }

    fn on_load_progress(&mut self, progress: Progress) {
        if !self.session.state().is_buffering() || self.session.initial_seek_done() {
            return;
        }
        let step =
            bridge::resync_from_presentation(&self.table, &mut self.session, &self.presentation);
        let buffered = progress.covered();
        match self.table.start_time(step) {
            Some(start) if buffered > start => {
                debug!(step, buffered = %time::format_time(buffered), "buffered past current step");
                self.activate(Trigger::Buffered);
            }
            Some(_) => trace!(step, buffered = %time::format_time(buffered), "still buffering"),
            None => debug!(step, "current step has no start time; waiting"),
        }
    }

    fn on_play(&mut self) {
        match self.state() {
            PlaybackState::Buffering | PlaybackState::Finished => self.activate(Trigger::Play),
            _ => {
                self.transition(Trigger::Play);
            }
        }
    }

    /// Enter `Active` with a seek to the presentation's current step.
    ///
    /// Used for the one-time buffering latch and for restarting after the
    /// video finished.
    fn activate(&mut self, trigger: Trigger) {
        let from = self.state();
        if self.state().on(trigger).is_none() || !self.can_activate() {
            return;
        }
        if from.is_buffering() && self.session.initial_seek_done() {
            self.transition(trigger);
            return;
        }
        bridge::resync_from_presentation(&self.table, &mut self.session, &self.presentation);
        bridge::seek_to_current(&self.table, &self.session, &mut self.provider);
        if from.is_buffering() {
            self.session.mark_initial_seek();
        }
        self.surface_changed();
        self.transition(trigger);
    }

    fn can_activate(&self) -> bool {
        if self.table.is_empty() {
            warn!("timing table is empty; synchronization stays off");
            return false;
        }
        true
    }

    fn on_time_received(&mut self, position: Time) {
        let tracker = self.session.position_mut();
        tracker.on_time_received(position);
        let outstanding = tracker.outstanding();
        if !self.session.is_active() {
            trace!(
                position = %time::format_time(position),
                outstanding,
                "time answer outside active sync"
            );
            return;
        }
        trace!(position = %time::format_time(position), outstanding, "time answer");
        let outcome = self.reconciler.reconcile(
            &self.table,
            &mut self.session,
            &mut self.presentation,
            position,
        );
        if !outcome.is_noop() {
            debug!(
                advanced = outcome.advanced,
                retreated = outcome.retreated,
                step = self.session.current(),
                "steps reconciled"
            );
            self.surface_changed();
        }
    }

    /// Apply a state-machine trigger, returning whether the state changed
    fn transition(&mut self, trigger: Trigger) -> bool {
        let from = self.state();
        let Some(to) = from.on(trigger) else {
            return false;
        };
        if to.is_active() && !self.can_activate() {
            return false;
        }
        info!(%from, %to, cause = ?trigger, "playback state changed");
        self.session.set_state(to);
        if to.is_active() {
            // steps may have moved while sync was off
            bridge::resync_from_presentation(&self.table, &mut self.session, &self.presentation);
            self.arm_poll();
        }
        true
    }

    fn arm_poll(&mut self) {
        if self.poll_armed {
            return;
        }
        self.poll_armed = true;
        self.request_timer(TimerKind::Poll, self.config.poll_interval);
    }

    fn request_timer(&mut self, kind: TimerKind, delay: Duration) {
        self.timers.push(TimerRequest { kind, delay });
    }

    fn send(&mut self, command: ProviderCommand) {
        if let Err(error) = self.provider.send(command) {
            warn!(%error, method = command.method_name(), "provider command was not sent");
        }
    }

    fn surface_changed(&mut self) {
        let viewport = self
            .table
            .viewport(self.session.current(), self.config.default_viewport);
        self.presentation.surface_changed(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::step::StepMetadata;
    use crate::core::time::from_seconds;
    use crate::provider::EventKind;
    use crate::test_support::{Move, RecordingPresentation, RecordingProvider};

    type TestEngine = SyncEngine<RecordingProvider, RecordingPresentation>;

    type Fixture = (TestEngine, RecordingProvider, RecordingPresentation);

    fn engine_with(table: TimingTable, deck: RecordingPresentation) -> Fixture {
        let provider = RecordingProvider::default();
        let config = EngineConfig::default();
        let engine = SyncEngine::new(provider.clone(), deck.clone(), table, config);
        (engine, provider, deck)
    }

    fn standard() -> Fixture {
        engine_with(
            TimingTable::from_seconds(&[0.0, 10.0, 20.0, 30.0]),
            RecordingPresentation::at(0),
        )
    }

    fn load_progress(percent: f64, duration: f64) -> String {
        format!(
            r#"{{"event":"loadProgress","data":{{"percent":{percent},"duration":{duration}}}}}"#
        )
    }

    fn time_answer(seconds: f64) -> String {
        format!(r#"{{"method":"getCurrentTime","value":"{seconds}"}}"#)
    }

    fn activate(engine: &mut TestEngine, provider: &RecordingProvider) {
        engine.handle_message(r#"{"event":"ready"}"#);
        engine.handle_message(&load_progress(0.5, 100.0));
        assert!(engine.state().is_active());
        engine.drain_timers();
        provider.clear();
    }

    fn kinds(timers: &[TimerRequest]) -> Vec<TimerKind> {
        timers.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_ready_registers_listeners_and_warms_up() {
        let (mut engine, provider, _) = standard();

        engine.handle_message(r#"{"event":"ready"}"#);

        let mut expected: Vec<_> = LISTENED_EVENTS
            .iter()
            .map(|k| ProviderCommand::AddEventListener(*k))
            .collect();
        expected.push(ProviderCommand::Play);
        assert_eq!(provider.sent(), expected);
        assert_eq!(engine.state(), PlaybackState::Buffering);
        assert_eq!(
            engine.drain_timers(),
            vec![TimerRequest { kind: TimerKind::WarmupPause, delay: Duration::from_millis(1000) }]
        );

        engine.on_timer(TimerKind::WarmupPause);
        assert_eq!(provider.sent().last(), Some(&ProviderCommand::Pause));
    }

    #[test]
    fn test_duplicate_ready_is_ignored() {
        let (mut engine, provider, _) = standard();
        engine.handle_message(r#"{"event":"ready"}"#);
        let first = provider.sent().len();

        engine.handle_message(r#"{"event":"ready"}"#);

        assert_eq!(provider.sent().len(), first);
        assert!(!provider.sent().contains(&ProviderCommand::AddEventListener(EventKind::Ready)));
    }

    #[test]
    fn test_buffering_latch_seeks_and_activates() {
        let (mut engine, provider, deck) = engine_with(
            TimingTable::from_seconds(&[0.0, 10.0, 20.0, 30.0]),
            RecordingPresentation::at(2),
        );
        engine.handle_message(r#"{"event":"ready"}"#);
        engine.drain_timers();
        provider.clear();

        engine.handle_message(&load_progress(0.1, 100.0));
        assert_eq!(engine.state(), PlaybackState::Buffering);
        assert!(provider.sent().is_empty());

        engine.handle_message(&load_progress(0.25, 100.0));
        assert!(engine.state().is_active());
        assert_eq!(provider.sent(), vec![ProviderCommand::SeekTo(from_seconds(20.0))]);
        assert_eq!(engine.session().current(), 2);
        assert_eq!(kinds(&engine.drain_timers()), vec![TimerKind::Poll]);
        assert_eq!(deck.surfaces(), vec![Viewport::new(340, 290)]);
    }

    #[test]
    fn test_pause_play_does_not_repeat_initial_seek() {
        let (mut engine, provider, _) = standard();
        engine.handle_message(r#"{"event":"ready"}"#);
        engine.drain_timers();
        provider.clear();

        engine.handle_message(&load_progress(0.5, 100.0));
        assert_eq!(provider.seeks().len(), 1);
        assert_eq!(kinds(&engine.drain_timers()), vec![TimerKind::Poll]);

        engine.handle_message(r#"{"event":"pause"}"#);
        assert_eq!(engine.state(), PlaybackState::Paused);
        engine.on_poll_tick();
        assert!(engine.drain_timers().is_empty());
        assert!(!provider.sent().contains(&ProviderCommand::GetCurrentTime));

        engine.handle_message(r#"{"event":"play"}"#);
        assert!(engine.state().is_active());
        assert_eq!(kinds(&engine.drain_timers()), vec![TimerKind::Poll]);
        engine.handle_message(&load_progress(0.9, 100.0));
        assert_eq!(provider.seeks().len(), 1);

        engine.on_poll_tick();
        assert_eq!(provider.sent().last(), Some(&ProviderCommand::GetCurrentTime));
    }

    #[test]
    fn test_poll_loop_rearms_only_from_tick() {
        let (mut engine, provider, _) = standard();
        activate(&mut engine, &provider);

        engine.on_poll_tick();
        engine.on_poll_tick();
        assert_eq!(kinds(&engine.drain_timers()), vec![TimerKind::Poll, TimerKind::Poll]);
        assert_eq!(provider.sent(), vec![ProviderCommand::GetCurrentTime; 2]);

        // play while a tick is outstanding must not start a second loop
        engine.handle_message(r#"{"event":"pause"}"#);
        engine.handle_message(r#"{"event":"play"}"#);
        assert!(engine.drain_timers().is_empty());
    }

    #[test]
    fn test_time_answer_drives_reconciliation() {
        let (mut engine, provider, deck) = standard();
        activate(&mut engine, &provider);

        engine.handle_message(&time_answer(25.0));

        assert_eq!(deck.moves(), vec![Move::Next, Move::Next]);
        assert_eq!(engine.session().current(), 2);
        assert_eq!(engine.session().position().last_known(), Some(from_seconds(25.0)));

        engine.handle_message(&time_answer(25.0));
        assert_eq!(deck.moves().len(), 2);
    }

    #[test]
    fn test_time_answer_ignored_when_paused() {
        let (mut engine, provider, deck) = standard();
        activate(&mut engine, &provider);
        engine.handle_message(r#"{"event":"pause"}"#);

        engine.handle_message(&time_answer(25.0));

        assert!(deck.moves().is_empty());
        assert_eq!(engine.session().position().last_known(), Some(from_seconds(25.0)));
    }

    #[test]
    fn test_finish_then_play_resumes_with_seek() {
        let (mut engine, provider, deck) = standard();
        activate(&mut engine, &provider);
        engine.handle_message(&time_answer(31.0));
        engine.handle_message(r#"{"event":"finish"}"#);
        assert!(engine.state().is_finished());

        engine.handle_message(r#"{"event":"playProgress","data":{"seconds":1}}"#);
        assert!(engine.state().is_finished());

        deck.set_active(1);
        provider.clear();
        engine.handle_message(r#"{"event":"play"}"#);

        assert!(engine.state().is_active());
        assert_eq!(provider.sent(), vec![ProviderCommand::SeekTo(from_seconds(10.0))]);
        assert_eq!(engine.session().current(), 1);
    }

    #[test]
    fn test_seek_event_does_not_reconcile() {
        let (mut engine, provider, deck) = standard();
        activate(&mut engine, &provider);

        engine.handle_message(r#"{"event":"seek","data":{"seconds":28.0}}"#);

        assert!(deck.moves().is_empty());
        assert!(provider.sent().is_empty());
    }

    #[test]
    fn test_manual_navigation_seeks_after_key() {
        let (mut engine, provider, deck) = standard();
        activate(&mut engine, &provider);
        engine.handle_message(&time_answer(12.0));
        assert_eq!(engine.session().current(), 1);

        assert!(engine.on_key(39));
        assert_eq!(
            engine.drain_timers(),
            vec![TimerRequest { kind: TimerKind::ManualSettle, delay: Duration::from_millis(100) }]
        );
        deck.set_active(2);
        engine.on_timer(TimerKind::ManualSettle);

        assert_eq!(provider.seeks(), vec![ProviderCommand::SeekTo(from_seconds(20.0))]);
        assert_eq!(engine.session().current(), 2);
        assert_eq!(engine.session().next_index(), 3);
    }

    #[test]
    fn test_keys_ignored_when_not_active() {
        let (mut engine, _, _) = standard();
        assert!(!engine.on_key(39));
        assert!(!engine.on_key(65));
        assert!(engine.drain_timers().is_empty());
    }

    #[test]
    fn test_buttons() {
        let (mut engine, provider, deck) = standard();

        engine.on_button("Play");
        engine.on_button("Pause");
        engine.on_button("Share");
        assert_eq!(provider.sent(), vec![ProviderCommand::Play, ProviderCommand::Pause]);

        engine.on_button("addenda");
        assert_eq!(
            engine.drain_timers(),
            vec![TimerRequest { kind: TimerKind::Addenda, delay: Duration::ZERO }]
        );
        engine.on_timer(TimerKind::Addenda);
        assert_eq!(deck.moves(), vec![Move::Next]);
    }

    #[test]
    fn test_addenda_keeps_session_on_presentation_step() {
        let (mut engine, provider, deck) = standard();
        activate(&mut engine, &provider);
        engine.handle_message(&time_answer(12.0));
        assert_eq!((engine.session().current(), deck.active()), (1, 1));
        provider.clear();

        engine.on_button("addenda");
        for timer in engine.drain_timers() {
            engine.on_timer(timer.kind);
        }

        assert_eq!(deck.active(), 2);
        assert_eq!(engine.session().current(), deck.active());
        assert_eq!(provider.seeks(), vec![ProviderCommand::SeekTo(from_seconds(20.0))]);

        engine.handle_message(&time_answer(25.0));
        assert_eq!(engine.session().current(), 2);
        assert_eq!(deck.active(), 2);
    }

    #[test]
    fn test_resume_picks_up_navigation_made_while_paused() {
        let (mut engine, provider, deck) = standard();
        activate(&mut engine, &provider);
        engine.handle_message(r#"{"event":"pause"}"#);

        assert!(!engine.on_key(39));
        deck.set_active(2);
        engine.handle_message(r#"{"event":"play"}"#);
        assert_eq!(engine.session().current(), 2);

        engine.handle_message(&time_answer(21.0));
        assert!(deck.moves().is_empty());
        assert_eq!(deck.active(), 2);
    }

    #[test]
    fn test_malformed_and_unknown_messages_do_not_disturb_session() {
        let (mut engine, provider, _) = standard();
        activate(&mut engine, &provider);

        engine.handle_message("{{{");
        engine.handle_message(r#"{"event":"volumechange"}"#);
        engine.handle_message(r#"{"method":"getVolume","value":0.5}"#);
        engine.handle_message(r#"{"method":"getCurrentTime","value":"later"}"#);

        assert!(engine.state().is_active());
        assert_eq!(engine.session().current(), 0);
        assert!(provider.sent().is_empty());
    }

    #[test]
    fn test_empty_table_never_activates() {
        let (mut engine, provider, _) =
            engine_with(TimingTable::default(), RecordingPresentation::at(0));
        engine.handle_message(r#"{"event":"ready"}"#);
        engine.handle_message(&load_progress(1.0, 100.0));
        engine.handle_message(r#"{"event":"play"}"#);

        assert_eq!(engine.state(), PlaybackState::Buffering);
        assert!(provider.seeks().is_empty());
    }

    #[test]
    fn test_untimed_current_step_stalls_latch() {
        let table = TimingTable::build(vec![StepMetadata::untimed(), StepMetadata::at("10")]);
        let (mut engine, provider, _) = engine_with(table, RecordingPresentation::at(0));
        engine.handle_message(r#"{"event":"ready"}"#);
        engine.handle_message(&load_progress(1.0, 100.0));

        assert_eq!(engine.state(), PlaybackState::Buffering);
        assert!(provider.seeks().is_empty());
    }

    #[test]
    fn test_play_during_buffering_performs_initial_seek_once() {
        let (mut engine, provider, deck) = engine_with(
            TimingTable::from_seconds(&[0.0, 10.0, 20.0]),
            RecordingPresentation::at(1),
        );
        engine.handle_message(r#"{"event":"ready"}"#);
        provider.clear();

        engine.handle_message(r#"{"event":"play"}"#);
        assert!(engine.state().is_active());
        assert_eq!(provider.seeks(), vec![ProviderCommand::SeekTo(from_seconds(10.0))]);

        engine.handle_message(r#"{"event":"pause"}"#);
        engine.handle_message(&load_progress(1.0, 100.0));
        engine.handle_message(r#"{"event":"play"}"#);
        assert_eq!(provider.seeks().len(), 1);
        assert!(deck.moves().is_empty());
    }

    #[test]
    fn test_step_viewport_reported_after_transition() {
        let table = TimingTable::build(vec![
            StepMetadata::at("0"),
            StepMetadata::at("10").with_viewport(Viewport::new(800, 450)),
        ]);
        let (mut engine, provider, deck) = engine_with(table, RecordingPresentation::at(0));
        activate(&mut engine, &provider);

        engine.handle_message(&time_answer(11.0));

        assert_eq!(deck.surfaces().last(), Some(&Viewport::new(800, 450)));
    }

    #[test]
    fn test_config_from_settings() {
        let settings = Settings::from_toml_str(
            "[sync]\ntolerance_secs = 2.5\npoll_interval_ms = 500\n\
             [player]\ndefault_width = 640\ndefault_height = 360",
        )
        .unwrap();
        let config = EngineConfig::from(&settings);

        assert_eq!(config.tolerance, from_seconds(2.5));
        assert_eq!(config.poll_interval, Duration::from_millis(500));
        assert_eq!(config.default_viewport, Viewport::new(640, 360));
    }
}

//! Tokio driver for [`SyncEngine`].
//!
//! Everything the engine reacts to arrives on one channel and is handled on
//! one task, so callbacks run in delivery order and never overlap. Timers are
//! short-lived tasks that post [`DriverEvent::Timer`] back to that channel.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::playback::{SyncEngine, TimerKind, TimerRequest};
use crate::presentation::Presentation;
use crate::provider::VideoProvider;

/// Input to the driver loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    /// Raw message from the video provider
    Provider(String),
    /// Key released, DOM key code
    Key(u32),
    /// Button clicked, by label
    Button(String),
    Timer(TimerKind),
    Shutdown,
}

/// Parse one line of the stdio protocol.
///
/// `key:<code>` and `button:<label>` are navigation triggers; any other
/// non-empty line is a provider message.
pub fn parse_line(line: &str) -> Option<DriverEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(code) = line.strip_prefix("key:") {
        return match code.trim().parse() {
            Ok(code) => Some(DriverEvent::Key(code)),
            Err(_) => {
                warn!(line, "ignoring key trigger with a bad code");
                None
            }
        };
    }
    if let Some(label) = line.strip_prefix("button:") {
        return Some(DriverEvent::Button(label.trim().to_string()));
    }
    Some(DriverEvent::Provider(line.to_string()))
}

pub struct SyncRuntime<P, D> {
    engine: SyncEngine<P, D>,
    events_tx: mpsc::UnboundedSender<DriverEvent>,
    events_rx: mpsc::UnboundedReceiver<DriverEvent>,
}

impl<P: VideoProvider, D: Presentation> SyncRuntime<P, D> {
    pub fn new(engine: SyncEngine<P, D>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            engine,
            events_tx,
            events_rx,
        }
    }

    /// Sender for feeding events into the loop
    pub fn handle(&self) -> mpsc::UnboundedSender<DriverEvent> {
        self.events_tx.clone()
    }

    /// Run until `Shutdown` arrives or every sender is gone.
    ///
    /// Pending timers keep the channel open, so while synchronization is
    /// active only `Shutdown` ends the loop. Must be called inside a tokio
    /// runtime with the time driver enabled.
    pub async fn run(self) -> SyncEngine<P, D> {
        let Self {
            mut engine,
            events_tx,
            mut events_rx,
        } = self;
        let timer_tx = events_tx.downgrade();
        drop(events_tx);

        info!("synchronization loop started");
        while let Some(event) = events_rx.recv().await {
            match event {
                DriverEvent::Provider(raw) => engine.handle_message(&raw),
                DriverEvent::Key(code) => {
                    engine.on_key(code);
                }
                DriverEvent::Button(label) => engine.on_button(&label),
                DriverEvent::Timer(kind) => engine.on_timer(kind),
                DriverEvent::Shutdown => break,
            }

            for request in engine.drain_timers() {
                let Some(tx) = timer_tx.upgrade() else {
                    debug!(kind = ?request.kind, "driver closing; timer dropped");
                    continue;
                };
                schedule(tx, request);
            }
        }
        info!(state = %engine.state(), "synchronization loop stopped");
        engine
    }
}

fn schedule(tx: mpsc::UnboundedSender<DriverEvent>, request: TimerRequest) {
    tokio::spawn(async move {
        tokio::time::sleep(request.delay).await;
        let _ = tx.send(DriverEvent::Timer(request.kind));
    });
}

/// Forward stdin lines to the driver, then request shutdown at EOF
pub async fn read_stdin(events: mpsc::UnboundedSender<DriverEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if let Some(event) = parse_line(&line) {
                    if events.send(event).is_err() {
                        return;
                    }
                }
            }
            Ok(None) => break,
            Err(error) => {
                warn!(%error, "stdin read failed");
                break;
            }
        }
    }
    let _ = events.send(DriverEvent::Shutdown);
}

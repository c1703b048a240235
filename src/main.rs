//! Stdio bridge for the synchronization engine.
//!
//! Reads provider messages and navigation triggers from stdin, one per line,
//! and writes outbound player frames to stdout as `<origin>\t<json>`.

use std::io::Write;
use std::thread;

use slidesync::logging;
use slidesync::presentation::LoggedPresentation;
use slidesync::runtime::{self, SyncRuntime};
use slidesync::{EngineConfig, Settings, SyncEngine, SyncError, TimingTable, VimeoProvider};

fn main() -> Result<(), SyncError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "slidesync.toml".to_string());
    let settings = Settings::load(&path)?;
    logging::init_tracing(&settings.sync.log_level);
    tracing::info!(path = %path, steps = settings.steps.len(), "settings loaded");

    let table = TimingTable::build(settings.step_metadata());
    let presentation = LoggedPresentation::new(table.len());
    let (provider, frames) = VimeoProvider::with_channel(&settings.player.src);
    tracing::info!(origin = provider.origin(), "posting player commands");

    let writer = thread::spawn(move || {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for frame in frames.iter() {
            if writeln!(out, "{}\t{}", frame.origin, frame.payload).is_err() {
                break;
            }
            let _ = out.flush();
        }
    });

    let engine = SyncEngine::new(provider, presentation, table, EngineConfig::from(&settings));
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let engine = rt.block_on(async move {
        let sync = SyncRuntime::new(engine);
        tokio::spawn(runtime::read_stdin(sync.handle()));
        sync.run().await
    });

    // Dropping the engine closes the frame channel and ends the writer.
    drop(engine);
    let _ = writer.join();
    Ok(())
}

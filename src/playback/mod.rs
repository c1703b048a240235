pub mod bridge;
pub mod engine;
pub mod position;
pub mod session;
pub mod state;
pub mod sync;

pub use engine::{EngineConfig, SyncEngine, TimerKind, TimerRequest};
pub use position::PositionTracker;
pub use session::SyncSession;
pub use state::{PlaybackState, Trigger};
pub use sync::{Reconciler, Reconciliation, DEFAULT_TOLERANCE};

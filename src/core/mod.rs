//! Core types for step synchronization.
//!
//! Time values are nanoseconds (i64) throughout; steps are addressed by
//! their dense presentation-order index.

pub mod step;
pub mod time;

pub use step::{Step, StepIndex, StepMetadata, Viewport};
pub use time::{Time, ZERO};

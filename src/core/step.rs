//! Step metadata as declared by the presentation.

use crate::core::time::{self, Time};

/// Position of a step in presentation order
pub type StepIndex = usize;

/// Dimensions of the video surface while a step is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Raw metadata read from one step before the timing table is built.
///
/// The start time stays a string because that is how presentations
/// declare it; parsing happens in [`StepMetadata::start_time`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepMetadata {
    pub declared_start: Option<String>,
    pub viewport: Option<Viewport>,
}

impl StepMetadata {
    /// Metadata with a declared start time in seconds
    pub fn at(seconds: impl Into<String>) -> Self {
        Self {
            declared_start: Some(seconds.into()),
            viewport: None,
        }
    }

    /// Metadata with no declared start time
    pub fn untimed() -> Self {
        Self::default()
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Parsed start time, `None` if absent or unparsable
    pub fn start_time(&self) -> Option<Time> {
        self.declared_start.as_deref().and_then(time::parse_seconds)
    }
}

/// A step after indexing.
///
/// `index` is dense and matches presentation order. `start_time` is
/// `None` when the step declared no usable time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub index: StepIndex,
    pub start_time: Option<Time>,
    pub viewport: Option<Viewport>,
}

//! Ordered step start times, built once from step metadata.

use tracing::warn;

use crate::core::step::{Step, StepIndex, StepMetadata, Viewport};
use crate::core::time::{self, Time};

/// Step index -> video start time.
///
/// Indices are dense and match presentation order even when a step has no
/// declared time; such steps hold `None` and are reported once at build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingTable {
    steps: Vec<Step>,
}

impl TimingTable {
    /// Build the table from steps in presentation order.
    ///
    /// Start times are assumed non-decreasing; this is not checked.
    pub fn build<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = StepMetadata>,
    {
        let steps: Vec<Step> = steps
            .into_iter()
            .enumerate()
            .map(|(index, meta)| {
                let start_time = meta.start_time();
                if start_time.is_none() {
                    warn!(
                        step = index,
                        declared = ?meta.declared_start,
                        "step has no usable start time; it will not drive synchronization"
                    );
                }
                Step {
                    index,
                    start_time,
                    viewport: meta.viewport,
                }
            })
            .collect();

        Self { steps }
    }

    /// Convenience constructor from already-known times in seconds
    pub fn from_seconds(times: &[f64]) -> Self {
        Self {
            steps: times
                .iter()
                .enumerate()
                .map(|(index, &secs)| Step {
                    index,
                    start_time: time::seconds_checked(secs),
                    viewport: None,
                })
                .collect(),
        }
    }

    /// Start time of a step; `None` when out of range or undeclared
    pub fn start_time(&self, index: StepIndex) -> Option<Time> {
        self.steps.get(index).and_then(|step| step.start_time)
    }

    /// Declared viewport of a step, falling back to `default`
    pub fn viewport(&self, index: StepIndex, default: Viewport) -> Viewport {
        self.steps
            .get(index)
            .and_then(|step| step.viewport)
            .unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the last step, `None` for an empty table
    pub fn last_index(&self) -> Option<StepIndex> {
        self.steps.len().checked_sub(1)
    }

    /// Indices of steps without a usable start time
    pub fn gaps(&self) -> Vec<StepIndex> {
        self.steps
            .iter()
            .filter(|step| step.start_time.is_none())
            .map(|step| step.index)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

// File: crates/chart-core/src/timeline.rs
// Summary: Merge every series' timestamps into one sorted, deduplicated x-axis.

use tracing::{debug, warn};

use crate::series::SeriesSet;

/// Strictly increasing, unique timestamps shared by every series of a chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    stamps: Vec<i64>,
}

impl Timeline {
    /// Build directly from timestamps in any order.
    pub fn from_timestamps(mut stamps: Vec<i64>) -> Self {
        stamps.sort_unstable();
        stamps.dedup();
        Self { stamps }
    }

    /// Position of `timestamp` on the axis, or `None` if it never made it onto the timeline.
    #[inline]
    pub fn index_of(&self, timestamp: i64) -> Option<usize> {
        self.stamps.binary_search(&timestamp).ok()
    }

    pub fn get(&self, index: usize) -> Option<i64> { self.stamps.get(index).copied() }

    pub fn as_slice(&self) -> &[i64] { &self.stamps }

    pub fn len(&self) -> usize { self.stamps.len() }

    pub fn is_empty(&self) -> bool { self.stamps.is_empty() }

    /// A line needs at least two distinct x positions.
    pub fn is_plottable(&self) -> bool { self.stamps.len() >= 2 }
}

/// Collects timestamps from a [`SeriesSet`] under a fixed sample budget.
#[derive(Clone, Copy, Debug)]
pub struct TimelineBuilder {
    pub max_samples: usize,
}

impl TimelineBuilder {
    pub fn new(max_samples: usize) -> Self {
        Self { max_samples }
    }

    /// Every series contributes; past the budget the oldest unique timestamps are cut,
    /// so no node loses its recent samples because it registered late.
    pub fn build(&self, set: &SeriesSet) -> Timeline {
        let stamps: Vec<i64> = set
            .iter()
            .flat_map(|s| s.samples.iter().map(|p| p.timestamp))
            .collect();
        let collected = stamps.len();
        let mut timeline = Timeline::from_timestamps(stamps);
        let unique = timeline.len();
        if unique > self.max_samples {
            timeline.stamps.drain(..unique - self.max_samples);
            warn!(unique, kept = self.max_samples, "timeline over budget; oldest timestamps dropped");
        }
        debug!(collected, unique = timeline.len(), "timeline merged");
        timeline
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new(crate::series::SeriesLimits::default().max_timeline_samples)
    }
}

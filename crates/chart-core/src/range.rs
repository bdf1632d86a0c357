// File: crates/chart-core/src/range.rs
// Summary: Value range of one metric across all series, with degenerate-range widening.

use crate::error::{ChartError, ChartResult};
use crate::metric::MetricKind;
use crate::series::SeriesSet;
use crate::types::DEGENERATE_SPAN;

/// Closed value interval used to normalize a metric. Contract: `max > min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Build a range, widening a zero-width interval symmetrically around its value.
    pub fn new(min: f64, max: f64) -> Self {
        if (max - min).abs() < 1e-12 {
            let half = DEGENERATE_SPAN * 0.5;
            return Self { min: min - half, max: min + half };
        }
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// Position of `v` inside the range: 0.0 at `min`, 1.0 at `max`.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

/// Min/max of `metric` over every sample of every series.
pub fn value_range(set: &SeriesSet, metric: MetricKind) -> ChartResult<ValueRange> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in set.iter() {
        for (_, v) in s.points(metric) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return Err(ChartError::NoData { metric });
    }
    Ok(ValueRange::new(lo, hi))
}

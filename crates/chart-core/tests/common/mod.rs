// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.
#![allow(dead_code)]

use netchart_core::{MetricValues, Record, Series, SeriesSet};

/// Same value for all four metrics.
pub fn flat(v: f64) -> MetricValues {
    MetricValues::new(v, v, v, v)
}

/// A series whose every metric follows `values`.
pub fn series(node: &str, data: &[(i64, f64)]) -> Series {
    Series::with_samples(node, data.iter().map(|&(t, v)| (t, flat(v))).collect())
}

pub fn set(series: Vec<Series>) -> SeriesSet {
    series.into_iter().collect()
}

pub fn record(node: &str, t: i64, v: f64) -> Record {
    Record::new(node, t, flat(v))
}

// File: crates/chart-core/src/series.rs
// Summary: Measurement records and per-node series grouped in registration order.
// Notes:
// - Grouping never fails: nodes past `max_series` are dropped and each series
//   keeps only its newest `max_samples_per_series` samples.

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::metric::{MetricKind, MetricValues};

/// One row from the data source.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Record {
    pub node_id: String,
    /// Epoch seconds or epoch milliseconds.
    pub timestamp: i64,
    pub latency: f64,
    pub jitter: f64,
    pub packet_loss: f64,
    pub bandwidth: f64,
}

impl Record {
    pub fn new(node_id: impl Into<String>, timestamp: i64, values: MetricValues) -> Self {
        Self {
            node_id: node_id.into(),
            timestamp,
            latency: values.latency,
            jitter: values.jitter,
            packet_loss: values.packet_loss,
            bandwidth: values.bandwidth,
        }
    }

    pub fn values(&self) -> MetricValues {
        MetricValues::new(self.latency, self.jitter, self.packet_loss, self.bandwidth)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: i64,
    pub values: MetricValues,
}

/// One node's ordered history, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub node_id: String,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self { node_id: node_id.into(), samples: Vec::new() }
    }

    /// Build a series from `(timestamp, values)` pairs.
    pub fn with_samples(node_id: impl Into<String>, data: Vec<(i64, MetricValues)>) -> Self {
        let samples = data
            .into_iter()
            .map(|(timestamp, values)| Sample { timestamp, values })
            .collect();
        Self { node_id: node_id.into(), samples }
    }

    pub fn push(&mut self, timestamp: i64, values: MetricValues) {
        self.samples.push(Sample { timestamp, values });
    }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// `(timestamp, value)` pairs for `metric`, skipping absent values.
    pub fn points(&self, metric: MetricKind) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.samples
            .iter()
            .filter_map(move |s| s.values.get(metric).map(|v| (s.timestamp, v)))
    }

    /// Drop the oldest samples until at most `max` remain. Returns how many were dropped.
    pub fn truncate_oldest(&mut self, max: usize) -> usize {
        let excess = self.samples.len().saturating_sub(max);
        if excess > 0 {
            self.samples.drain(..excess);
        }
        excess
    }
}

/// Caps on how much data one rendering pass may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeriesLimits {
    pub max_series: usize,
    pub max_samples_per_series: usize,
    /// Upper bound on unique timestamps kept on the merged timeline; the newest win.
    pub max_timeline_samples: usize,
}

impl Default for SeriesLimits {
    fn default() -> Self {
        Self { max_series: 12, max_samples_per_series: 1000, max_timeline_samples: 12_000 }
    }
}

/// All series for one rendering pass, keyed by node identifier.
#[derive(Clone, Debug, Default)]
pub struct SeriesSet {
    series: IndexMap<String, Series>,
    dropped_records: usize,
}

impl SeriesSet {
    pub fn new() -> Self { Self::default() }

    /// Group records by node identifier in arrival order, enforcing `limits`.
    pub fn from_records<I>(records: I, limits: &SeriesLimits) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut set = Self::new();
        for rec in records {
            if !set.series.contains_key(&rec.node_id) && set.series.len() >= limits.max_series {
                set.dropped_records += 1;
                continue;
            }
            let values = rec.values();
            set.series
                .entry(rec.node_id.clone())
                .or_insert_with(|| Series::new(rec.node_id))
                .push(rec.timestamp, values);
        }
        if set.dropped_records > 0 {
            warn!(
                dropped = set.dropped_records,
                max_series = limits.max_series,
                "series cap reached; records from extra nodes dropped"
            );
        }
        for s in set.series.values_mut() {
            let evicted = s.truncate_oldest(limits.max_samples_per_series);
            if evicted > 0 {
                debug!(node = %s.node_id, evicted, "oldest samples evicted");
                set.dropped_records += evicted;
            }
        }
        set
    }

    /// Register a ready-made series. A series with an existing node id replaces it in place.
    pub fn insert(&mut self, series: Series) {
        self.series.insert(series.node_id.clone(), series);
    }

    pub fn get(&self, node_id: &str) -> Option<&Series> { self.series.get(node_id) }

    /// Series in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> { self.series.values() }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// Records discarded by the series or per-series sample caps.
    pub fn dropped_records(&self) -> usize { self.dropped_records }
}

impl FromIterator<Series> for SeriesSet {
    fn from_iter<T: IntoIterator<Item = Series>>(iter: T) -> Self {
        let mut set = Self::new();
        for s in iter {
            set.insert(s);
        }
        set
    }
}

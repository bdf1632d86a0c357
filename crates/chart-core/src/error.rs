// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for rendering, data sources and output sinks.

use thiserror::Error;

use crate::metric::MetricKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("insufficient data: no series present")]
    NoSeries,

    #[error("insufficient data: timeline has {points} unique point(s), need at least 2")]
    SparseTimeline { points: usize },

    #[error("insufficient data: no {metric} values in any series")]
    NoData { metric: MetricKind },

    #[error("output sink could not write {name}: {source}")]
    Sink {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("data source failed: {0}")]
    Source(String),

    #[error("malformed csv input: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid config: {0}")]
    Config(String),
}

impl ChartError {
    /// True for the conditions that skip a chart for this cycle instead of failing it.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            ChartError::NoSeries | ChartError::SparseTimeline { .. } | ChartError::NoData { .. }
        )
    }
}

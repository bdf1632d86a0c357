// File: crates/chart-core/src/analysis.rs
// Summary: Z-score based anomaly checks over a node's series.

use crate::metric::MetricKind;
use crate::series::Series;

/// |z| above which a latency sample counts as a spike.
pub const SPIKE_Z: f64 = 3.0;

/// Standard score of `value`; 0.0 when the distribution has no spread.
pub fn zscore(value: f64, mean: f64, stddev: f64) -> f64 {
    if stddev == 0.0 {
        return 0.0;
    }
    (value - mean) / stddev
}

/// Mean and population standard deviation of one metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
    pub mean: f64,
    pub stddev: f64,
}

impl Baseline {
    /// `None` when the series holds no value for `metric`.
    pub fn from_series(series: &Series, metric: MetricKind) -> Option<Self> {
        let values: Vec<f64> = series.points(metric).map(|(_, v)| v).collect();
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self { mean, stddev: var.sqrt() })
    }

    pub fn zscore(&self, value: f64) -> f64 {
        zscore(value, self.mean, self.stddev)
    }
}

/// Timestamps whose latency sits more than [`SPIKE_Z`] deviations from the series mean.
pub fn latency_spikes(series: &Series) -> Vec<i64> {
    let Some(base) = Baseline::from_series(series, MetricKind::Latency) else {
        return Vec::new();
    };
    series
        .points(MetricKind::Latency)
        .filter(|&(_, v)| base.zscore(v).abs() > SPIKE_Z)
        .map(|(t, _)| t)
        .collect()
}

/// Timestamps whose packet loss exceeds `threshold` percent.
pub fn packet_loss_breaches(series: &Series, threshold: f64) -> Vec<i64> {
    series
        .points(MetricKind::PacketLoss)
        .filter(|&(_, v)| v > threshold)
        .map(|(t, _)| t)
        .collect()
}

/// Anomaly counts for one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeAnomalies {
    pub node_id: String,
    pub latency_spikes: usize,
    pub loss_breaches: usize,
}

impl NodeAnomalies {
    pub fn scan(series: &Series, loss_threshold: f64) -> Self {
        Self {
            node_id: series.node_id.clone(),
            latency_spikes: latency_spikes(series).len(),
            loss_breaches: packet_loss_breaches(series, loss_threshold).len(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.latency_spikes == 0 && self.loss_breaches == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricValues;

    #[test]
    fn zero_spread_scores_zero() {
        assert_eq!(zscore(10.0, 10.0, 0.0), 0.0);
        assert_eq!(zscore(12.0, 10.0, 1.0), 2.0);
    }

    #[test]
    fn single_outlier_is_a_spike() {
        let mut s = Series::new("a");
        for t in 0..20 {
            s.push(t, MetricValues::new(10.0, 0.0, 0.0, 0.0));
        }
        s.push(20, MetricValues::new(500.0, 0.0, 0.0, 0.0));
        assert_eq!(latency_spikes(&s), vec![20]);
    }

    #[test]
    fn loss_above_threshold_only() {
        let s = Series::with_samples(
            "a",
            vec![
                (1, MetricValues::new(0.0, 0.0, 5.0, 0.0)),
                (2, MetricValues::new(0.0, 0.0, 5.1, 0.0)),
            ],
        );
        assert_eq!(packet_loss_breaches(&s, 5.0), vec![2]);
    }
}

// File: crates/chart-core/src/metric.rs
// Summary: The four measured quantities and per-sample value storage.

use std::fmt;

/// One of the measured network-quality quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    Latency,
    Jitter,
    PacketLoss,
    Bandwidth,
}

impl MetricKind {
    /// Every metric, in rendering order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Latency,
        MetricKind::Jitter,
        MetricKind::PacketLoss,
        MetricKind::Bandwidth,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            MetricKind::Latency => "Latency",
            MetricKind::Jitter => "Jitter",
            MetricKind::PacketLoss => "Packet Loss",
            MetricKind::Bandwidth => "Bandwidth",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Latency | MetricKind::Jitter => "ms",
            MetricKind::PacketLoss => "%",
            MetricKind::Bandwidth => "Mbps",
        }
    }

    /// Key under which the chart document for this metric is stored.
    pub fn stem(self) -> &'static str {
        match self {
            MetricKind::Latency => "latency",
            MetricKind::Jitter => "jitter",
            MetricKind::PacketLoss => "packet_loss",
            MetricKind::Bandwidth => "bandwidth",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// The four values captured by one measurement.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MetricValues {
    pub latency: f64,
    pub jitter: f64,
    pub packet_loss: f64,
    pub bandwidth: f64,
}

impl MetricValues {
    pub const fn new(latency: f64, jitter: f64, packet_loss: f64, bandwidth: f64) -> Self {
        Self { latency, jitter, packet_loss, bandwidth }
    }

    /// Value of `metric`, or `None` when it is absent (non-finite).
    pub fn get(&self, metric: MetricKind) -> Option<f64> {
        let v = match metric {
            MetricKind::Latency => self.latency,
            MetricKind::Jitter => self.jitter,
            MetricKind::PacketLoss => self.packet_loss,
            MetricKind::Bandwidth => self.bandwidth,
        };
        v.is_finite().then_some(v)
    }
}

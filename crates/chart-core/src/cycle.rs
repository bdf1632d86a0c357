// File: crates/chart-core/src/cycle.rs
// Summary: One rendering pass: group records, merge the timeline, render and hand off every metric.

use tracing::{info, warn};

use crate::analysis::NodeAnomalies;
use crate::chart::{ChartRenderer, RenderOptions};
use crate::metric::MetricKind;
use crate::series::{Record, SeriesLimits, SeriesSet};
use crate::sink::OutputSink;
use crate::timeline::TimelineBuilder;

/// Packet loss (percent) above which a sample counts as a breach.
pub const DEFAULT_LOSS_THRESHOLD: f64 = 5.0;

/// What one pass produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CycleReport {
    pub written: Vec<MetricKind>,
    pub skipped: Vec<(MetricKind, String)>,
    pub failed: Vec<(MetricKind, String)>,
    pub series: usize,
    pub timeline_len: usize,
    pub dropped_records: usize,
    pub anomalies: Vec<NodeAnomalies>,
}

impl CycleReport {
    /// True when at least one document reached the sink.
    pub fn any_written(&self) -> bool { !self.written.is_empty() }
}

#[derive(Clone, Debug)]
pub struct RenderCycle {
    pub renderer: ChartRenderer,
    pub limits: SeriesLimits,
    pub loss_threshold: f64,
}

impl Default for RenderCycle {
    fn default() -> Self {
        Self::new(RenderOptions::default(), SeriesLimits::default())
    }
}

impl RenderCycle {
    pub fn new(opts: RenderOptions, limits: SeriesLimits) -> Self {
        Self { renderer: ChartRenderer::new(opts), limits, loss_threshold: DEFAULT_LOSS_THRESHOLD }
    }

    pub fn with_loss_threshold(mut self, threshold: f64) -> Self {
        self.loss_threshold = threshold;
        self
    }

    /// Render every metric from `records`. Never fails; problems end up in the report.
    pub fn run<S>(&self, records: Vec<Record>, sink: &mut S) -> CycleReport
    where
        S: OutputSink + ?Sized,
    {
        let set = SeriesSet::from_records(records, &self.limits);
        let timeline = TimelineBuilder::new(self.limits.max_timeline_samples).build(&set);

        let mut report = CycleReport {
            series: set.len(),
            timeline_len: timeline.len(),
            dropped_records: set.dropped_records(),
            ..CycleReport::default()
        };

        for s in set.iter() {
            let found = NodeAnomalies::scan(s, self.loss_threshold);
            if !found.is_clean() {
                warn!(
                    node = %found.node_id,
                    latency_spikes = found.latency_spikes,
                    loss_breaches = found.loss_breaches,
                    "anomalies detected"
                );
                report.anomalies.push(found);
            }
        }

        for metric in MetricKind::ALL {
            match self.renderer.render(&set, &timeline, metric) {
                Ok(doc) => match sink.write(&doc) {
                    Ok(()) => report.written.push(metric),
                    Err(e) => {
                        warn!(%metric, error = %e, "output sink rejected chart");
                        report.failed.push((metric, e.to_string()));
                    }
                },
                Err(e) if e.is_insufficient_data() => {
                    info!(%metric, reason = %e, "chart skipped");
                    report.skipped.push((metric, e.to_string()));
                }
                Err(e) => {
                    warn!(%metric, error = %e, "chart failed");
                    report.failed.push((metric, e.to_string()));
                }
            }
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            series = report.series,
            timeline = report.timeline_len,
            "render cycle complete"
        );
        report
    }
}

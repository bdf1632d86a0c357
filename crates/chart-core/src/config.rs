// File: crates/chart-core/src/config.rs
// Summary: Runner configuration; every field has a default so partial files work.

use std::path::PathBuf;

use serde::Deserialize;

use crate::chart::RenderOptions;
use crate::cycle::{RenderCycle, DEFAULT_LOSS_THRESHOLD};
use crate::error::{ChartError, ChartResult};
use crate::layout::LayoutConfig;
use crate::series::SeriesLimits;
use crate::source::DEFAULT_MAX_RECORDS;
use crate::theme;
use crate::types::{MIN_LABEL_GAP_PX, PX_PER_SAMPLE};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// CSV file the records are read from.
    pub input: PathBuf,
    /// Directory receiving `<metric>.svg`.
    pub output_dir: PathBuf,
    pub interval_secs: u64,
    pub max_records: usize,
    pub limits: SeriesLimits,
    pub px_per_sample: u32,
    pub min_label_gap_px: u32,
    pub theme: String,
    pub packet_loss_threshold: f64,
    /// Rewritten with the cycle timestamp after every pass.
    pub notify_file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("metrics.csv"),
            output_dir: PathBuf::from("output"),
            interval_secs: 5,
            max_records: DEFAULT_MAX_RECORDS,
            limits: SeriesLimits::default(),
            px_per_sample: PX_PER_SAMPLE,
            min_label_gap_px: MIN_LABEL_GAP_PX,
            theme: "light".to_owned(),
            packet_loss_threshold: DEFAULT_LOSS_THRESHOLD,
            notify_file: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if self.interval_secs == 0 {
            return Err(ChartError::Config("interval_secs must be > 0".to_owned()));
        }
        if self.px_per_sample == 0 {
            return Err(ChartError::Config("px_per_sample must be > 0".to_owned()));
        }
        if self.max_records == 0
            || self.limits.max_series == 0
            || self.limits.max_samples_per_series == 0
            || self.limits.max_timeline_samples == 0
        {
            return Err(ChartError::Config("record and series limits must be > 0".to_owned()));
        }
        if theme::find_preset(&self.theme).is_none() {
            return Err(ChartError::Config(format!("unknown theme `{}`", self.theme)));
        }
        if !self.packet_loss_threshold.is_finite() {
            return Err(ChartError::Config("packet_loss_threshold must be finite".to_owned()));
        }
        Ok(self)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            layout: LayoutConfig { px_per_sample: self.px_per_sample, ..LayoutConfig::default() },
            min_label_gap_px: self.min_label_gap_px,
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }

    pub fn render_cycle(&self) -> RenderCycle {
        RenderCycle::new(self.render_options(), self.limits)
            .with_loss_threshold(self.packet_loss_threshold)
    }
}

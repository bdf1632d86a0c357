// File: crates/chart-core/src/labels.rs
// Summary: Time-axis label selection (minimum pixel gap) and wall-clock formatting.
// Notes:
// - Units are guessed from magnitude: anything above `EPOCH_MILLIS_THRESHOLD`
//   is epoch milliseconds, everything else epoch seconds. Inputs have no unit
//   tag, so values near the threshold cannot be told apart.
// - The last timeline position is labeled only when it falls on the stride.

use std::fmt;

use chrono::{Local, TimeZone};

use crate::layout::Layout;
use crate::scale::TimeScale;
use crate::timeline::Timeline;
use crate::types::{EPOCH_MILLIS_THRESHOLD, MIN_LABEL_GAP_PX, PX_PER_SAMPLE};

/// Distance below the plot band at which label anchors sit.
const LABEL_OFFSET_PX: f64 = 14.0;

/// One annotated timeline position.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeLabel {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Clone, Copy, Debug)]
pub struct LabelPlacer {
    pub min_gap_px: u32,
    pub px_per_sample: u32,
}

impl Default for LabelPlacer {
    fn default() -> Self {
        Self { min_gap_px: MIN_LABEL_GAP_PX, px_per_sample: PX_PER_SAMPLE }
    }
}

impl LabelPlacer {
    pub fn new(min_gap_px: u32, px_per_sample: u32) -> Self {
        Self { min_gap_px, px_per_sample }
    }

    /// Timeline positions between two consecutive labels; never less than one.
    pub fn stride(&self) -> usize {
        if self.px_per_sample == 0 {
            return 1;
        }
        (self.min_gap_px.div_ceil(self.px_per_sample) as usize).max(1)
    }

    /// Indices 0, stride, 2*stride, ... below `timeline.len()`.
    pub fn select(&self, timeline: &Timeline) -> Vec<usize> {
        (0..timeline.len()).step_by(self.stride()).collect()
    }

    /// Anchors and local wall-clock text for every selected position.
    pub fn place(&self, timeline: &Timeline, layout: &Layout) -> Vec<TimeLabel> {
        self.place_in(&Local, timeline, layout)
    }

    /// Same as [`place`](Self::place) with an explicit time zone.
    pub fn place_in<Tz>(&self, tz: &Tz, timeline: &Timeline, layout: &Layout) -> Vec<TimeLabel>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let time = TimeScale::new(layout.plot_left(), layout.px_per_sample as f64);
        let y = layout.plot_bottom() + LABEL_OFFSET_PX;
        self.select(timeline)
            .into_iter()
            .filter_map(|index| {
                let ts = timeline.get(index)?;
                Some(TimeLabel {
                    index,
                    x: time.to_px(index),
                    y,
                    text: format_timestamp_in(tz, ts),
                })
            })
            .collect()
    }
}

/// Split a raw timestamp into whole epoch seconds and a millisecond remainder.
pub fn split_epoch(ts: i64) -> (i64, u32) {
    if ts > EPOCH_MILLIS_THRESHOLD {
        (ts / 1000, (ts % 1000) as u32)
    } else {
        (ts, 0)
    }
}

/// `HH:MM:SS.mmm` in the local time zone.
pub fn format_timestamp(ts: i64) -> String {
    format_timestamp_in(&Local, ts)
}

/// `HH:MM:SS.mmm` in `tz`. Falls back to the raw number when the instant is out of range.
pub fn format_timestamp_in<Tz>(tz: &Tz, ts: i64) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let (secs, millis) = split_epoch(ts);
    match tz.timestamp_opt(secs, millis * 1_000_000).earliest() {
        Some(dt) => dt.format("%H:%M:%S%.3f").to_string(),
        None => ts.to_string(),
    }
}

// File: crates/chart-core/src/scale.rs
// Summary: Timeline-index (X) and value (Y) transforms into canvas pixels.

use crate::layout::Layout;
use crate::metric::MetricKind;
use crate::range::ValueRange;
use crate::series::Series;
use crate::timeline::Timeline;

/// Pixel position on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Horizontal scale: a fixed pixel step per timeline position.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f64,
    pub px_per_index: f64,
}

impl TimeScale {
    pub fn new(left_px: f64, px_per_index: f64) -> Self {
        Self { left_px, px_per_index }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.px_per_index
    }
}

/// Vertical value scale; larger values sit higher on the canvas.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub height_px: f64,
    pub range: ValueRange,
}

impl ValueScale {
    pub fn new(top_px: f64, height_px: f64, range: ValueRange) -> Self {
        Self { top_px, height_px, range }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.top_px + (1.0 - self.range.normalize(v)) * self.height_px
    }
}

/// Maps `(timestamp, value)` samples onto the canvas of one chart.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper<'a> {
    timeline: &'a Timeline,
    pub time: TimeScale,
    pub value: ValueScale,
}

impl<'a> CoordinateMapper<'a> {
    pub fn new(timeline: &'a Timeline, layout: &Layout, range: ValueRange) -> Self {
        Self {
            timeline,
            time: TimeScale::new(layout.plot_left(), layout.px_per_sample as f64),
            value: ValueScale::new(layout.plot_top(), layout.plot_height(), range),
        }
    }

    /// `None` when the timestamp has no timeline index.
    pub fn map(&self, timestamp: i64, value: f64) -> Option<Point> {
        let index = self.timeline.index_of(timestamp)?;
        Some(Point { x: self.time.to_px(index), y: self.value.to_px(value) })
    }

    /// Polyline vertices for one series, in timestamp order. Unmappable samples are left out.
    pub fn project(&self, series: &Series, metric: MetricKind) -> Vec<Point> {
        let mut pts: Vec<Point> = series
            .points(metric)
            .filter_map(|(t, v)| self.map(t, v))
            .collect();
        pts.sort_by(|a, b| a.x.total_cmp(&b.x));
        pts
    }
}

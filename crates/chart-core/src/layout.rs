// File: crates/chart-core/src/layout.rs
// Summary: Canvas geometry derived from timeline length and series count.

use crate::types::{Insets, HEIGHT, LEGEND_COLUMN_WIDTH, LEGEND_ROW_HEIGHT, MIN_PLOT_HEIGHT, PX_PER_SAMPLE};

/// Fixed constants the layout is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub px_per_sample: u32,
    pub height: u32,
    pub legend_row_height: u32,
    pub legend_column_width: u32,
    pub min_plot_height: u32,
    pub base_insets: Insets,
}

impl LayoutConfig {
    /// Legend rows that fit above a plot band of `min_plot_height`; at least one.
    pub fn max_legend_rows(&self) -> u32 {
        let spare = self
            .height
            .saturating_sub(self.base_insets.vsum())
            .saturating_sub(self.min_plot_height);
        (spare / self.legend_row_height.max(1)).max(1)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            px_per_sample: PX_PER_SAMPLE,
            height: HEIGHT,
            legend_row_height: LEGEND_ROW_HEIGHT,
            legend_column_width: LEGEND_COLUMN_WIDTH,
            min_plot_height: MIN_PLOT_HEIGHT,
            base_insets: Insets::default(),
        }
    }
}

/// Canvas size and margins for one chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub px_per_sample: u32,
    pub legend_rows: u32,
    pub legend_columns: u32,
}

impl Layout {
    pub fn plot_left(&self) -> f64 { self.insets.left as f64 }
    pub fn plot_right(&self) -> f64 { (self.width - self.insets.right) as f64 }
    pub fn plot_top(&self) -> f64 { self.insets.top as f64 }
    pub fn plot_bottom(&self) -> f64 { self.plot_top() + self.plot_height() }

    /// Height of the data band; at least one pixel even when the legend crowds it out.
    pub fn plot_height(&self) -> f64 {
        self.height.saturating_sub(self.insets.vsum()).max(1) as f64
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutEngine {
    pub config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Width grows with the timeline; the top margin grows by one row per series
    /// until the legend would crowd the plot, then the legend wraps into columns.
    pub fn compute(&self, timeline_len: usize, series_count: usize) -> Layout {
        let c = &self.config;
        let positions = timeline_len.saturating_sub(1) as u32;
        let (legend_rows, legend_columns) = legend_grid(series_count as u32, c.max_legend_rows());
        let legend = c.legend_row_height.saturating_mul(legend_rows);
        let insets = Insets::new(
            c.base_insets.left,
            c.base_insets.right,
            c.base_insets.top + legend,
            c.base_insets.bottom,
        );
        Layout {
            width: insets.hsum() + positions * c.px_per_sample,
            height: c.height,
            insets,
            px_per_sample: c.px_per_sample,
            legend_rows,
            legend_columns,
        }
    }
}

/// `(rows, columns)` holding `entries` legend entries with at most `max_rows` rows.
fn legend_grid(entries: u32, max_rows: u32) -> (u32, u32) {
    if entries == 0 {
        return (0, 0);
    }
    let columns = entries.div_ceil(max_rows.max(1));
    (entries.div_ceil(columns), columns)
}

// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, paddings, sample budgets).

/// Horizontal pixels per timeline position.
pub const PX_PER_SAMPLE: u32 = 10;
/// Fixed canvas height in pixels.
pub const HEIGHT: u32 = 480;
/// Vertical space taken by one legend entry.
pub const LEGEND_ROW_HEIGHT: u32 = 16;
/// Horizontal space taken by one legend column once the legend wraps.
pub const LEGEND_COLUMN_WIDTH: u32 = 120;
/// Plot band height the legend may never eat into.
pub const MIN_PLOT_HEIGHT: u32 = 120;
/// Minimum horizontal distance between two time-axis labels.
pub const MIN_LABEL_GAP_PX: u32 = 40;
/// Rotation applied to time-axis labels, in degrees.
pub const LABEL_ROTATION_DEG: f64 = 55.0;
/// Number of horizontal grid lines across the value range.
pub const GRID_LINES: usize = 5;
/// Span substituted when every value of a metric is identical.
pub const DEGENERATE_SPAN: f64 = 1.0;
/// Timestamps above this value are read as epoch milliseconds.
pub const EPOCH_MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Left fits a two-decimal value label with unit, bottom fits a rotated
    /// `HH:MM:SS.mmm` label, top is the title row before any legend rows.
    fn default() -> Self {
        Self::new(80, 40, 40, 96)
    }
}

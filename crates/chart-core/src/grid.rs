// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::range::ValueRange;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced grid values from `range.min` up to `range.max`, both included.
pub fn value_ticks(range: &ValueRange, lines: usize) -> Vec<f64> {
    if lines == 0 { return Vec::new(); }
    if lines == 1 { return vec![range.min]; }
    linspace(range.min, range.max, lines)
}

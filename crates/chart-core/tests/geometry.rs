// File: crates/chart-core/tests/geometry.rs
// Purpose: Layout sizing and sample-to-pixel mapping.

mod common;

use approx::assert_abs_diff_eq;
use common::{series, set};
use netchart_core::layout::LayoutConfig;
use netchart_core::types::Insets;
use netchart_core::{
    value_range, CoordinateMapper, LayoutEngine, MetricKind, TimelineBuilder, ValueRange,
};

#[test]
fn width_grows_with_timeline_length() {
    let engine = LayoutEngine::default();
    let l = engine.compute(3, 1);
    // 80 + 2 * 10 + 40
    assert_eq!(l.width, 140);
    assert_eq!(engine.compute(101, 1).width, 80 + 1000 + 40);
    assert_eq!(l.height, 480);
}

#[test]
fn legend_pushes_the_plot_down() {
    let engine = LayoutEngine::default();
    let one = engine.compute(10, 1);
    let three = engine.compute(10, 3);
    assert_eq!(one.insets.top, 56);
    assert_eq!(three.insets.top, 88);
    assert_eq!(one.insets.bottom, three.insets.bottom);
    assert!(three.plot_height() < one.plot_height());
}

#[test]
fn crowded_legend_keeps_a_pixel_of_plot() {
    let engine = LayoutEngine::new(LayoutConfig {
        height: 60,
        base_insets: Insets::new(10, 10, 40, 40),
        ..LayoutConfig::default()
    });
    assert_abs_diff_eq!(engine.compute(4, 10).plot_height(), 1.0);
}

#[test]
fn legend_wraps_into_columns_before_eating_the_plot() {
    let layout = LayoutEngine::default().compute(4, 30);
    assert_eq!((layout.legend_rows, layout.legend_columns), (10, 3));
    assert_eq!(layout.insets.top, 40 + 10 * 16);
    assert!(layout.plot_height() >= 120.0);
    assert!(layout.plot_bottom() <= layout.height as f64);
}

#[test]
fn default_series_cap_keeps_a_single_legend_column() {
    let layout = LayoutEngine::default().compute(4, 12);
    assert_eq!((layout.legend_rows, layout.legend_columns), (12, 1));
    assert_eq!(layout.insets.top, 40 + 12 * 16);
}

#[test]
fn larger_values_render_higher() {
    let s = set(vec![series("a", &[(1000, 10.0), (2000, 20.0), (3000, 15.0)])]);
    let tl = TimelineBuilder::default().build(&s);
    let range = value_range(&s, MetricKind::Latency).expect("range");
    let layout = LayoutEngine::default().compute(tl.len(), s.len());
    let mapper = CoordinateMapper::new(&tl, &layout, range);

    let pts = mapper.project(s.get("a").expect("series"), MetricKind::Latency);
    assert_eq!(pts.len(), 3);
    assert_abs_diff_eq!(pts[0].x, 80.0);
    assert_abs_diff_eq!(pts[1].x, 90.0);
    assert_abs_diff_eq!(pts[2].x, 100.0);

    // 20 is the max: top of the plot band
    assert_abs_diff_eq!(pts[1].y, layout.plot_top());
    assert_abs_diff_eq!(pts[0].y, layout.plot_bottom());
    let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    assert_abs_diff_eq!(min_y, pts[1].y);
}

#[test]
fn flat_series_is_centered() {
    let s = set(vec![
        series("a", &[(1, 5.0), (2, 5.0)]),
        series("b", &[(2, 5.0), (3, 5.0)]),
    ]);
    let tl = TimelineBuilder::default().build(&s);
    let range = value_range(&s, MetricKind::PacketLoss).expect("range");
    let layout = LayoutEngine::default().compute(tl.len(), s.len());
    let mapper = CoordinateMapper::new(&tl, &layout, range);
    let mid = (layout.plot_top() + layout.plot_bottom()) / 2.0;
    for node in ["a", "b"] {
        for p in mapper.project(s.get(node).expect("series"), MetricKind::PacketLoss) {
            assert_abs_diff_eq!(p.y, mid, epsilon = 1e-9);
        }
    }
}

#[test]
fn unknown_timestamps_are_dropped() {
    let s = set(vec![series("a", &[(1, 1.0), (2, 2.0), (3, 3.0)])]);
    // budget of two keeps only the newest timestamps
    let tl = TimelineBuilder::new(2).build(&s);
    let layout = LayoutEngine::default().compute(tl.len(), 1);
    let mapper = CoordinateMapper::new(&tl, &layout, ValueRange::new(1.0, 3.0));
    assert!(mapper.map(1, 1.0).is_none());
    assert_eq!(mapper.project(s.get("a").expect("series"), MetricKind::Latency).len(), 2);
}

#[test]
fn points_follow_timestamp_order() {
    let s = set(vec![series("a", &[(3, 1.0), (1, 2.0), (2, 3.0)])]);
    let tl = TimelineBuilder::default().build(&s);
    let layout = LayoutEngine::default().compute(tl.len(), 1);
    let mapper = CoordinateMapper::new(&tl, &layout, ValueRange::new(1.0, 3.0));
    let xs: Vec<f64> = mapper
        .project(s.get("a").expect("series"), MetricKind::Jitter)
        .iter()
        .map(|p| p.x)
        .collect();
    assert_eq!(xs, vec![80.0, 90.0, 100.0]);
}

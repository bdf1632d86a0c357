// File: crates/chart-core/tests/render.rs
// Purpose: Skip/emit decisions and the structure of emitted chart documents.

mod common;

use common::{record, series, set};
use netchart_core::theme::Palette;
use netchart_core::{
    ChartError, ChartRenderer, GeneratorConfig, MetricKind, RenderOptions, SeriesLimits, SeriesSet,
    TimelineBuilder,
};

fn renderer() -> ChartRenderer {
    ChartRenderer::new(RenderOptions { draw_time_labels: false, ..RenderOptions::default() })
}

#[test]
fn no_series_skips_every_metric() {
    let s = SeriesSet::new();
    let tl = TimelineBuilder::default().build(&s);
    for metric in MetricKind::ALL {
        let err = renderer().render(&s, &tl, metric).unwrap_err();
        assert!(matches!(err, ChartError::NoSeries));
        assert!(err.is_insufficient_data());
    }
}

#[test]
fn single_timestamp_skips() {
    let s = set(vec![series("a", &[(1000, 1.0)])]);
    let tl = TimelineBuilder::default().build(&s);
    let err = renderer().render(&s, &tl, MetricKind::Latency).unwrap_err();
    assert!(matches!(err, ChartError::SparseTimeline { points: 1 }));
}

#[test]
fn document_has_root_background_grid_legend_and_lines() {
    let s = set(vec![
        series("node-a", &[(1000, 1.0), (2000, 2.0)]),
        series("node-b", &[(2000, 3.0), (3000, 4.0)]),
    ]);
    let tl = TimelineBuilder::default().build(&s);
    let doc = renderer().render(&s, &tl, MetricKind::Bandwidth).expect("render");

    assert_eq!(doc.file_name(), "bandwidth.svg");
    assert!(doc.svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"140\" height=\"480\""));
    assert!(doc.svg.trim_end().ends_with("</svg>"));
    assert_eq!(doc.svg.matches("<polyline").count(), 2);
    assert_eq!(doc.svg.matches("<line ").count(), 5);
    assert!(doc.svg.contains(">node-a</text>"));
    assert!(doc.svg.contains(">node-b</text>"));
    assert!(doc.svg.contains("Bandwidth (Mbps)"));
    assert!(doc.svg.contains("4.00 Mbps"));
}

#[test]
fn shared_timestamp_uses_one_x_position() {
    let s = set(vec![
        series("a", &[(1000, 1.0), (2000, 2.0)]),
        series("b", &[(2000, 3.0), (3000, 4.0)]),
    ]);
    let tl = TimelineBuilder::default().build(&s);
    let chart = renderer().plan(&s, &tl, MetricKind::Latency).expect("plan");
    assert_eq!(chart.series[0].points[1].x, chart.series[1].points[0].x);
    assert_eq!(chart.series[0].points[0].x, 80.0);
    assert_eq!(chart.series[1].points[1].x, 100.0);
}

#[test]
fn lone_point_gets_a_marker() {
    let s = set(vec![
        series("a", &[(1000, 1.0), (2000, 2.0)]),
        series("b", &[(3000, 4.0)]),
    ]);
    let tl = TimelineBuilder::default().build(&s);
    let doc = renderer().render(&s, &tl, MetricKind::Jitter).expect("render");
    assert_eq!(doc.svg.matches("<circle").count(), 1);
}

#[test]
fn palette_wraps_after_its_last_color() {
    let n = Palette::default().len() + 1;
    let s = set(
        (0..n)
            .map(|i| series(&format!("n{i}"), &[(1, i as f64), (2, i as f64 + 1.0)]))
            .collect(),
    );
    let tl = TimelineBuilder::default().build(&s);
    let chart = renderer().plan(&s, &tl, MetricKind::Latency).expect("plan");
    assert_eq!(chart.series[n - 1].color, chart.series[0].color);
    assert_ne!(chart.series[1].color, chart.series[0].color);
}

#[test]
fn node_ids_are_escaped() {
    let s = set(vec![series("a<b>&\"c\"", &[(1, 1.0), (2, 2.0)])]);
    let tl = TimelineBuilder::default().build(&s);
    let doc = renderer().render(&s, &tl, MetricKind::Latency).expect("render");
    assert!(doc.svg.contains("a&lt;b&gt;&amp;&quot;c&quot;"));
}

#[test]
fn rerender_is_byte_identical() {
    let s = set(vec![
        series("a", &[(1_700_000_000_000, 1.5), (1_700_000_000_500, 2.25)]),
        series("b", &[(1_700_000_000_500, 0.1)]),
    ]);
    let tl = TimelineBuilder::default().build(&s);
    let r = ChartRenderer::default();
    let first = r.render(&s, &tl, MetricKind::Latency).expect("render");
    let second = r.render(&s, &tl, MetricKind::Latency).expect("render");
    assert_eq!(first, second);
    assert!(first.svg.contains("rotate(55 "));
}

#[test]
fn control_characters_are_stripped_from_node_ids() {
    let s = set(vec![series("pi\u{1}3\u{1b}\tx", &[(1, 1.0), (2, 2.0)])]);
    let tl = TimelineBuilder::default().build(&s);
    let doc = renderer().render(&s, &tl, MetricKind::Latency).expect("render");
    assert!(doc.svg.contains(">pi3\tx</text>"));
    assert!(!doc.svg.chars().any(|c| (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r')));
}

#[test]
fn every_node_at_its_cap_keeps_all_its_points() {
    let limits = SeriesLimits::default();
    let records = (0..5i64).flat_map(|n| {
        (0..limits.max_samples_per_series as i64).map(move |i| record(&format!("node-{n}"), i * 5 + n, 1.0))
    });
    let s = SeriesSet::from_records(records, &limits);
    let tl = TimelineBuilder::new(limits.max_timeline_samples).build(&s);
    let chart = renderer().plan(&s, &tl, MetricKind::Latency).expect("plan");
    assert_eq!(chart.series.len(), 5);
    for plot in &chart.series {
        assert_eq!(plot.points.len(), limits.max_samples_per_series, "{}", plot.node_id);
    }
}

#[test]
fn many_nodes_stay_inside_the_canvas() {
    let cfg = GeneratorConfig {
        limits: SeriesLimits { max_series: 30, ..SeriesLimits::default() },
        ..GeneratorConfig::default()
    }
    .validate()
    .expect("valid config");
    let records = (0..30).flat_map(|n| {
        let node = format!("node-{n:02}");
        [record(&node, 1, n as f64), record(&node, 2, 60.0 - n as f64)]
    });
    let s = SeriesSet::from_records(records, &cfg.limits);
    let tl = TimelineBuilder::new(cfg.limits.max_timeline_samples).build(&s);
    let chart = ChartRenderer::new(cfg.render_options())
        .plan(&s, &tl, MetricKind::Latency)
        .expect("plan");

    let l = &chart.layout;
    assert_eq!(chart.series.len(), 30);
    assert!(l.legend_columns > 1);
    assert!(l.plot_height() >= 120.0);
    let last_row = chart.legend_top + (l.legend_rows - 1) as f64 * chart.legend_row_height;
    assert!(last_row + 10.0 <= l.plot_top());
    for plot in &chart.series {
        for p in &plot.points {
            assert!(p.y >= l.plot_top() - 1e-9 && p.y <= l.plot_bottom() + 1e-9, "{} at {}", plot.node_id, p.y);
        }
    }
    for g in &chart.grid {
        assert!(g.y >= 0.0 && g.y <= l.height as f64);
    }
}

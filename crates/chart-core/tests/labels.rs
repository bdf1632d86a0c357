// File: crates/chart-core/tests/labels.rs
// Purpose: Label stride/selection and wall-clock formatting of both timestamp units.

use chrono::Utc;
use netchart_core::labels::{format_timestamp_in, split_epoch};
use netchart_core::{LabelPlacer, LayoutEngine, Timeline};

#[test]
fn stride_rounds_up_and_never_hits_zero() {
    assert_eq!(LabelPlacer::new(40, 10).stride(), 4);
    assert_eq!(LabelPlacer::new(41, 10).stride(), 5);
    assert_eq!(LabelPlacer::new(0, 10).stride(), 1);
    assert_eq!(LabelPlacer::new(5, 10).stride(), 1);
    assert_eq!(LabelPlacer::new(40, 0).stride(), 1);
}

#[test]
fn selection_starts_at_zero_and_may_skip_the_last_index() {
    let tl = Timeline::from_timestamps((0..10).collect());
    let picked = LabelPlacer::new(40, 10).select(&tl);
    assert_eq!(picked, vec![0, 4, 8]);
    assert!(!picked.contains(&9));
}

#[test]
fn millisecond_epochs_keep_their_remainder() {
    assert_eq!(split_epoch(1_700_000_000_123), (1_700_000_000, 123));
    assert_eq!(split_epoch(1_700_000_000), (1_700_000_000, 0));
    // the threshold itself still reads as seconds
    assert_eq!(split_epoch(1_000_000_000_000), (1_000_000_000_000, 0));
}

#[test]
fn formats_both_units() {
    assert_eq!(format_timestamp_in(&Utc, 1_700_000_000_000), "22:13:20.000");
    assert_eq!(format_timestamp_in(&Utc, 1_700_000_000_456), "22:13:20.456");
    assert_eq!(format_timestamp_in(&Utc, 1_700_000_000), "22:13:20.000");
}

#[test]
fn label_anchors_sit_under_the_plot() {
    let tl = Timeline::from_timestamps(vec![1_700_000_000, 1_700_000_001, 1_700_000_002]);
    let layout = LayoutEngine::default().compute(tl.len(), 1);
    let labels = LabelPlacer::new(10, 10).place_in(&Utc, &tl, &layout);
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[2].text, "22:13:22.000");
    assert_eq!(labels[1].x, 90.0);
    assert!(labels.iter().all(|l| l.y > layout.plot_bottom()));
}

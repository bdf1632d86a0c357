// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart-rendering engine and its collaborator seams.

pub mod analysis;
pub mod chart;
pub mod config;
pub mod cycle;
pub mod error;
pub mod grid;
pub mod labels;
pub mod layout;
pub mod metric;
pub mod range;
pub mod scale;
pub mod series;
pub mod sink;
pub mod source;
pub mod svg;
pub mod telemetry;
pub mod theme;
pub mod timeline;
pub mod types;

pub use chart::{Chart, ChartDocument, ChartRenderer, RenderOptions};
pub use config::GeneratorConfig;
pub use cycle::{CycleReport, RenderCycle};
pub use error::{ChartError, ChartResult};
pub use labels::{format_timestamp, LabelPlacer};
pub use layout::{Layout, LayoutEngine};
pub use metric::{MetricKind, MetricValues};
pub use range::{value_range, ValueRange};
pub use scale::{CoordinateMapper, Point};
pub use series::{Record, Series, SeriesLimits, SeriesSet};
pub use sink::{DirectorySink, MemorySink, OutputSink};
pub use source::{CsvSource, RecordSource};
pub use theme::Theme;
pub use timeline::{Timeline, TimelineBuilder};

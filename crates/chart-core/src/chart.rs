// File: crates/chart-core/src/chart.rs
// Summary: Chart planning (geometry for one metric) and SVG document emission.

use std::fmt::Write;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::grid::value_ticks;
use crate::labels::{LabelPlacer, TimeLabel};
use crate::layout::{Layout, LayoutConfig, LayoutEngine};
use crate::metric::MetricKind;
use crate::range::{value_range, ValueRange};
use crate::scale::{CoordinateMapper, Point};
use crate::series::SeriesSet;
use crate::svg::{escape_xml, points_attr, FONT_FAMILY, SVG_NS};
use crate::theme::{Color, Theme};
use crate::timeline::Timeline;
use crate::types::{GRID_LINES, LABEL_ROTATION_DEG, MIN_LABEL_GAP_PX};

const TITLE_BASELINE_PX: f64 = 20.0;
const LEGEND_SWATCH_PX: f64 = 10.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub layout: LayoutConfig,
    pub min_label_gap_px: u32,
    pub grid_lines: usize,
    pub theme: Theme,
    /// Time labels depend on the host time zone; tests turn them off.
    pub draw_time_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            min_label_gap_px: MIN_LABEL_GAP_PX,
            grid_lines: GRID_LINES,
            theme: Theme::default(),
            draw_time_labels: true,
        }
    }
}

/// One horizontal grid line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub value: f64,
    pub y: f64,
}

/// A series as it will be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPlot {
    pub node_id: String,
    pub color: Color,
    pub points: Vec<Point>,
}

/// Fully resolved geometry for one metric.
#[derive(Clone, Debug)]
pub struct Chart {
    pub metric: MetricKind,
    pub layout: Layout,
    pub range: ValueRange,
    pub grid: Vec<GridLine>,
    pub series: Vec<SeriesPlot>,
    pub labels: Vec<TimeLabel>,
    /// Top edge of the first legend row.
    pub legend_top: f64,
    pub legend_row_height: f64,
    pub legend_column_width: f64,
}

/// A finished, self-contained chart ready for the output sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartDocument {
    pub metric: MetricKind,
    pub svg: String,
}

impl ChartDocument {
    /// File name the document is stored under, e.g. `packet_loss.svg`.
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.metric.stem())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChartRenderer {
    pub opts: RenderOptions,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Resolve geometry, or report why this metric has nothing to draw.
    pub fn plan(&self, set: &SeriesSet, timeline: &Timeline, metric: MetricKind) -> ChartResult<Chart> {
        if set.is_empty() {
            return Err(ChartError::NoSeries);
        }
        if !timeline.is_plottable() {
            return Err(ChartError::SparseTimeline { points: timeline.len() });
        }
        let range = value_range(set, metric)?;

        let layout = LayoutEngine::new(self.opts.layout).compute(timeline.len(), set.len());
        let mapper = CoordinateMapper::new(timeline, &layout, range);

        let grid = value_ticks(&range, self.opts.grid_lines)
            .into_iter()
            .map(|value| GridLine { value, y: mapper.value.to_px(value) })
            .collect();

        let palette = self.opts.theme.palette;
        let series = set
            .iter()
            .enumerate()
            .map(|(i, s)| SeriesPlot {
                node_id: s.node_id.clone(),
                color: palette.color(i),
                points: mapper.project(s, metric),
            })
            .collect();

        let labels = if self.opts.draw_time_labels {
            LabelPlacer::new(self.opts.min_label_gap_px, layout.px_per_sample).place(timeline, &layout)
        } else {
            Vec::new()
        };

        debug!(
            %metric,
            width = layout.width,
            height = layout.height,
            min = range.min,
            max = range.max,
            "chart planned"
        );

        Ok(Chart {
            metric,
            layout,
            range,
            grid,
            series,
            labels,
            legend_top: (self.opts.layout.base_insets.top as f64 - 12.0).max(0.0),
            legend_row_height: self.opts.layout.legend_row_height as f64,
            legend_column_width: self.opts.layout.legend_column_width as f64,
        })
    }

    /// Plan and emit the complete SVG document for `metric`.
    pub fn render(&self, set: &SeriesSet, timeline: &Timeline, metric: MetricKind) -> ChartResult<ChartDocument> {
        let chart = self.plan(set, timeline, metric)?;
        Ok(ChartDocument { metric, svg: chart.to_svg(&self.opts.theme) })
    }
}

impl Chart {
    pub fn to_svg(&self, theme: &Theme) -> String {
        let mut svg = String::new();
        // fmt::Write into a String cannot fail
        let _ = self.write_svg(&mut svg, theme);
        svg
    }

    fn write_svg(&self, svg: &mut String, theme: &Theme) -> std::fmt::Result {
        let l = &self.layout;
        let (w, h) = (l.width, l.height);
        let unit = self.metric.unit();

        writeln!(svg, "<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">")?;
        writeln!(
            svg,
            "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\" stroke=\"{}\"/>",
            theme.background, theme.border
        )?;
        writeln!(
            svg,
            "<text x=\"{:.2}\" y=\"{TITLE_BASELINE_PX:.2}\" font-family=\"{FONT_FAMILY}\" font-size=\"14\" font-weight=\"bold\" fill=\"{}\">{} ({})</text>",
            l.plot_left(),
            theme.title,
            escape_xml(self.metric.display_name()),
            escape_xml(unit)
        )?;

        // grid
        writeln!(svg, "<g class=\"grid\" font-family=\"{FONT_FAMILY}\" font-size=\"11\">")?;
        for g in &self.grid {
            writeln!(
                svg,
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
                l.plot_left(), g.y, l.plot_right(), g.y, theme.grid
            )?;
            writeln!(
                svg,
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" fill=\"{}\">{:.2} {}</text>",
                l.plot_left() - 6.0,
                g.y + 4.0,
                theme.axis_label,
                g.value,
                escape_xml(unit)
            )?;
        }
        writeln!(svg, "</g>")?;

        // legend
        writeln!(svg, "<g class=\"legend\" font-family=\"{FONT_FAMILY}\" font-size=\"11\">")?;
        let rows = l.legend_rows.max(1) as usize;
        for (i, s) in self.series.iter().enumerate() {
            let left = l.plot_left() + (i / rows) as f64 * self.legend_column_width;
            let top = self.legend_top + (i % rows) as f64 * self.legend_row_height;
            writeln!(
                svg,
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{LEGEND_SWATCH_PX:.2}\" height=\"{LEGEND_SWATCH_PX:.2}\" fill=\"{}\"/>",
                left, top, s.color
            )?;
            writeln!(
                svg,
                "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\">{}</text>",
                left + LEGEND_SWATCH_PX + 6.0,
                top + LEGEND_SWATCH_PX,
                theme.axis_label,
                escape_xml(&s.node_id)
            )?;
        }
        writeln!(svg, "</g>")?;

        // series
        for s in &self.series {
            if s.points.is_empty() {
                continue;
            }
            writeln!(
                svg,
                "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>",
                s.color,
                points_attr(&s.points)
            )?;
            if let [only] = s.points.as_slice() {
                writeln!(svg, "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2.50\" fill=\"{}\"/>", only.x, only.y, s.color)?;
            }
        }

        // time axis
        writeln!(svg, "<g class=\"time-labels\" font-family=\"{FONT_FAMILY}\" font-size=\"11\">")?;
        for t in &self.labels {
            writeln!(
                svg,
                "<text x=\"{x:.2}\" y=\"{y:.2}\" transform=\"rotate({LABEL_ROTATION_DEG:.0} {x:.2} {y:.2})\" fill=\"{}\">{}</text>",
                theme.axis_label,
                escape_xml(&t.text),
                x = t.x,
                y = t.y,
            )?;
        }
        writeln!(svg, "</g>")?;

        writeln!(svg, "</svg>")
    }
}

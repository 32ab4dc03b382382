//! chart/builder.rs: Render comparison figures to image files.
//!
//! A render runs `Idle → Populating → Rendering → Written | Failed`. The
//! image is drawn inside a scratch directory next to the target and renamed
//! into place, so a failed render never leaves a partial file behind.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use tracing::{debug, info, warn};

use crate::chart::axis::{self, SweepCoord};
use crate::chart::error::ChartError;
use crate::chart::figure::{ComparisonFigure, Panel};
use crate::chart::layout::{LayoutPolicy, LegendPlacement};
use crate::chart::style::{FigureStyle, MarkerShape};
use crate::core::dataset::MetricSweepDataset;
use crate::core::sweep::Variant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Populating,
    Rendering,
    Written,
    Failed,
}

impl RenderState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RenderState::Written | RenderState::Failed)
    }
}

/// Image encoding, chosen from the output file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelSummary {
    pub variant: Variant,
    pub series: usize,
}

/// Outcome of a successful render.
#[derive(Clone, Debug)]
pub struct RenderReport {
    pub state: RenderState,
    pub output_path: PathBuf,
    pub size_px: (u32, u32),
    pub panels: Vec<PanelSummary>,
}

/// Lays out sweep datasets as one panel per variant and writes the figure.
#[derive(Debug)]
pub struct ComparisonChartBuilder {
    style: FigureStyle,
    state: RenderState,
}

impl ComparisonChartBuilder {
    pub fn new(style: FigureStyle) -> Self {
        Self {
            style,
            state: RenderState::Idle,
        }
    }

    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    /// State reached by the most recent render call.
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Render `datasets` under `layout` into a single image at
    /// `output_path`. One attempt; errors are returned as is.
    pub fn render(
        &mut self,
        datasets: &[MetricSweepDataset],
        layout: &LayoutPolicy,
        output_path: impl AsRef<Path>,
    ) -> Result<RenderReport, ChartError> {
        let output_path = output_path.as_ref();
        self.transition(RenderState::Idle);
        match self.run(datasets, layout, output_path) {
            Ok(report) => {
                self.transition(RenderState::Written);
                info!(path = %output_path.display(), "figure written");
                Ok(RenderReport {
                    state: self.state,
                    ..report
                })
            }
            Err(err) => {
                self.transition(RenderState::Failed);
                warn!(path = %output_path.display(), error = %err, "figure not written");
                Err(err)
            }
        }
    }

    fn run(
        &mut self,
        datasets: &[MetricSweepDataset],
        layout: &LayoutPolicy,
        output_path: &Path,
    ) -> Result<RenderReport, ChartError> {
        let format =
            ImageFormat::from_path(output_path).ok_or_else(|| ChartError::UnsupportedFormat {
                path: output_path.to_path_buf(),
            })?;

        self.transition(RenderState::Populating);
        let figure = ComparisonFigure::populate(datasets, layout)?;

        self.transition(RenderState::Rendering);
        let parent = match output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let io_err = |source| ChartError::IoWrite {
            path: output_path.to_path_buf(),
            source,
        };
        let scratch = tempfile::Builder::new()
            .prefix(".ipc-charts-")
            .tempdir_in(parent)
            .map_err(io_err)?;
        let scratch_path = scratch.path().join(format!("figure.{}", format.extension()));

        let size = self.style.pixel_size();
        let drawn = match format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(&scratch_path, size).into_drawing_area();
                draw_figure(&root, &figure, &self.style).map_err(|e| e.to_string())
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(&scratch_path, size).into_drawing_area();
                draw_figure(&root, &figure, &self.style).map_err(|e| e.to_string())
            }
        };
        drawn.map_err(|message| ChartError::Draw {
            path: output_path.to_path_buf(),
            message,
        })?;
        fs::rename(&scratch_path, output_path).map_err(io_err)?;

        Ok(RenderReport {
            state: self.state,
            output_path: output_path.to_path_buf(),
            size_px: size,
            panels: figure
                .panels
                .iter()
                .map(|p| PanelSummary {
                    variant: p.variant,
                    series: p.series.len(),
                })
                .collect(),
        })
    }

    fn transition(&mut self, next: RenderState) {
        debug!(from = ?self.state, to = ?next, "render state");
        self.state = next;
    }
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &ComparisonFigure,
    style: &FigureStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let title_font = ("sans-serif", style.px(14.0))
        .into_font()
        .style(FontStyle::Bold);
    let mut body = root.titled(&figure.title, title_font)?;
    if let Some(subtitle) = &figure.subtitle {
        body = body.titled(subtitle, ("sans-serif", style.px(11.0)))?;
    }

    let areas = body.split_evenly((1, figure.panels.len()));
    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel, figure, style)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    figure: &ComparisonFigure,
    style: &FigureStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart = ChartBuilder::on(area)
        .caption(
            &panel.title,
            ("sans-serif", style.px(13.0))
                .into_font()
                .style(FontStyle::Bold),
        )
        .margin(style.px(8.0))
        .x_label_area_size(style.px(36.0))
        .y_label_area_size(style.px(56.0))
        .build_cartesian_2d(figure.x_coord.clone(), 0.0f64..figure.y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_labels(axis::Y_TICKS)
        .y_label_formatter(&|v| axis::tick_label(*v))
        .x_desc(figure.x_axis.axis_label())
        .y_desc(figure.y_desc.as_str())
        .label_style(("sans-serif", style.px(10.0)))
        .axis_desc_style(
            ("sans-serif", style.px(12.0))
                .into_font()
                .style(FontStyle::Bold),
        )
        .draw()?;
    draw_dashed_grid(&chart, figure, style)?;

    let radius = (style.px(style.marker_size_pt) / 2).max(1) as i32;
    let line_px = style.px(style.line_width_pt);
    for series in &panel.series {
        let series_style = style.series_style(series.style_index);
        let color = series_style.color;
        let line = color.stroke_width(line_px);
        let fill = color.filled();
        let points = &series.points;

        let anno = chart.draw_series(LineSeries::new(points.iter().copied(), line))?;
        anno.label(series.label.as_str());
        match series_style.marker {
            MarkerShape::Circle => {
                anno.legend(move |(x, y)| {
                    EmptyElement::at((x + 10, y))
                        + PathElement::new(vec![(-10, 0), (10, 0)], line)
                        + Circle::new((0, 0), radius, fill)
                });
                chart.draw_series(points.iter().map(|&p| Circle::new(p, radius, fill)))?;
            }
            MarkerShape::Square => {
                anno.legend(move |(x, y)| {
                    EmptyElement::at((x + 10, y))
                        + PathElement::new(vec![(-10, 0), (10, 0)], line)
                        + Rectangle::new([(-radius, -radius), (radius, radius)], fill)
                });
                chart.draw_series(points.iter().map(|&p| {
                    EmptyElement::at(p)
                        + Rectangle::new([(-radius, -radius), (radius, radius)], fill)
                }))?;
            }
            MarkerShape::Triangle => {
                anno.legend(move |(x, y)| {
                    EmptyElement::at((x + 10, y))
                        + PathElement::new(vec![(-10, 0), (10, 0)], line)
                        + TriangleMarker::new((0, 0), radius, fill)
                });
                chart.draw_series(
                    points
                        .iter()
                        .map(|&p| TriangleMarker::new(p, radius, fill)),
                )?;
            }
            MarkerShape::Diamond => {
                anno.legend(move |(x, y)| {
                    EmptyElement::at((x + 10, y))
                        + PathElement::new(vec![(-10, 0), (10, 0)], line)
                        + Polygon::new(diamond(radius), fill)
                });
                chart.draw_series(
                    points
                        .iter()
                        .map(|&p| EmptyElement::at(p) + Polygon::new(diamond(radius), fill)),
                )?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(match figure.legend {
            LegendPlacement::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPlacement::UpperRight => SeriesLabelPosition::UpperRight,
        })
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", style.px(10.0)))
        .draw()?;

    Ok(())
}

/// Dashed grid at every labelled tick, drawn in pixel space so horizontal
/// lines span the padded x range.
fn draw_dashed_grid<DB: DrawingBackend>(
    chart: &ChartContext<DB, Cartesian2d<SweepCoord, RangedCoordf64>>,
    figure: &ComparisonFigure,
    style: &FigureStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let area = chart.plotting_area();
    let (x_px, y_px) = area.get_pixel_range();
    let (width, height) = (x_px.end - x_px.start, y_px.end - y_px.start);
    let grid = area.strip_coord_spec();
    let line = BLACK.mix(0.3).stroke_width(1);
    let dash = style.px(4.0) as i32;
    let gap = style.px(2.0) as i32;

    let Some(&x0) = figure.x_coord.ticks().first() else {
        return Ok(());
    };
    for &x in figure.x_coord.ticks() {
        let px = chart.backend_coord(&(x, 0.0)).0 - x_px.start;
        grid.draw(&DashedPathElement::new(
            vec![(px, 0), (px, height)],
            dash,
            gap,
            line,
        ))?;
    }
    for y in axis::value_ticks(figure.y_max) {
        let py = chart.backend_coord(&(x0, y)).1 - y_px.start;
        grid.draw(&DashedPathElement::new(
            vec![(0, py), (width, py)],
            dash,
            gap,
            line,
        ))?;
    }
    Ok(())
}

fn diamond(r: i32) -> Vec<(i32, i32)> {
    vec![(0, -r), (r, 0), (0, r), (-r, 0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ImageFormat::from_path(Path::new("out/a.PNG")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("a.svg")),
            Some(ImageFormat::Svg)
        );
        assert_eq!(ImageFormat::from_path(Path::new("a.jpg")), None);
        assert_eq!(ImageFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn new_builder_is_idle_with_its_style() {
        let style = FigureStyle::default().with_size(4.0, 2.0, 100);
        let builder = ComparisonChartBuilder::new(style.clone());
        assert_eq!(builder.state(), RenderState::Idle);
        assert!(!builder.state().is_terminal());
        assert_eq!(builder.style().pixel_size(), (400, 200));
        assert_eq!(builder.style().series_style(3), style.series_style(3));
    }

    #[test]
    fn unsupported_extension_fails_before_populating() {
        let mut builder = ComparisonChartBuilder::new(FigureStyle::default());
        let layout = LayoutPolicy::new(crate::core::sweep::SweepAxis::MessageSize, "y");
        let err = builder.render(&[], &layout, "figure.gif").unwrap_err();
        assert!(matches!(err, ChartError::UnsupportedFormat { .. }));
        assert_eq!(builder.state(), RenderState::Failed);
        assert!(builder.state().is_terminal());
    }
}

//! chart/figure.rs: Panel composition for one comparison figure.
//!
//! One panel per variant, one line series per value of the secondary sweep
//! dimension. The figure is plain data; drawing lives in the builder.

use tracing::debug;

use crate::chart::axis::SweepCoord;
use crate::chart::error::ChartError;
use crate::chart::layout::{LayoutPolicy, LegendPlacement};
use crate::core::dataset::MetricSweepDataset;
use crate::core::error::DatasetError;
use crate::core::sweep::{SweepAxis, Variant};

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    /// Value of the secondary sweep dimension this line tracks.
    pub secondary: u32,
    /// Position of `secondary` in its domain; selects colour and marker.
    pub style_index: usize,
    /// Display-scaled points, ascending in x.
    pub points: Vec<(u32, f64)>,
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub variant: Variant,
    pub title: String,
    pub series: Vec<Series>,
}

#[derive(Clone, Debug)]
pub struct ComparisonFigure {
    pub title: String,
    pub subtitle: Option<String>,
    pub x_axis: SweepAxis,
    pub x_coord: SweepCoord,
    pub y_desc: String,
    /// Upper bound of the y-axis shared by all panels.
    pub y_max: f64,
    pub legend: LegendPlacement,
    pub panels: Vec<Panel>,
}

impl ComparisonFigure {
    /// Headroom above the largest value.
    const Y_HEADROOM: f64 = 1.1;

    /// Lay out `datasets` into panels. All datasets must chart the same
    /// metric over the same sweep axes; each variant may appear once.
    pub fn populate(
        datasets: &[MetricSweepDataset],
        layout: &LayoutPolicy,
    ) -> Result<Self, ChartError> {
        let Some(first) = datasets.first() else {
            return Err(ChartError::EmptyDataset {
                reason: "no datasets given".to_string(),
            });
        };
        let metric = first.metric_id();
        let domain = first.domain();
        let x_axis = layout.x_axis;
        let series_axis = x_axis.other();
        let x_values = domain.values(x_axis);
        let series_values = domain.values(series_axis);

        let mut panels: Vec<Panel> = Vec::new();
        let mut y_max = 0.0f64;
        for dataset in datasets {
            if dataset.metric_id() != metric {
                return Err(DatasetError::shape(
                    metric,
                    format!("cannot share a figure with {}", dataset.metric_id()),
                )
                .into());
            }
            if !dataset.domain().same_axes(domain) {
                return Err(DatasetError::shape(
                    metric,
                    "datasets sweep different message sizes or thread counts",
                )
                .into());
            }
            if dataset.variants().is_empty() || series_values.is_empty() {
                return Err(ChartError::EmptyDataset {
                    reason: format!("{} has no series", dataset.metric_id()),
                });
            }

            for &variant in dataset.variants() {
                if panels.iter().any(|p| p.variant == variant) {
                    return Err(DatasetError::shape(
                        metric,
                        format!("variant {variant} supplied by more than one dataset"),
                    )
                    .into());
                }
                let mut series = Vec::with_capacity(series_values.len());
                for (style_index, &secondary) in series_values.iter().enumerate() {
                    let points: Vec<(u32, f64)> = dataset
                        .series_along(x_axis, variant, secondary)
                        .ok_or_else(|| ChartError::EmptyDataset {
                            reason: format!("{metric}: no series for {variant} at {secondary}"),
                        })?
                        .into_iter()
                        .map(|(x, y)| (x, layout.value_scale.apply(y)))
                        .collect();
                    y_max = points.iter().map(|&(_, y)| y).fold(y_max, f64::max);
                    series.push(Series {
                        label: series_axis.series_label(secondary),
                        secondary,
                        style_index,
                        points,
                    });
                }
                debug!(%variant, series = series.len(), "panel populated");
                panels.push(Panel {
                    variant,
                    title: layout.panel_title(variant),
                    series,
                });
            }
        }

        let y_max = if y_max > 0.0 {
            y_max * Self::Y_HEADROOM
        } else {
            1.0
        };
        Ok(Self {
            title: if layout.title.is_empty() {
                first.meta().display_title.clone()
            } else {
                layout.title.clone()
            },
            subtitle: layout.subtitle.clone(),
            x_axis,
            x_coord: SweepCoord::new(x_values, layout.x_scale),
            y_desc: layout.y_desc(),
            y_max,
            legend: layout.legend,
            panels,
        })
    }

    pub fn series_counts(&self) -> Vec<usize> {
        self.panels.iter().map(|p| p.series.len()).collect()
    }
}

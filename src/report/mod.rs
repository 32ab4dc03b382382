//! The four figures of the IPC benchmark report.
//!
//! Each figure is a [`FigurePlan`]: the dataset, the layout policy and the
//! file stem. All plans go through the same [`ComparisonChartBuilder`].

pub mod measurements;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::info;

use crate::chart::builder::{ComparisonChartBuilder, ImageFormat};
use crate::chart::error::ChartError;
use crate::chart::layout::{LayoutPolicy, LegendPlacement, ValueScale};
use crate::config::{ChartsConfig, RunConfig};
use crate::core::dataset::MetricSweepDataset;
use crate::core::error::DatasetError;
use crate::core::sweep::SweepAxis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MetricKind {
    CacheMisses,
    CyclesPerByte,
    Latency,
    Throughput,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::CacheMisses,
        MetricKind::CyclesPerByte,
        MetricKind::Latency,
        MetricKind::Throughput,
    ];

    pub fn file_stem(self) -> &'static str {
        match self {
            MetricKind::CacheMisses => "CacheMisses_vs_MessageSize",
            MetricKind::CyclesPerByte => "CyclesPerByte",
            MetricKind::Latency => "Latency_vs_ThreadCount",
            MetricKind::Throughput => "Throughput_vs_MessageSize",
        }
    }

    pub fn dataset(self) -> Result<MetricSweepDataset, DatasetError> {
        match self {
            MetricKind::CacheMisses => measurements::llc_misses(),
            MetricKind::CyclesPerByte => measurements::cycles_per_byte(),
            MetricKind::Latency => measurements::latency_us(),
            MetricKind::Throughput => measurements::throughput_gbps(),
        }
    }

    pub fn layout(self, run: &RunConfig) -> LayoutPolicy {
        let run_line = format!("Roll: {} | System: {}", run.run_id, run.system);
        let with_duration = format!("{run_line} | Duration: {}", run.duration);
        match self {
            MetricKind::CacheMisses => LayoutPolicy::new(SweepAxis::MessageSize, "LLC Misses")
                .with_value_scale(ValueScale::Millions)
                .with_title("LLC Cache Misses vs Message Size")
                .with_subtitle(&with_duration)
                .with_legend(LegendPlacement::UpperLeft),
            MetricKind::CyclesPerByte => {
                LayoutPolicy::new(SweepAxis::MessageSize, "CPU Cycles per Byte")
                    .with_title("CPU Cycles per Byte vs Message Size")
                    .with_subtitle(&format!("{run_line} | Lower is better"))
                    .with_legend(LegendPlacement::UpperRight)
            }
            MetricKind::Latency => LayoutPolicy::new(SweepAxis::ThreadCount, "Latency (µs)")
                .with_title("Message Latency vs Thread Count")
                .with_subtitle(&with_duration)
                .with_legend(LegendPlacement::UpperRight),
            MetricKind::Throughput => {
                LayoutPolicy::new(SweepAxis::MessageSize, "Throughput (Gbps)")
                    .with_title("Network I/O Throughput vs Message Size")
                    .with_subtitle(&with_duration)
                    .with_legend(LegendPlacement::UpperLeft)
            }
        }
    }
}

/// Everything needed to render one report figure.
#[derive(Clone, Debug)]
pub struct FigurePlan {
    pub kind: MetricKind,
    pub datasets: Vec<MetricSweepDataset>,
    pub layout: LayoutPolicy,
    pub file_name: String,
}

impl FigurePlan {
    pub fn new(kind: MetricKind, config: &ChartsConfig) -> Result<Self, DatasetError> {
        Ok(Self {
            kind,
            datasets: vec![kind.dataset()?],
            layout: kind.layout(&config.run),
            file_name: output_file_name(
                &config.run.run_id,
                kind.file_stem(),
                config.figure.format.into(),
            ),
        })
    }
}

/// `<run_id>_<stem>.<ext>`.
pub fn output_file_name(run_id: &str, stem: &str, format: ImageFormat) -> String {
    format!("{run_id}_{stem}.{}", format.extension())
}

/// Render the selected figures into `out_dir`, stopping at the first
/// failure. Returns the written paths in order.
pub fn render_all(
    out_dir: &Path,
    kinds: &[MetricKind],
    config: &ChartsConfig,
) -> Result<Vec<PathBuf>, ChartError> {
    let mut builder = ComparisonChartBuilder::new(config.figure.style());
    let mut written = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let plan = FigurePlan::new(kind, config)?;
        let path = out_dir.join(&plan.file_name);
        let report = builder.render(&plan.datasets, &plan.layout, &path)?;
        info!(
            kind = ?plan.kind,
            panels = report.panels.len(),
            "report figure rendered"
        );
        written.push(report.output_path);
    }
    Ok(written)
}

//! Comparison charts for IPC benchmark sweeps.
//!
//! Measurements of the two-copy, one-copy and zero-copy variants are held in
//! [`core::dataset::MetricSweepDataset`]s and drawn by
//! [`chart::ComparisonChartBuilder`] as one panel per variant.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod report;

//! Sweep x-axis as a plotters coordinate.
//!
//! Key points are exactly the sweep values, so every panel of a figure gets
//! the same tick positions and labels whatever the pixel width.

use std::ops::Range;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;

use crate::chart::layout::AxisScale;

/// Discrete sweep values placed on a linear or log2 continuous axis.
#[derive(Clone, Debug)]
pub struct SweepCoord {
    ticks: Vec<u32>,
    scale: AxisScale,
    lo: f64,
    hi: f64,
}

impl SweepCoord {
    /// Padding on either side of the outermost ticks, as a share of the span.
    const PAD: f64 = 0.1;

    /// `ticks` must be non-empty and ascending.
    pub fn new(ticks: &[u32], scale: AxisScale) -> Self {
        let first = ticks.first().map(|&t| scale.position(t)).unwrap_or(0.0);
        let last = ticks.last().map(|&t| scale.position(t)).unwrap_or(1.0);
        let span = last - first;
        let pad = if span > 0.0 { span * Self::PAD } else { 0.5 };
        Self {
            ticks: ticks.to_vec(),
            scale,
            lo: first - pad,
            hi: last + pad,
        }
    }

    pub fn ticks(&self) -> &[u32] {
        &self.ticks
    }

    /// Position in [0, 1] across the plotting area.
    pub fn fraction(&self, value: u32) -> f64 {
        (self.scale.position(value) - self.lo) / (self.hi - self.lo)
    }
}

impl Ranged for SweepCoord {
    type FormatOption = DefaultFormatting;
    type ValueType = u32;

    fn map(&self, value: &u32, limit: (i32, i32)) -> i32 {
        let pixels = (limit.1 - limit.0) as f64;
        limit.0 + (self.fraction(*value) * pixels).round() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<u32> {
        let max = hint.max_num_points();
        if max == 0 {
            return Vec::new();
        }
        if self.ticks.len() <= max {
            return self.ticks.clone();
        }
        let stride = self.ticks.len().div_ceil(max);
        self.ticks.iter().step_by(stride).copied().collect()
    }

    fn range(&self) -> Range<u32> {
        let first = self.ticks.first().copied().unwrap_or(0);
        let last = self.ticks.last().copied().unwrap_or(first);
        first..last
    }
}

/// Number of labelled y ticks per panel; the dashed grid uses the same.
pub const Y_TICKS: usize = 10;

/// Labelled y positions for a `0..y_max` value axis.
pub fn value_ticks(y_max: f64) -> Vec<f64> {
    RangedCoordf64::from(0.0..y_max).key_points(Y_TICKS)
}

/// Tick text without a trailing `.0` on whole numbers.
pub fn tick_label(value: f64) -> String {
    let mut s = format!("{value:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

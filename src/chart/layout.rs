//! Layout policy: which sweep dimension is the x-axis, how axes are scaled
//! and how the figure is labelled.

use std::collections::BTreeMap;

use crate::core::sweep::{SweepAxis, Variant};

/// Spacing of x tick positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    /// Positions at log2(x); doubling sweeps become evenly spaced.
    Log2,
}

impl AxisScale {
    /// Message sizes double at each step and read best on a log2 axis;
    /// thread counts stay linear.
    pub fn default_for(axis: SweepAxis) -> Self {
        match axis {
            SweepAxis::MessageSize => AxisScale::Log2,
            SweepAxis::ThreadCount => AxisScale::Linear,
        }
    }

    pub fn position(self, x: u32) -> f64 {
        match self {
            AxisScale::Linear => x as f64,
            AxisScale::Log2 => (x as f64).log2(),
        }
    }
}

/// Rescaling applied to values for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueScale {
    Unit,
    Millions,
}

impl ValueScale {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ValueScale::Unit => value,
            ValueScale::Millions => value / 1e6,
        }
    }

    fn suffix(self) -> Option<&'static str> {
        match self {
            ValueScale::Unit => None,
            ValueScale::Millions => Some("millions"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPlacement {
    UpperLeft,
    UpperRight,
}

/// How datasets are laid out into a comparison figure.
#[derive(Clone, Debug)]
pub struct LayoutPolicy {
    pub x_axis: SweepAxis,
    pub x_scale: AxisScale,
    pub value_scale: ValueScale,
    pub y_label: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub legend: LegendPlacement,
    panel_titles: BTreeMap<Variant, String>,
}

impl LayoutPolicy {
    pub fn new(x_axis: SweepAxis, y_label: &str) -> Self {
        Self {
            x_axis,
            x_scale: AxisScale::default_for(x_axis),
            value_scale: ValueScale::Unit,
            y_label: y_label.to_string(),
            title: String::new(),
            subtitle: None,
            legend: LegendPlacement::UpperLeft,
            panel_titles: BTreeMap::new(),
        }
    }

    pub fn with_x_scale(mut self, x_scale: AxisScale) -> Self {
        self.x_scale = x_scale;
        self
    }

    pub fn with_value_scale(mut self, value_scale: ValueScale) -> Self {
        self.value_scale = value_scale;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_legend(mut self, legend: LegendPlacement) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_panel_title(mut self, variant: Variant, title: &str) -> Self {
        self.panel_titles.insert(variant, title.to_string());
        self
    }

    pub fn panel_title(&self, variant: Variant) -> String {
        self.panel_titles
            .get(&variant)
            .cloned()
            .unwrap_or_else(|| variant.panel_title().to_string())
    }

    /// Y-axis description including the display scaling, e.g.
    /// `LLC Misses (millions)`.
    pub fn y_desc(&self) -> String {
        match self.value_scale.suffix() {
            Some(suffix) => format!("{} ({suffix})", self.y_label),
            None => self.y_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_scale_defaults_follow_axis() {
        let by_size = LayoutPolicy::new(SweepAxis::MessageSize, "LLC Misses");
        assert_eq!(by_size.x_scale, AxisScale::Log2);
        let by_threads = LayoutPolicy::new(SweepAxis::ThreadCount, "Latency (µs)");
        assert_eq!(by_threads.x_scale, AxisScale::Linear);
    }

    #[test]
    fn millions_scale_rewrites_values_and_label() {
        let layout = LayoutPolicy::new(SweepAxis::MessageSize, "LLC Misses")
            .with_value_scale(ValueScale::Millions);
        assert_eq!(layout.y_desc(), "LLC Misses (millions)");
        assert_eq!(layout.value_scale.apply(2_500_000.0), 2.5);
    }

    #[test]
    fn panel_title_override_falls_back_to_variant() {
        let layout = LayoutPolicy::new(SweepAxis::MessageSize, "y")
            .with_panel_title(Variant::OneCopy, "custom");
        assert_eq!(layout.panel_title(Variant::OneCopy), "custom");
        assert_eq!(
            layout.panel_title(Variant::ZeroCopy),
            "A3: Zero-Copy (MSG_ZEROCOPY)"
        );
    }
}

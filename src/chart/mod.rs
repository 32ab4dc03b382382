//! Comparison figures: layout policy, panel composition and rendering.

pub mod axis;
pub mod builder;
pub mod error;
pub mod figure;
pub mod layout;
pub mod style;

pub use builder::{ComparisonChartBuilder, ImageFormat, PanelSummary, RenderReport, RenderState};
pub use error::ChartError;
pub use layout::{AxisScale, LayoutPolicy, LegendPlacement, ValueScale};
pub use style::{FigureStyle, MarkerShape};

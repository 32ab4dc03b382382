//! Figure geometry and the series colour/marker cycle.

use plotters::style::RGBColor;

/// Point marker drawn at each measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
    Diamond,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: RGBColor,
    pub marker: MarkerShape,
}

/// Physical size, resolution and the style cycle shared by every panel.
#[derive(Clone, Debug)]
pub struct FigureStyle {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub line_width_pt: f64,
    /// Marker diameter.
    pub marker_size_pt: f64,
    pub palette: Vec<RGBColor>,
    pub markers: Vec<MarkerShape>,
}

impl FigureStyle {
    /// tab10 colours, in their usual order.
    pub const TAB10: [RGBColor; 10] = [
        RGBColor(0x1f, 0x77, 0xb4),
        RGBColor(0xff, 0x7f, 0x0e),
        RGBColor(0x2c, 0xa0, 0x2c),
        RGBColor(0xd6, 0x27, 0x28),
        RGBColor(0x94, 0x67, 0xbd),
        RGBColor(0x8c, 0x56, 0x4b),
        RGBColor(0xe3, 0x77, 0xc2),
        RGBColor(0x7f, 0x7f, 0x7f),
        RGBColor(0xbc, 0xbd, 0x22),
        RGBColor(0x17, 0xbe, 0xcf),
    ];

    pub fn with_size(mut self, width_in: f64, height_in: f64, dpi: u32) -> Self {
        self.width_in = width_in;
        self.height_in = height_in;
        self.dpi = dpi;
        self
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }

    /// Points to pixels at this resolution, never below one pixel.
    pub fn px(&self, pt: f64) -> u32 {
        (pt * self.dpi as f64 / 72.0).round().max(1.0) as u32
    }

    /// Style of the `index`-th value of the series dimension. Indexing by
    /// domain position keeps a value's style identical across panels.
    pub fn series_style(&self, index: usize) -> SeriesStyle {
        let color = if self.palette.is_empty() {
            Self::TAB10[index % Self::TAB10.len()]
        } else {
            self.palette[index % self.palette.len()]
        };
        let marker = if self.markers.is_empty() {
            MarkerShape::Circle
        } else {
            self.markers[index % self.markers.len()]
        };
        SeriesStyle { color, marker }
    }
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width_in: 18.0,
            height_in: 6.0,
            dpi: 300,
            line_width_pt: 2.0,
            marker_size_pt: 8.0,
            palette: Self::TAB10.to_vec(),
            markers: vec![
                MarkerShape::Circle,
                MarkerShape::Square,
                MarkerShape::Triangle,
                MarkerShape::Diamond,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_figure_is_wide_and_reproducible() {
        let style = FigureStyle::default();
        assert_eq!(style.pixel_size(), (5400, 1800));
        assert_eq!(style.px(12.0), 50);
        assert_eq!(style.px(0.0), 1);
    }

    #[test]
    fn first_four_series_styles_are_distinct() {
        let style = FigureStyle::default();
        let styles: Vec<SeriesStyle> = (0..4).map(|i| style.series_style(i)).collect();
        for i in 0..styles.len() {
            for j in (i + 1)..styles.len() {
                assert_ne!(styles[i].color, styles[j].color);
                assert_ne!(styles[i].marker, styles[j].marker);
            }
        }
        assert_eq!(style.series_style(0), style.series_style(10 * 4));
    }
}

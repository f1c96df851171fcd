// File: crates/skyai-chart/src/scale.rs
// Summary: Value-to-pixel scale derived from a Series and the chart dimensions.

use crate::sample::Series;
use crate::types::{Dimensions, PlotRect};

/// Read-only projection of a series onto the padded plot rectangle.
/// X follows sample index; Y is linear in value and inverted (pixel y grows down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
    /// `max - min`, or `1.0` for a flat series.
    pub range: f64,
    pub plot: PlotRect,
}

impl Scale {
    pub fn from_series(series: &Series, dims: &Dimensions) -> Self {
        Self::from_extent(series.min(), series.max(), dims)
    }

    pub fn from_extent(min: f64, max: f64, dims: &Dimensions) -> Self {
        let span = max - min;
        let range = if span == 0.0 { 1.0 } else { span };
        Self { min, max, range, plot: dims.plot_rect() }
    }

    pub fn chart_width(&self) -> f64 { self.plot.width() }
    pub fn chart_height(&self) -> f64 { self.plot.height() }

    /// Horizontal position of sample `index` in a series of `len` samples.
    /// A single sample sits at the horizontal center.
    #[inline]
    pub fn x_for_index(&self, index: usize, len: usize) -> f64 {
        if len <= 1 {
            return self.plot.left + self.chart_width() * 0.5;
        }
        self.plot.left + (index as f64 / (len - 1) as f64) * self.chart_width()
    }

    #[inline]
    pub fn y_for_value(&self, value: f64) -> f64 {
        self.plot.bottom - ((value - self.min) / self.range) * self.chart_height()
    }

    /// Inverse of [`Scale::y_for_value`].
    #[inline]
    pub fn value_for_y(&self, py: f64) -> f64 {
        self.min + ((self.plot.bottom - py) / self.chart_height()) * self.range
    }
}

// File: crates/skyai-chart/src/types.rs
// Summary: Shared types and constants (default sizes, padding, plot rectangle).

use crate::error::ChartError;

/// Default surface width in pixels.
pub const WIDTH: f64 = 300.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 180.0;
/// Fixed margin around the plot area, in pixels.
pub const PADDING: f64 = 40.0;

/// Pixel geometry of one chart surface.
/// Contract: `width > 2 * padding` and `height > 2 * padding` (see [`Dimensions::validate`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, padding: PADDING }
    }

    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Plot width inside the padding.
    pub fn chart_width(&self) -> f64 { self.width - self.padding * 2.0 }
    /// Plot height inside the padding.
    pub fn chart_height(&self) -> f64 { self.height - self.padding * 2.0 }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::from_ltwh(self.padding, self.padding, self.chart_width(), self.chart_height())
    }

    /// Reject sizes that leave no drawable plot area.
    pub fn validate(&self) -> Result<(), ChartError> {
        let ok = self.padding >= 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.chart_width() > 0.0
            && self.chart_height() > 0.0;
        if ok {
            Ok(())
        } else {
            Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
                padding: self.padding,
            })
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Plot rectangle in pixel space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Inclusive containment, with a small tolerance for float rounding.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        const EPS: f64 = 1e-9;
        x >= self.left - EPS && x <= self.right + EPS && y >= self.top - EPS && y <= self.bottom + EPS
    }
}

// File: crates/skyai-chart/src/geometry.rs
// Summary: Renderable primitives (points, area, polyline, grid, axis labels) built from a Series and Scale.

use crate::grid::grid_fractions;
use crate::sample::Series;
use crate::scale::Scale;
use crate::types::Dimensions;

/// Radius of the invisible pointer target around each point.
pub const HIT_RADIUS: f64 = 8.0;
/// Axis labels sit this far above the bottom edge of the surface.
pub const LABEL_BASELINE_OFFSET: f64 = 10.0;

/// One sample projected to pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub index: usize,
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Centered label under a point.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Everything needed to draw the static part of a chart. Rebuilt per render.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub points: Vec<Point>,
    /// Closed polygon: baseline-left, every point, baseline-right.
    pub area: Vec<(f64, f64)>,
    /// Open polyline through every point.
    pub line: Vec<(f64, f64)>,
    pub h_grid: Vec<Segment>,
    pub v_grid: Vec<Segment>,
    pub labels: Vec<AxisLabel>,
}

impl Geometry {
    pub fn build(series: &Series, scale: &Scale, dims: &Dimensions) -> Self {
        let len = series.len();
        let plot = scale.plot;

        let points: Vec<Point> = series
            .samples()
            .iter()
            .zip(series.values())
            .enumerate()
            .map(|(index, (sample, &value))| Point {
                x: scale.x_for_index(index, len),
                y: scale.y_for_value(value),
                index,
                label: sample.label.clone(),
                value,
            })
            .collect();

        let line: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();

        let mut area = Vec::with_capacity(line.len() + 2);
        area.push((plot.left, plot.bottom));
        area.extend_from_slice(&line);
        area.push((plot.right, plot.bottom));

        let h_grid = grid_fractions()
            .into_iter()
            .map(|f| {
                let y = plot.top + plot.height() * f;
                Segment { x1: plot.left, y1: y, x2: plot.right, y2: y }
            })
            .collect();

        let v_grid = points
            .iter()
            .map(|p| Segment { x1: p.x, y1: plot.top, x2: p.x, y2: plot.bottom })
            .collect();

        let label_y = dims.height - LABEL_BASELINE_OFFSET;
        let labels = points
            .iter()
            .map(|p| AxisLabel { index: p.index, x: p.x, y: label_y, text: p.label.clone() })
            .collect();

        Self { points, area, line, h_grid, v_grid, labels }
    }

    /// Index of the point whose hit circle (radius `radius`) contains `(x, y)`.
    /// Overlapping targets resolve to the nearest center.
    pub fn point_at(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
        let r2 = radius * radius;
        self.points
            .iter()
            .map(|p| {
                let (dx, dy) = (p.x - x, p.y - y);
                (p.index, dx * dx + dy * dy)
            })
            .filter(|&(_, d2)| d2 <= r2)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

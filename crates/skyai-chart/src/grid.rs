// File: crates/skyai-chart/src/grid.rs
// Summary: Grid layout helpers.

/// Horizontal grid lines sit at these fractions of the plot height.
pub const GRID_STEPS: usize = 5;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `[0, .25, .5, .75, 1]` for the default step count.
pub fn grid_fractions() -> Vec<f64> {
    linspace(0.0, 1.0, GRID_STEPS)
}

// File: crates/skyai-chart/src/error.rs
// Summary: Error types for series validation, chart inputs and theme storage.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("series for metric `{metric}` is empty")]
    EmptySeries { metric: String },

    #[error("sample {index} has no numeric field `{metric}`")]
    MissingMetric { index: usize, metric: String },

    #[error("sample {index} has a non-finite value for `{metric}`")]
    NonFiniteValue { index: usize, metric: String },

    #[error("values of `{metric}` span {min}..{max}, wider than f64 can represent")]
    SpanOverflow { metric: String, min: f64, max: f64 },

    #[error("chart {width}x{height} leaves no plot area inside padding {padding}")]
    InvalidDimensions { width: f64, height: f64, padding: f64 },

    #[error("point index {index} out of range for a series of {len} samples")]
    PointOutOfRange { index: usize, len: usize },

    #[error("invalid color `{0}` (expected #rgb or #rrggbb)")]
    InvalidColor(String),
}

/// Failures of a [`crate::theme::ThemeStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

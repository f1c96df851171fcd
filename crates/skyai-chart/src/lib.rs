// File: crates/skyai-chart/src/lib.rs
// Summary: Core library entry point; exports the chart model, theming, fixtures and SVG output.

pub mod chart;
pub mod color;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod metrics;
pub mod sample;
pub mod scale;
pub mod storage;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{Chart, ChartProps, ChartView, Marker, Readout, Summary, Tooltip, ValueLabel};
pub use color::Color;
pub use error::{ChartError, StorageError};
pub use fixtures::{environmental_history, environmental_snapshot, RandomSource, SeededRng};
pub use geometry::{Geometry, Point};
pub use interaction::{ActivePoint, ActiveSource, Emphasis, InteractionState};
pub use metrics::{MetricPreset, MetricStatus};
pub use sample::{Sample, Series};
pub use scale::Scale;
pub use storage::{FileStorage, MemoryStorage};
pub use theme::{Theme, ThemeMode, ThemeStorage, ThemeStore};
pub use types::Dimensions;

// File: crates/skyai-chart/src/chart.rs
// Summary: Chart surface: owns props, series and pointer state; derives a renderable ChartView.

use tracing::debug;

use crate::color::Color;
use crate::error::ChartError;
use crate::format;
use crate::geometry::{Geometry, Point, HIT_RADIUS};
use crate::interaction::{ActivePoint, ActiveSource, Emphasis, InteractionState};
use crate::metrics::MetricPreset;
use crate::sample::{Sample, Series};
use crate::scale::Scale;
use crate::types::Dimensions;

pub const MARKER_RADIUS: f64 = 3.0;
pub const ACTIVE_MARKER_RADIUS: f64 = 5.0;
pub const ACTIVE_STROKE_WIDTH: f64 = 2.0;
pub const RING_RADIUS: f64 = 8.0;
pub const RING_OPACITY: f64 = 0.5;
/// Value label is drawn this far above the active point.
pub const VALUE_LABEL_RISE: f64 = 10.0;
/// Tooltip anchor offset from the hovered point.
pub const TOOLTIP_OFFSET: (f64, f64) = (-50.0, 60.0);

/// Inputs supplied by the dashboard shell.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartProps {
    pub title: String,
    pub metric_key: String,
    pub color: Color,
    /// Appended verbatim to values (`"°C"`, `" lux"`).
    pub unit: String,
    pub dimensions: Dimensions,
}

impl ChartProps {
    pub fn new(
        title: impl Into<String>,
        metric_key: impl Into<String>,
        color: Color,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            metric_key: metric_key.into(),
            color,
            unit: unit.into(),
            dimensions: Dimensions::default(),
        }
    }

    pub fn from_preset(preset: &MetricPreset) -> Self {
        Self::new(preset.title, preset.key, preset.color(), preset.unit)
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}

/// Min / max / mean over the whole series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Summary {
    pub fn of(series: &Series) -> Self {
        Self { min: series.min(), max: series.max(), mean: series.mean() }
    }

    /// Mean rounded to one decimal place.
    pub fn mean_rounded(&self) -> f64 {
        (self.mean * 10.0).round() / 10.0
    }

    /// Footer texts: `["Min: ..", "Max: ..", "Avg: .."]`. Avg uses [`Summary::mean_rounded`].
    pub fn footer(&self, unit: &str) -> [String; 3] {
        [
            format!("Min: {}", format::with_unit(self.min, unit)),
            format!("Max: {}", format::with_unit(self.max, unit)),
            format!("Avg: {}{}", format::one_decimal(self.mean_rounded()), unit),
        ]
    }
}

/// Headline value shown above the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Readout {
    pub index: usize,
    pub value: f64,
    /// Value with unit suffix.
    pub text: String,
    /// `"at <label>"` for hovered/selected points, `"Current"` for the latest sample.
    pub caption: String,
    pub active: Option<ActivePoint>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Outline width in the series color; zero for plain markers.
    pub stroke_width: f64,
    pub emphasis: Emphasis,
}

impl Marker {
    pub fn glow(&self) -> bool { self.emphasis.is_emphasized() }
    pub fn ring(&self) -> bool { self.emphasis.has_ring() }
}

/// Bold value text drawn just above the active point.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Floating box next to the hovered point.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub value_text: String,
    pub label: String,
}

/// One fully derived frame of a chart. Renderers consume this and nothing else.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub unit: String,
    pub color: Color,
    pub dimensions: Dimensions,
    pub scale: Scale,
    pub geometry: Geometry,
    pub markers: Vec<Marker>,
    pub readout: Readout,
    pub value_label: Option<ValueLabel>,
    pub tooltip: Option<Tooltip>,
    pub summary: Summary,
}

impl ChartView {
    /// Whether the axis label under `index` is drawn in the highlight color.
    pub fn label_highlighted(&self, index: usize) -> bool {
        self.markers.get(index).map(|m| m.emphasis.is_emphasized()).unwrap_or(false)
    }
}

/// One interactive time-series chart. Only the interaction state survives
/// between renders; geometry is derived on demand.
#[derive(Clone, Debug)]
pub struct Chart {
    props: ChartProps,
    series: Series,
    interaction: InteractionState,
}

impl Chart {
    pub fn new(props: ChartProps, data: Vec<Sample>) -> Result<Self, ChartError> {
        props.dimensions.validate()?;
        let series = Series::new(props.metric_key.clone(), data)?;
        Ok(Self { props, series, interaction: InteractionState::Idle })
    }

    pub fn props(&self) -> &ChartProps { &self.props }
    pub fn series(&self) -> &Series { &self.series }
    pub fn interaction(&self) -> InteractionState { self.interaction }

    /// Replace the samples. Pointer references past the new end are dropped.
    /// On error the previous data is kept.
    pub fn set_data(&mut self, data: Vec<Sample>) -> Result<(), ChartError> {
        self.series = Series::new(self.props.metric_key.clone(), data)?;
        self.interaction = self.interaction.retain_below(self.series.len());
        Ok(())
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) -> Result<(), ChartError> {
        dimensions.validate()?;
        self.props.dimensions = dimensions;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ChartError> {
        if index < self.series.len() {
            Ok(())
        } else {
            Err(ChartError::PointOutOfRange { index, len: self.series.len() })
        }
    }

    pub fn hover(&mut self, index: usize) -> Result<(), ChartError> {
        self.check_index(index)?;
        self.interaction = self.interaction.hover(index);
        Ok(())
    }

    pub fn clear_hover(&mut self) {
        self.interaction = self.interaction.clear_hover();
    }

    pub fn click(&mut self, index: usize) -> Result<(), ChartError> {
        self.check_index(index)?;
        self.interaction = self.interaction.click(index);
        Ok(())
    }

    /// Pointer moved to `(x, y)`. Entering a point's hit region hovers it;
    /// anywhere else leaves the state alone. Returns the point hit, if any.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        let hit = self.geometry().point_at(x, y, HIT_RADIUS);
        if let Some(index) = hit {
            self.interaction = self.interaction.hover(index);
        }
        hit
    }

    /// Pointer left the chart surface.
    pub fn pointer_leave(&mut self) {
        self.clear_hover();
    }

    /// Click at `(x, y)`; toggles selection of the point hit, if any.
    pub fn click_at(&mut self, x: f64, y: f64) -> Option<usize> {
        let hit = self.geometry().point_at(x, y, HIT_RADIUS);
        if let Some(index) = hit {
            self.interaction = self.interaction.click(index);
        }
        hit
    }

    pub fn scale(&self) -> Scale {
        Scale::from_series(&self.series, &self.props.dimensions)
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::build(&self.series, &self.scale(), &self.props.dimensions)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.series)
    }

    /// Hovered point, else selected point, else the latest sample.
    pub fn readout(&self) -> Readout {
        let active = self.interaction.active();
        let index = active.map(|a| a.index).unwrap_or_else(|| self.series.last_index());
        let value = self.series.values()[index];
        let caption = match active {
            Some(_) => format!("at {}", self.series.label(index).unwrap_or_default()),
            None => "Current".to_string(),
        };
        Readout { index, value, text: format::with_unit(value, &self.props.unit), caption, active }
    }

    pub fn view(&self) -> ChartView {
        let scale = self.scale();
        let geometry = Geometry::build(&self.series, &scale, &self.props.dimensions);
        let state = self.interaction;

        let markers = geometry
            .points
            .iter()
            .map(|p| {
                let emphasis = state.emphasis(p.index);
                let (radius, stroke_width) = if emphasis.is_emphasized() {
                    (ACTIVE_MARKER_RADIUS, ACTIVE_STROKE_WIDTH)
                } else {
                    (MARKER_RADIUS, 0.0)
                };
                Marker { index: p.index, x: p.x, y: p.y, radius, stroke_width, emphasis }
            })
            .collect();

        let value_label = state.active().map(|a| {
            let p = &geometry.points[a.index];
            ValueLabel {
                x: p.x,
                y: p.y - VALUE_LABEL_RISE,
                text: format::with_unit(p.value, &self.props.unit),
            }
        });
        let tooltip = state
            .active()
            .filter(|a| a.source == ActiveSource::Hover)
            .map(|a| {
                let p: &Point = &geometry.points[a.index];
                Tooltip {
                    x: p.x + TOOLTIP_OFFSET.0,
                    y: p.y + TOOLTIP_OFFSET.1,
                    value_text: format::with_unit(p.value, &self.props.unit),
                    label: p.label.clone(),
                }
            });

        debug!(
            metric = %self.series.metric(),
            points = geometry.points.len(),
            state = ?state,
            "chart view derived"
        );

        ChartView {
            title: self.props.title.clone(),
            unit: self.props.unit.clone(),
            color: self.props.color,
            dimensions: self.props.dimensions,
            scale,
            readout: self.readout(),
            summary: self.summary(),
            geometry,
            markers,
            value_label,
            tooltip,
        }
    }
}

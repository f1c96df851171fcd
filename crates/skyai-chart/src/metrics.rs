// File: crates/skyai-chart/src/metrics.rs
// Summary: Environmental metric presets (title, color, unit) and optimal-range status.

use crate::color::Color;

/// Where a reading is considered healthy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptimalRange {
    Between(f64, f64),
    AtMost(f64),
    AtLeast(f64),
}

impl OptimalRange {
    pub fn contains(&self, v: f64) -> bool {
        match *self {
            OptimalRange::Between(lo, hi) => v >= lo && v <= hi,
            OptimalRange::AtMost(hi) => v <= hi,
            OptimalRange::AtLeast(lo) => v >= lo,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricStatus {
    Normal,
    Warning,
}

impl MetricStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricStatus::Normal => "normal",
            MetricStatus::Warning => "warning",
        }
    }
}

/// Static description of one dashboard trend chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricPreset {
    pub key: &'static str,
    pub title: &'static str,
    /// `#rrggbb`; always valid for the built-in presets.
    pub hex: &'static str,
    pub unit: &'static str,
    pub optimal: Option<OptimalRange>,
    /// Human readable optimal range, e.g. `"20-26°C"`.
    pub optimal_text: Option<&'static str>,
}

impl MetricPreset {
    pub fn color(&self) -> Color {
        Color::from_hex(self.hex).unwrap_or(Color::rgb(0x88, 0x88, 0x88))
    }

    /// `None` when the metric has no defined optimal range.
    pub fn status(&self, value: f64) -> Option<MetricStatus> {
        self.optimal.map(|r| if r.contains(value) { MetricStatus::Normal } else { MetricStatus::Warning })
    }
}

pub const PRESETS: [MetricPreset; 8] = [
    MetricPreset {
        key: "temp",
        title: "Temperature Trend",
        hex: "#ef4444",
        unit: "°C",
        optimal: Some(OptimalRange::Between(20.0, 26.0)),
        optimal_text: Some("20-26°C"),
    },
    MetricPreset {
        key: "humidity",
        title: "Humidity Trend",
        hex: "#3b82f6",
        unit: "%",
        optimal: Some(OptimalRange::Between(60.0, 70.0)),
        optimal_text: Some("60-70%"),
    },
    MetricPreset {
        key: "co2",
        title: "CO₂ Level Trend",
        hex: "#10b981",
        unit: "ppm",
        optimal: Some(OptimalRange::AtMost(500.0)),
        optimal_text: Some("< 500 ppm"),
    },
    MetricPreset {
        key: "wind",
        title: "Wind Speed Trend",
        hex: "#8b5cf6",
        unit: "m/s",
        optimal: None,
        optimal_text: None,
    },
    MetricPreset {
        key: "light",
        title: "Light Intensity Trend",
        hex: "#f59e0b",
        unit: " lux",
        optimal: Some(OptimalRange::AtLeast(800.0)),
        optimal_text: Some("> 800 lux"),
    },
    MetricPreset {
        key: "pressure",
        title: "Atmospheric Pressure",
        hex: "#06b6d4",
        unit: "hPa",
        optimal: None,
        optimal_text: None,
    },
    MetricPreset {
        key: "soilTemp",
        title: "Soil Temperature",
        hex: "#f97316",
        unit: "°C",
        optimal: None,
        optimal_text: None,
    },
    MetricPreset {
        key: "soilMoisture",
        title: "Soil Moisture",
        hex: "#84cc16",
        unit: "%",
        optimal: None,
        optimal_text: None,
    },
];

pub fn presets() -> &'static [MetricPreset] {
    &PRESETS
}

/// Look a preset up by metric key (case-sensitive, matches sample field names).
pub fn find(key: &str) -> Option<&'static MetricPreset> {
    PRESETS.iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_colors_parse() {
        for p in presets() {
            assert!(Color::from_hex(p.hex).is_ok(), "{}", p.key);
        }
    }

    #[test]
    fn status_thresholds() {
        let temp = find("temp").unwrap();
        assert_eq!(temp.status(24.5), Some(MetricStatus::Normal));
        assert_eq!(temp.status(26.3), Some(MetricStatus::Warning));
        assert_eq!(find("co2").unwrap().status(500.0), Some(MetricStatus::Normal));
        assert_eq!(find("light").unwrap().status(799.0), Some(MetricStatus::Warning));
        assert_eq!(find("wind").unwrap().status(3.2), None);
    }
}

// File: crates/skyai-chart/src/sample.rs
// Summary: Sample records and the validated single-metric Series plotted by a chart.
// Notes:
// - A Sample may carry many metrics (one dashboard row); a Series projects one
//   of them and guarantees every sample exposes it as a finite number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// One observation: a label (time of day) plus named numeric fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "time", alias = "label")]
    pub label: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, f64>,
}

impl Sample {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), fields: BTreeMap::new() }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.fields.get(key).copied()
    }
}

/// Ordered, non-empty samples sharing one metric key. Index order is x order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    metric: String,
    samples: Vec<Sample>,
    values: Vec<f64>,
}

impl Series {
    /// Project `metric` out of `samples`, rejecting empty input, samples
    /// without a finite value for the metric, and extremes whose span overflows `f64`.
    pub fn new(metric: impl Into<String>, samples: Vec<Sample>) -> Result<Self, ChartError> {
        let metric = metric.into();
        if samples.is_empty() {
            return Err(ChartError::EmptySeries { metric });
        }
        let mut values = Vec::with_capacity(samples.len());
        for (index, s) in samples.iter().enumerate() {
            let v = s.get(&metric).ok_or_else(|| ChartError::MissingMetric {
                index,
                metric: metric.clone(),
            })?;
            if !v.is_finite() {
                return Err(ChartError::NonFiniteValue { index, metric });
            }
            values.push(v);
        }
        let (lo, hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if !(hi - lo).is_finite() {
            return Err(ChartError::SpanOverflow { metric, min: lo, max: hi });
        }
        Ok(Self { metric, samples, values })
    }

    pub fn metric(&self) -> &str { &self.metric }
    pub fn len(&self) -> usize { self.values.len() }
    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn samples(&self) -> &[Sample] { &self.samples }

    pub fn value(&self, index: usize) -> Option<f64> { self.values.get(index).copied() }
    pub fn label(&self, index: usize) -> Option<&str> {
        self.samples.get(index).map(|s| s.label.as_str())
    }

    pub fn last_index(&self) -> usize { self.values.len() - 1 }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Arithmetic mean of all values. Running form: stays finite whenever the span is.
    pub fn mean(&self) -> f64 {
        self.values
            .iter()
            .enumerate()
            .fold(0.0, |m, (i, &v)| m + (v - m) / (i + 1) as f64)
    }
}

//! Shapes an ordered sequence of [`TimeSeriesPoint`]s into one `(labels, values)` pair per metric.
//!
//! Points are never reordered, deduplicated or dropped. A point missing a metric
//! contributes `None` to that metric's values so every pair has exactly as many
//! entries as the input, and `labels[i]` / `values[i]` always come from the i-th point.

use crate::types::series_point::{LabelField, TimeSeriesPoint};
use serde::Serialize;
use std::fmt;

/// The metrics carried by a series point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Dewpoint,
    Pressure,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Dewpoint, Metric::Pressure];

    /// The legend name used for this metric's chart trace.
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Dewpoint => "Dewpoint",
            Metric::Pressure => "Pressure",
        }
    }

    pub fn value_of(&self, point: &TimeSeriesPoint) -> Option<f64> {
        match self {
            Metric::Temperature => point.temperature_c,
            Metric::Dewpoint => point.dewpoint_c,
            Metric::Pressure => point.pressure_in_hg,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parallel label and value vectors for a single metric.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SeriesPair {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl SeriesPair {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, label: &str, value: Option<f64>) {
        self.labels.push(label.to_string());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The three per-metric pairs produced by [`shape_series`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetricSeries {
    pub temperature: SeriesPair,
    pub dewpoint: SeriesPair,
    pub pressure: SeriesPair,
}

impl MetricSeries {
    pub fn get(&self, metric: Metric) -> &SeriesPair {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Dewpoint => &self.dewpoint,
            Metric::Pressure => &self.pressure,
        }
    }

    /// Number of source points (every pair has this length).
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }
}

/// Splits `points` into temperature, dewpoint and pressure series sharing the labels
/// read from `label_field`.
///
/// # Examples
///
/// ```rust
/// use stormberry_dashboard::{shape_series, LabelField, TimeSeriesPoint};
///
/// let points = vec![
///     TimeSeriesPoint::hourly("09:00").with_temperature(14.0).with_pressure(29.9),
///     TimeSeriesPoint::hourly("10:00").with_temperature(15.5).with_dewpoint(8.0),
/// ];
/// let series = shape_series(&points, LabelField::Time);
///
/// assert_eq!(series.temperature.labels, ["09:00", "10:00"]);
/// assert_eq!(series.temperature.values, [Some(14.0), Some(15.5)]);
/// assert_eq!(series.dewpoint.values, [None, Some(8.0)]);
/// assert_eq!(series.pressure.values, [Some(29.9), None]);
/// ```
pub fn shape_series(points: &[TimeSeriesPoint], label_field: LabelField) -> MetricSeries {
    let mut series = MetricSeries {
        temperature: SeriesPair::with_capacity(points.len()),
        dewpoint: SeriesPair::with_capacity(points.len()),
        pressure: SeriesPair::with_capacity(points.len()),
    };
    for point in points {
        let label = point.label(label_field);
        series.temperature.push(label, point.temperature_c);
        series.dewpoint.push(label, point.dewpoint_c);
        series.pressure.push(label, point.pressure_in_hg);
    }
    series
}

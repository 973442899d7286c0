//! Data and option structures handed to the chart renderer.
//!
//! Everything here serializes to the JSON shape the browser-side plotting
//! libraries expect: scatter traces for the hourly chart, labelled line series
//! with shared options for the weekly charts.

use crate::chart::series::{Metric, SeriesPair};
use serde::Serialize;

/// A single scatter trace: `{"x": [...], "y": [...], "type": "scatter", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub name: String,
}

impl ScatterTrace {
    pub fn new(name: impl Into<String>, pair: SeriesPair) -> Self {
        Self {
            x: pair.labels,
            y: pair.values,
            trace_type: "scatter",
            name: name.into(),
        }
    }

    pub fn for_metric(metric: Metric, pair: SeriesPair) -> Self {
        Self::new(metric.display_name(), pair)
    }
}

/// Labels plus one or more value series for a line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartData {
    pub labels: Vec<String>,
    pub series: Vec<Vec<Option<f64>>>,
}

impl From<SeriesPair> for LineChartData {
    fn from(pair: SeriesPair) -> Self {
        Self {
            labels: pair.labels,
            series: vec![pair.values],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpolation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tension: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub show_label: bool,
}

/// Options shared by the weekly line charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartOptions {
    pub line_smooth: Interpolation,
    pub chart_padding: Padding,
    pub axis_x: AxisOptions,
}

impl Default for LineChartOptions {
    /// Straight cardinal interpolation, no padding, hidden x-axis labels.
    fn default() -> Self {
        Self {
            line_smooth: Interpolation {
                kind: "cardinal",
                tension: 0.0,
            },
            chart_padding: Padding::default(),
            axis_x: AxisOptions { show_label: false },
        }
    }
}

/// Everything a chart target can be asked to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "spec", rename_all = "lowercase")]
pub enum ChartSpec {
    Scatter(Vec<ScatterTrace>),
    Line {
        data: LineChartData,
        options: LineChartOptions,
    },
}

impl ChartSpec {
    pub fn line(pair: SeriesPair) -> Self {
        ChartSpec::Line {
            data: pair.into(),
            options: LineChartOptions::default(),
        }
    }
}

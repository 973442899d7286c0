//! The display side of the dashboard: named text slots, chart targets and the sink trait readers write through.

pub mod log_view;
pub mod memory;

use crate::chart::spec::ChartSpec;
use std::fmt;

/// A named text display target. [`Slot::class_name`] is the CSS class the page uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    CurrentTemp,
    CurrentTempF,
    CurrentHumidity,
    CurrentPressure,
    CurrentDewpoint,
    CurrentDewpointF,
    LatestDatapointTime,
    CurrentComfort,
    SafeToRun,
    ComfortMethod,
    ComfortValue,
    BasicPrediction,
    BasicTempTrend,
    WeekTempTrend,
    WeekPressureTrend,
    WeekDewpointTrend,
}

impl Slot {
    pub const ALL: [Slot; 16] = [
        Slot::CurrentTemp,
        Slot::CurrentTempF,
        Slot::CurrentHumidity,
        Slot::CurrentPressure,
        Slot::CurrentDewpoint,
        Slot::CurrentDewpointF,
        Slot::LatestDatapointTime,
        Slot::CurrentComfort,
        Slot::SafeToRun,
        Slot::ComfortMethod,
        Slot::ComfortValue,
        Slot::BasicPrediction,
        Slot::BasicTempTrend,
        Slot::WeekTempTrend,
        Slot::WeekPressureTrend,
        Slot::WeekDewpointTrend,
    ];

    pub fn class_name(&self) -> &'static str {
        match self {
            Slot::CurrentTemp => "current-temp",
            Slot::CurrentTempF => "current-temp-f",
            Slot::CurrentHumidity => "current-humidity",
            Slot::CurrentPressure => "current-pressure",
            Slot::CurrentDewpoint => "current-dewpoint",
            Slot::CurrentDewpointF => "current-dewpoint-f",
            Slot::LatestDatapointTime => "latest-datapoint-time",
            Slot::CurrentComfort => "current-comfort",
            Slot::SafeToRun => "safe-to-run",
            Slot::ComfortMethod => "sc-method",
            Slot::ComfortValue => "sc-value",
            Slot::BasicPrediction => "basic-prediction",
            Slot::BasicTempTrend => "basic-temp-trend",
            Slot::WeekTempTrend => "week-temp-trend",
            Slot::WeekPressureTrend => "week-pressure-trend",
            Slot::WeekDewpointTrend => "week-dewpoint-trend",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// A chart instance on the page. [`ChartTarget::element_id`] is its DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartTarget {
    HourlyConditions,
    WeeklyDewpoint,
    WeeklyPressure,
    WeeklyTemperature,
}

impl ChartTarget {
    pub const ALL: [ChartTarget; 4] = [
        ChartTarget::HourlyConditions,
        ChartTarget::WeeklyDewpoint,
        ChartTarget::WeeklyPressure,
        ChartTarget::WeeklyTemperature,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            ChartTarget::HourlyConditions => "hourlyDewpointChart",
            ChartTarget::WeeklyDewpoint => "weeklyDewpointChart",
            ChartTarget::WeeklyPressure => "weeklyPressureChart",
            ChartTarget::WeeklyTemperature => "weeklyTempChart",
        }
    }
}

impl fmt::Display for ChartTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element_id())
    }
}

/// A single pending change to the display.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    Text(Slot, String),
    Chart(ChartTarget, ChartSpec),
}

/// Where readers put their results.
///
/// Implementations must tolerate being called from several readers at once;
/// readers never share a slot or chart target, so no ordering between them is required.
pub trait ViewSink: Send + Sync {
    /// Replaces the text content of `slot`.
    fn set_text(&self, slot: Slot, value: &str);

    /// Replaces whatever `target` currently shows with `chart`.
    fn render_chart(&self, target: ChartTarget, chart: &ChartSpec);

    /// Applies a batch of updates in order.
    fn apply(&self, updates: &[ViewUpdate]) {
        for update in updates {
            match update {
                ViewUpdate::Text(slot, value) => self.set_text(*slot, value),
                ViewUpdate::Chart(target, chart) => self.render_chart(*target, chart),
            }
        }
    }
}

impl<V: ViewSink + ?Sized> ViewSink for &V {
    fn set_text(&self, slot: Slot, value: &str) {
        (**self).set_text(slot, value)
    }

    fn render_chart(&self, target: ChartTarget, chart: &ChartSpec) {
        (**self).render_chart(target, chart)
    }
}

impl<V: ViewSink + ?Sized> ViewSink for std::sync::Arc<V> {
    fn set_text(&self, slot: Slot, value: &str) {
        (**self).set_text(slot, value)
    }

    fn render_chart(&self, target: ChartTarget, chart: &ChartSpec) {
        (**self).render_chart(target, chart)
    }
}

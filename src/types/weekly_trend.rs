use crate::types::trend::Trend;
use serde::Deserialize;

/// The three trend deltas returned by `/weather/past-week/trend`.
#[derive(Debug, PartialEq, Clone, Copy, Deserialize)]
pub struct WeeklyTrendSummary {
    #[serde(rename = "tempc_trend")]
    pub temp_trend: f64,
    pub pressure_trend: f64,
    pub dewpoint_trend: f64,
}

impl WeeklyTrendSummary {
    pub fn temperature(&self) -> Trend {
        Trend::classify(self.temp_trend)
    }

    pub fn pressure(&self) -> Trend {
        Trend::classify(self.pressure_trend)
    }

    /// Classified from `dewpoint_trend` alone.
    ///
    /// Earlier dashboards tested `pressure_trend` for the rising branch of this
    /// icon; that coupling is gone.
    pub fn dewpoint(&self) -> Trend {
        Trend::classify(self.dewpoint_trend)
    }
}

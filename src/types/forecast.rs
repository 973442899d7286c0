use crate::types::trend::Trend;
use serde::Deserialize;

/// The short-term barometric forecast returned by `/predict/basic`.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct ForecastSummary {
    /// Key into [`crate::FORECAST_DESCRIPTIONS`]. `None` when the backend matched no rule.
    #[serde(rename = "prediction")]
    pub forecast_code: Option<String>,
    #[serde(rename = "tempc_trend")]
    pub temp_trend: f64,

    #[serde(default)]
    pub pressure_trend: Option<f64>,
    /// Forecast horizon in hours.
    #[serde(default)]
    pub hours: Option<u32>,
    #[serde(default)]
    pub mean_pressure: Option<f64>,
    #[serde(default)]
    pub predicted_temp: Option<f64>,
}

impl ForecastSummary {
    pub fn temperature_trend(&self) -> Trend {
        Trend::classify(self.temp_trend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "prediction": "little-change",
            "pressure_trend": -0.0000012,
            "hours": 24,
            "mean_pressure": 29.93,
            "predicted_temp": null,
            "tempc_trend": 0.00004,
            "dewpoint_trend": 0.0
        }"#;
        let forecast: ForecastSummary = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.forecast_code.as_deref(), Some("little-change"));
        assert_eq!(forecast.hours, Some(24));
        assert_eq!(forecast.predicted_temp, None);
        assert_eq!(forecast.temperature_trend(), Trend::Rising);
    }

    #[test]
    fn test_minimal_payload() {
        let forecast: ForecastSummary =
            serde_json::from_str(r#"{"prediction": "storms", "tempc_trend": -2}"#).unwrap();
        assert_eq!(forecast.forecast_code.as_deref(), Some("storms"));
        assert_eq!(forecast.temperature_trend(), Trend::Falling);
        assert_eq!(forecast.mean_pressure, None);
    }
}

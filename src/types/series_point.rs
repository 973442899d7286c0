use crate::utils::{lenient_f64, parse_label};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Which label key a series is plotted against.
///
/// `/weather/past-day` labels its points with `timestr`, `/weather/past-week`
/// with `datestr`. Points may carry both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    Time,
    Date,
}

/// One observation in the `/weather/past-day` or `/weather/past-week` series.
///
/// Every metric is optional so a point with a missing value still occupies its
/// slot in the shaped series.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct TimeSeriesPoint {
    #[serde(default)]
    pub timestr: Option<String>,
    #[serde(default)]
    pub datestr: Option<String>,
    #[serde(rename = "tempc", default)]
    pub temperature_c: Option<f64>,
    #[serde(rename = "dewpointc", default, deserialize_with = "lenient_f64")]
    pub dewpoint_c: Option<f64>,
    #[serde(rename = "inchesHg", default)]
    pub pressure_in_hg: Option<f64>,
}

impl TimeSeriesPoint {
    /// A point labelled by hour (`timestr`).
    pub fn hourly(timestr: impl Into<String>) -> Self {
        Self {
            timestr: Some(timestr.into()),
            ..Self::default()
        }
    }

    /// A point labelled by day (`datestr`).
    pub fn daily(datestr: impl Into<String>) -> Self {
        Self {
            datestr: Some(datestr.into()),
            ..Self::default()
        }
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature_c = Some(celsius);
        self
    }

    pub fn with_dewpoint(mut self, celsius: f64) -> Self {
        self.dewpoint_c = Some(celsius);
        self
    }

    pub fn with_pressure(mut self, in_hg: f64) -> Self {
        self.pressure_in_hg = Some(in_hg);
        self
    }

    /// The label under `field`, falling back to the other key, or `""` if the point has neither.
    pub fn label(&self, field: LabelField) -> &str {
        let (preferred, fallback) = match field {
            LabelField::Time => (&self.timestr, &self.datestr),
            LabelField::Date => (&self.datestr, &self.timestr),
        };
        preferred
            .as_deref()
            .or(fallback.as_deref())
            .unwrap_or_default()
    }

    /// Parses `timestr` as a timestamp, or else `datestr` as a date at midnight.
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        self.timestr
            .as_deref()
            .and_then(parse_label)
            .or_else(|| self.datestr.as_deref().and_then(parse_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_point() {
        let json = r#"{"timestr": "2024-06-01 13:00:00", "tempc": 21.5, "tempf": 70.7, "humidity": 50, "dewpointc": 11.5, "inchesHg": 29.9}"#;
        let point: TimeSeriesPoint = serde_json::from_str(json).unwrap();
        assert_eq!(
            point,
            TimeSeriesPoint::hourly("2024-06-01 13:00:00")
                .with_temperature(21.5)
                .with_dewpoint(11.5)
                .with_pressure(29.9)
        );
        assert!(point.observed_at().is_some());
    }

    #[test]
    fn test_daily_point_with_string_dewpoint() {
        let json = r#"{"datestr": "2024-06-01", "tempc": 18.0, "dewpointc": "9.25", "inchesHg": 30.01}"#;
        let point: TimeSeriesPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.label(LabelField::Date), "2024-06-01");
        assert_eq!(point.dewpoint_c, Some(9.25));
    }

    #[test]
    fn test_point_with_both_label_keys() {
        let json = r#"{"timestr": "2024-06-01 00:00:00", "datestr": "2024-06-01", "tempc": 18.0, "dewpointc": 9.0, "inchesHg": 30.01}"#;
        let point: TimeSeriesPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.label(LabelField::Time), "2024-06-01 00:00:00");
        assert_eq!(point.label(LabelField::Date), "2024-06-01");
        assert_eq!(point.temperature_c, Some(18.0));
    }

    #[test]
    fn test_label_falls_back_to_other_key() {
        let point = TimeSeriesPoint::daily("2024-06-01");
        assert_eq!(point.label(LabelField::Time), "2024-06-01");
        assert_eq!(TimeSeriesPoint::default().label(LabelField::Date), "");
    }

    #[test]
    fn test_missing_metrics_become_none() {
        let point: TimeSeriesPoint = serde_json::from_str(r#"{"timestr": "x", "tempc": null}"#).unwrap();
        assert_eq!(point, TimeSeriesPoint::hourly("x"));
        assert!(point.observed_at().is_none());
    }
}

use crate::utils::parse_label;
use chrono::NaiveDateTime;
use serde::Deserialize;

/// The instantaneous conditions returned by `/weather/latest-reading`.
///
/// The backend also sends `tempf`; it is ignored because Fahrenheit values are
/// always derived from the Celsius fields with [`crate::to_fahrenheit`].
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Reading {
    #[serde(rename = "tempc")]
    pub temperature_c: f64,
    pub humidity: f64,
    #[serde(rename = "inchesHg")]
    pub pressure_in_hg: f64,
    #[serde(rename = "dewpointc")]
    pub dewpoint_c: f64,
    #[serde(rename = "timestr")]
    pub time_label: String,
}

impl Reading {
    /// Parses [`Reading::time_label`] as a backend timestamp, if it is one.
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        parse_label(&self.time_label)
    }
}

//! The backend endpoints the dashboard reads from.

use std::fmt;

/// A read-only JSON endpoint of the weather station backend.
///
/// Every endpoint is fetched with a plain `GET` and no query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Current instantaneous conditions.
    LatestReading,
    /// Current comfort classification and running-safety advisory.
    ComfortNow,
    /// Categorical forecast and temperature trend.
    BasicPrediction,
    /// Readings over the last 24 hours.
    PastDay,
    /// Readings over the last 7 days.
    PastWeek,
    /// Temperature, pressure and dewpoint trend over the last 7 days.
    PastWeekTrend,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::LatestReading,
        Endpoint::ComfortNow,
        Endpoint::BasicPrediction,
        Endpoint::PastDay,
        Endpoint::PastWeek,
        Endpoint::PastWeekTrend,
    ];

    /// The absolute path of this endpoint on the backend.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::LatestReading => "/weather/latest-reading",
            Endpoint::ComfortNow => "/comfort/now",
            Endpoint::BasicPrediction => "/predict/basic",
            Endpoint::PastDay => "/weather/past-day",
            Endpoint::PastWeek => "/weather/past-week",
            Endpoint::PastWeekTrend => "/weather/past-week/trend",
        }
    }

    /// Joins this endpoint's path onto `base_url` with exactly one `/` between them.
    pub(crate) fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Formats an `Endpoint` as its path.
///
/// # Examples
///
/// ```
/// use stormberry_dashboard::Endpoint;
///
/// assert_eq!(Endpoint::PastWeekTrend.to_string(), "/weather/past-week/trend");
/// ```
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

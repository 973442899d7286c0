use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Timestamp format used by the backend for `timestr`.
pub(crate) const TIMESTR_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Date format used by the backend for `datestr`.
pub(crate) const DATESTR_FORMAT: &str = "%Y-%m-%d";

/// Parses a backend label as either a full timestamp or a bare date (at midnight).
pub(crate) fn parse_label(label: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(label, TIMESTR_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(label, DATESTR_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Accepts a JSON number, a numeric string, `null` or an absent field.
///
/// Strings that do not parse as a number become `None`, so the value shows up
/// as a gap instead of failing the whole payload.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        None => None,
    })
}

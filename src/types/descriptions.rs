//! Fixed lookup tables mapping the backend's categorical codes to the sentences shown on the dashboard.
//!
//! Two tables exist: [`COMFORT_DESCRIPTIONS`] for the `comfort_safety_str` field of
//! `/comfort/now` and [`FORECAST_DESCRIPTIONS`] for the `prediction` field of
//! `/predict/basic`. Both are immutable statics. Codes missing from a table are
//! displayed verbatim rather than rejected.

/// An immutable mapping from a backend code to a human-readable sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionTable {
    entries: &'static [(&'static str, &'static str)],
}

impl DescriptionTable {
    const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Looks up the sentence for `code`, returning `None` when the table has no entry.
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, sentence)| *sentence)
    }

    /// Returns the sentence for `code`, or `code` itself when it is not a known key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stormberry_dashboard::{COMFORT_DESCRIPTIONS, FORECAST_DESCRIPTIONS};
    ///
    /// assert_eq!(COMFORT_DESCRIPTIONS.describe("comfortable"), "It's nice out.");
    /// assert_eq!(FORECAST_DESCRIPTIONS.describe("storms"), "Possible storms inbound.");
    ///
    /// // Unknown codes pass through untouched.
    /// assert_eq!(COMFORT_DESCRIPTIONS.describe("unknown-code"), "unknown-code");
    /// ```
    pub fn describe<'a>(&self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }

    /// All codes known to this table, in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Free-function form of [`DescriptionTable::describe`].
pub fn describe<'a>(table: &DescriptionTable, code: &'a str) -> &'a str {
    table.describe(code)
}

/// Sentences for the comfort/safety classification reported by `/comfort/now`.
pub static COMFORT_DESCRIPTIONS: DescriptionTable = DescriptionTable::new(&[
    (
        "extreme-heat",
        "Extremely hot. Avoid going outdoors for long periods.",
    ),
    (
        "dangerous-heat",
        "Hot. Take precautious for being outdoors for extended periods.",
    ),
    ("uncomfortable-heat", "Uncomfortably hot."),
    ("hot", "Uncomfortable."),
    ("comfortable", "It's nice out."),
    ("cool", "Consider wearing a jacket."),
    ("cold", "It's coat weather."),
    (
        "uncomfortable-cold",
        "It's very cold. Minimize exposed skin.",
    ),
    ("dangerous-cold", "Dangerous cold. Minimize time outside."),
]);

/// Sentences for the barometric forecast reported by `/predict/basic`.
pub static FORECAST_DESCRIPTIONS: DescriptionTable = DescriptionTable::new(&[
    ("fair", "Fair weather inbound."),
    ("cloudy-and-warm", "Expect clouds and warmer weather."),
    ("more-of-the-same", "Weather should be consistent."),
    ("little-change", "Expect little change in conditions."),
    ("precipitation-likely", "Precipitation is likely."),
    (
        "clearing-and-cool",
        "Expect clouds to clear and a drop in temperature.",
    ),
    ("precipitation", "Expect precipitation."),
    ("storms", "Possible storms inbound."),
]);

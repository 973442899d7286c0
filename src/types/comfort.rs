use serde::Deserialize;

/// Whether the backend considers it safe to go running right now.
///
/// Decoded from the `safe_to_run` string. Only `"yes"` and `"with-caution"` are
/// recognised; every other value, `null` or a missing field means
/// [`SafetyLevel::NotAdvised`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum SafetyLevel {
    Safe,
    WithCaution,
    #[default]
    NotAdvised,
}

impl SafetyLevel {
    pub fn from_code(code: &str) -> Self {
        match code {
            "yes" => SafetyLevel::Safe,
            "with-caution" => SafetyLevel::WithCaution,
            _ => SafetyLevel::NotAdvised,
        }
    }

    /// The sentence shown in the `safe-to-run` slot.
    pub fn sentence(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "It's currently safe to go running.",
            SafetyLevel::WithCaution => "You can go running, but with caution.",
            SafetyLevel::NotAdvised => "It's currently inadvisable to go running.",
        }
    }
}

impl From<Option<String>> for SafetyLevel {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(SafetyLevel::from_code)
            .unwrap_or_default()
    }
}

/// The comfort and running-safety assessment returned by `/comfort/now`.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct ComfortAssessment {
    /// Key into [`crate::COMFORT_DESCRIPTIONS`]. `None` when the backend matched no rule.
    #[serde(rename = "comfort_safety_str")]
    pub comfort_code: Option<String>,
    #[serde(rename = "safe_to_run", default)]
    pub safety_level: SafetyLevel,
    #[serde(rename = "method")]
    pub method_name: String,
    #[serde(rename = "comfort_safety_value")]
    pub score_value: f64,

    // Indices the backend computes alongside the score. Not displayed.
    #[serde(default)]
    pub humidex: Option<f64>,
    #[serde(default)]
    pub heat_index: Option<f64>,
    #[serde(default)]
    pub wbgt: Option<f64>,
    #[serde(default)]
    pub windchill: Option<f64>,
    #[serde(default)]
    pub dewpoint_comfort: Option<String>,
}

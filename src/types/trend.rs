//! Defines the `Trend` enum, classifying a signed delta into falling, steady or rising.

use std::fmt;

/// The qualitative direction of a trend value reported by the backend.
///
/// Used for the temperature trend sentence of `/predict/basic` and for the three
/// weekly trend icons of `/weather/past-week/trend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// The delta is negative.
    Falling,
    /// The delta is exactly zero.
    Steady,
    /// The delta is positive.
    Rising,
}

impl Trend {
    /// Classifies a signed delta.
    ///
    /// `delta < 0` is [`Trend::Falling`], `delta > 0` is [`Trend::Rising`] and
    /// everything else (zero, negative zero, NaN) is [`Trend::Steady`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stormberry_dashboard::Trend;
    ///
    /// assert_eq!(Trend::classify(-2.0), Trend::Falling);
    /// assert_eq!(Trend::classify(0.0), Trend::Steady);
    /// assert_eq!(Trend::classify(0.003), Trend::Rising);
    /// ```
    pub fn classify(delta: f64) -> Self {
        if delta < 0.0 {
            Trend::Falling
        } else if delta > 0.0 {
            Trend::Rising
        } else {
            Trend::Steady
        }
    }

    /// The Material icon token displayed for this trend.
    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Falling => "trending_down",
            Trend::Steady => "trending_flat",
            Trend::Rising => "trending_up",
        }
    }

    /// The sentence describing a temperature moving in this direction.
    pub fn temperature_sentence(&self) -> &'static str {
        match self {
            Trend::Falling => "The temperature is falling.",
            Trend::Steady => "The temperature is staying the same.",
            Trend::Rising => "The temperature is rising.",
        }
    }
}

/// Allows formatting a `Trend` using its icon token.
impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.icon())
    }
}

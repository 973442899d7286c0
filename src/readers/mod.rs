//! The endpoint readers.
//!
//! A reader turns one backend payload into the display updates for the slots and
//! chart targets it owns. The transform is pure ([`Reader::updates`]); fetching and
//! writing are done by [`crate::Dashboard::refresh`], which only writes once the
//! payload has been fetched and decoded in full.

pub mod basic_prediction;
pub mod comfort;
pub mod latest_reading;
pub mod past_day;
pub mod past_week;
pub mod weekly_trend;

use crate::fetch::endpoint::Endpoint;
use crate::view::{ChartTarget, Slot, ViewUpdate};
use serde::de::DeserializeOwned;
use std::fmt;

/// Identifies one of the six readers at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderKind {
    LatestReading,
    Comfort,
    BasicPrediction,
    PastDay,
    PastWeek,
    WeeklyTrend,
}

impl ReaderKind {
    pub const ALL: [ReaderKind; 6] = [
        ReaderKind::LatestReading,
        ReaderKind::Comfort,
        ReaderKind::BasicPrediction,
        ReaderKind::PastDay,
        ReaderKind::PastWeek,
        ReaderKind::WeeklyTrend,
    ];

    pub fn endpoint(&self) -> Endpoint {
        match self {
            ReaderKind::LatestReading => Endpoint::LatestReading,
            ReaderKind::Comfort => Endpoint::ComfortNow,
            ReaderKind::BasicPrediction => Endpoint::BasicPrediction,
            ReaderKind::PastDay => Endpoint::PastDay,
            ReaderKind::PastWeek => Endpoint::PastWeek,
            ReaderKind::WeeklyTrend => Endpoint::PastWeekTrend,
        }
    }

    /// The text slots this reader writes, in write order.
    pub fn slots(&self) -> &'static [Slot] {
        match self {
            ReaderKind::LatestReading => &[
                Slot::CurrentTemp,
                Slot::CurrentTempF,
                Slot::CurrentHumidity,
                Slot::CurrentPressure,
                Slot::CurrentDewpoint,
                Slot::CurrentDewpointF,
                Slot::LatestDatapointTime,
            ],
            ReaderKind::Comfort => &[
                Slot::CurrentComfort,
                Slot::SafeToRun,
                Slot::ComfortMethod,
                Slot::ComfortValue,
            ],
            ReaderKind::BasicPrediction => &[Slot::BasicPrediction, Slot::BasicTempTrend],
            ReaderKind::PastDay | ReaderKind::PastWeek => &[],
            ReaderKind::WeeklyTrend => &[
                Slot::WeekTempTrend,
                Slot::WeekPressureTrend,
                Slot::WeekDewpointTrend,
            ],
        }
    }

    /// The chart targets this reader renders, in render order.
    pub fn charts(&self) -> &'static [ChartTarget] {
        match self {
            ReaderKind::PastDay => &[ChartTarget::HourlyConditions],
            ReaderKind::PastWeek => &[
                ChartTarget::WeeklyDewpoint,
                ChartTarget::WeeklyPressure,
                ChartTarget::WeeklyTemperature,
            ],
            _ => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReaderKind::LatestReading => "latest-reading",
            ReaderKind::Comfort => "comfort",
            ReaderKind::BasicPrediction => "basic-prediction",
            ReaderKind::PastDay => "past-day",
            ReaderKind::PastWeek => "past-week",
            ReaderKind::WeeklyTrend => "weekly-trend",
        }
    }
}

impl fmt::Display for ReaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The pure half of an endpoint reader.
pub trait Reader {
    /// The decoded JSON body of [`Reader::KIND`]'s endpoint.
    type Payload: DeserializeOwned + Send;

    const KIND: ReaderKind;

    /// Everything this reader writes for `payload`, in write order.
    fn updates(payload: &Self::Payload) -> Vec<ViewUpdate>;
}

/// Asserts that `updates` touch exactly the targets `R` owns, in the declared order.
#[cfg(test)]
pub(crate) fn assert_writes_owned_targets<R: Reader>(updates: &[ViewUpdate]) {
    let slots: Vec<Slot> = updates
        .iter()
        .filter_map(|u| match u {
            ViewUpdate::Text(slot, _) => Some(*slot),
            ViewUpdate::Chart(..) => None,
        })
        .collect();
    let charts: Vec<ChartTarget> = updates
        .iter()
        .filter_map(|u| match u {
            ViewUpdate::Chart(target, _) => Some(*target),
            ViewUpdate::Text(..) => None,
        })
        .collect();
    assert_eq!(slots, R::KIND.slots(), "{} slots", R::KIND);
    assert_eq!(charts, R::KIND.charts(), "{} charts", R::KIND);
}

//! Shared fixtures for the dashboard integration tests.
//!
//! Provides canned backend bodies shaped like the real station API and
//! `setup_dashboard()`, which wires them into a `FixtureSource` + `MemoryView` dashboard.

#![allow(dead_code)]

use stormberry_dashboard::{Dashboard, Endpoint, FixtureSource, MemoryView};

pub const LATEST_READING: &str = r#"{
    "timestr": "12:00",
    "tempc": 20.0,
    "tempf": 68.0,
    "humidity": 55,
    "inchesHg": 29.92,
    "dewpointc": 10.0
}"#;

pub const COMFORT_NOW: &str = r#"{
    "humidex": 22.4,
    "heat_index": 19.8,
    "wbgt": 21.3,
    "windchill": 20.0,
    "dewpoint_comfort": "comfortable",
    "comfort_safety_str": "comfortable",
    "method": "wet-bulb-globe-temperature",
    "comfort_safety_value": 21.3,
    "safe_to_run": "yes"
}"#;

pub const BASIC_PREDICTION: &str = r#"{
    "prediction": "storms",
    "pressure_trend": -1.4,
    "hours": 24,
    "mean_pressure": 29.61,
    "predicted_temp": null,
    "tempc_trend": -2,
    "dewpoint_trend": -0.3
}"#;

pub const PAST_DAY: &str = r#"[
    {"timestr": "2024-06-01 10:00:00", "tempc": 15.0, "humidity": 60, "inchesHg": 29.80, "dewpointc": 7.0},
    {"timestr": "2024-06-01 11:00:00", "tempc": 16.5, "humidity": 58, "inchesHg": 29.85, "dewpointc": "7.5"},
    {"timestr": "2024-06-01 12:00:00", "tempc": 18.0, "humidity": 55, "inchesHg": 29.90, "dewpointc": 8.0}
]"#;

pub const PAST_WEEK: &str = r#"[
    {"datestr": "2024-05-26", "tempc": 12.0, "inchesHg": 30.10, "dewpointc": 4.0},
    {"datestr": "2024-05-27", "tempc": 14.0, "inchesHg": 30.00, "dewpointc": 5.5},
    {"datestr": "2024-05-28", "tempc": 13.0, "inchesHg": 29.70, "dewpointc": 6.0},
    {"datestr": "2024-05-29", "tempc": 17.5, "inchesHg": 29.65, "dewpointc": 9.0}
]"#;

pub const PAST_WEEK_TREND: &str = r#"{"tempc_trend": 1, "pressure_trend": -1, "dewpoint_trend": 1}"#;

/// A fixture source serving a healthy body for every endpoint.
pub fn full_source() -> FixtureSource {
    FixtureSource::new()
        .with(Endpoint::LatestReading, LATEST_READING)
        .with(Endpoint::ComfortNow, COMFORT_NOW)
        .with(Endpoint::BasicPrediction, BASIC_PREDICTION)
        .with(Endpoint::PastDay, PAST_DAY)
        .with(Endpoint::PastWeek, PAST_WEEK)
        .with(Endpoint::PastWeekTrend, PAST_WEEK_TREND)
}

/// A dashboard over [`full_source`] with an empty in-memory view.
pub fn setup_dashboard() -> Dashboard<FixtureSource, MemoryView> {
    Dashboard::with_source(full_source(), MemoryView::new())
}

/// A dashboard serving only the given endpoint bodies.
pub fn dashboard_with(bodies: &[(Endpoint, &str)]) -> Dashboard<FixtureSource, MemoryView> {
    let source = FixtureSource::new();
    for (endpoint, body) in bodies {
        source.set(*endpoint, *body);
    }
    Dashboard::with_source(source, MemoryView::new())
}

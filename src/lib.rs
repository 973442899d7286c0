mod chart;
mod dashboard;
mod error;
mod fetch;
mod readers;
mod types;
mod utils;
mod view;

pub use dashboard::*;
pub use error::DashboardError;

pub use fetch::endpoint::Endpoint;
pub use fetch::error::FetchError;
pub use fetch::source::{fetch_json, FixtureSource, HttpSource, PayloadSource};

pub use types::comfort::{ComfortAssessment, SafetyLevel};
pub use types::descriptions::{describe, DescriptionTable, COMFORT_DESCRIPTIONS, FORECAST_DESCRIPTIONS};
pub use types::forecast::ForecastSummary;
pub use types::reading::Reading;
pub use types::series_point::{LabelField, TimeSeriesPoint};
pub use types::trend::Trend;
pub use types::units::{format_fixed, format_plain, to_celsius, to_fahrenheit};
pub use types::weekly_trend::WeeklyTrendSummary;

pub use chart::series::{shape_series, Metric, MetricSeries, SeriesPair};
pub use chart::spec::{
    AxisOptions, ChartSpec, Interpolation, LineChartData, LineChartOptions, Padding, ScatterTrace,
};

pub use readers::basic_prediction::BasicPredictionReader;
pub use readers::comfort::ComfortReader;
pub use readers::latest_reading::LatestReadingReader;
pub use readers::past_day::PastDayReader;
pub use readers::past_week::PastWeekReader;
pub use readers::weekly_trend::WeeklyTrendReader;
pub use readers::{Reader, ReaderKind};

pub use view::log_view::LogView;
pub use view::memory::MemoryView;
pub use view::{ChartTarget, Slot, ViewSink, ViewUpdate};

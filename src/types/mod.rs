pub mod comfort;
pub mod descriptions;
pub mod forecast;
pub mod reading;
pub mod series_point;
pub mod trend;
pub mod units;
pub mod weekly_trend;

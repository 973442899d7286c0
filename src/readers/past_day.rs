use crate::chart::series::{shape_series, Metric};
use crate::chart::spec::{ChartSpec, ScatterTrace};
use crate::readers::{Reader, ReaderKind};
use crate::types::series_point::{LabelField, TimeSeriesPoint};
use crate::view::{ChartTarget, ViewUpdate};

/// Plots the last 24 hours from `/weather/past-day` as one scatter chart.
///
/// Dewpoint, temperature and pressure become three traces (in that order)
/// sharing the hourly `timestr` labels.
pub struct PastDayReader;

impl Reader for PastDayReader {
    type Payload = Vec<TimeSeriesPoint>;
    const KIND: ReaderKind = ReaderKind::PastDay;

    fn updates(points: &Vec<TimeSeriesPoint>) -> Vec<ViewUpdate> {
        let series = shape_series(points, LabelField::Time);
        let traces = vec![
            ScatterTrace::for_metric(Metric::Dewpoint, series.dewpoint),
            ScatterTrace::for_metric(Metric::Temperature, series.temperature),
            ScatterTrace::for_metric(Metric::Pressure, series.pressure),
        ];
        vec![ViewUpdate::Chart(
            ChartTarget::HourlyConditions,
            ChartSpec::Scatter(traces),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::assert_writes_owned_targets;

    #[test]
    fn test_three_traces_in_order() {
        let points = vec![
            TimeSeriesPoint::hourly("2024-06-01 10:00:00")
                .with_temperature(15.0)
                .with_dewpoint(7.0)
                .with_pressure(29.8),
            TimeSeriesPoint::hourly("2024-06-01 11:00:00")
                .with_temperature(16.5)
                .with_dewpoint(7.5)
                .with_pressure(29.85),
        ];
        let updates = PastDayReader::updates(&points);
        assert_writes_owned_targets::<PastDayReader>(&updates);

        let ViewUpdate::Chart(_, ChartSpec::Scatter(traces)) = &updates[0] else {
            panic!("Expected a scatter chart, got {:?}", updates[0]);
        };
        let names: Vec<_> = traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Dewpoint", "Temperature", "Pressure"]);
        for trace in traces {
            assert_eq!(trace.x, ["2024-06-01 10:00:00", "2024-06-01 11:00:00"]);
            assert_eq!(trace.trace_type, "scatter");
        }
        assert_eq!(traces[0].y, [Some(7.0), Some(7.5)]);
        assert_eq!(traces[1].y, [Some(15.0), Some(16.5)]);
        assert_eq!(traces[2].y, [Some(29.8), Some(29.85)]);
    }

    #[test]
    fn test_empty_day_still_renders() {
        let updates = PastDayReader::updates(&Vec::new());
        let ViewUpdate::Chart(_, ChartSpec::Scatter(traces)) = &updates[0] else {
            panic!("Expected a scatter chart");
        };
        assert_eq!(traces.len(), 3);
        assert!(traces.iter().all(|t| t.x.is_empty() && t.y.is_empty()));
    }
}

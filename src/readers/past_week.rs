use crate::chart::series::shape_series;
use crate::chart::spec::ChartSpec;
use crate::readers::{Reader, ReaderKind};
use crate::types::series_point::{LabelField, TimeSeriesPoint};
use crate::view::{ChartTarget, ViewUpdate};

/// Plots the last week from `/weather/past-week` as three separate line charts,
/// labelled by `datestr`.
pub struct PastWeekReader;

impl Reader for PastWeekReader {
    type Payload = Vec<TimeSeriesPoint>;
    const KIND: ReaderKind = ReaderKind::PastWeek;

    fn updates(points: &Vec<TimeSeriesPoint>) -> Vec<ViewUpdate> {
        let series = shape_series(points, LabelField::Date);
        vec![
            ViewUpdate::Chart(ChartTarget::WeeklyDewpoint, ChartSpec::line(series.dewpoint)),
            ViewUpdate::Chart(ChartTarget::WeeklyPressure, ChartSpec::line(series.pressure)),
            ViewUpdate::Chart(
                ChartTarget::WeeklyTemperature,
                ChartSpec::line(series.temperature),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::{LineChartData, LineChartOptions};
    use crate::readers::assert_writes_owned_targets;

    fn line_of(update: &ViewUpdate) -> (&LineChartData, &LineChartOptions) {
        match update {
            ViewUpdate::Chart(_, ChartSpec::Line { data, options }) => (data, options),
            other => panic!("Expected a line chart, got {:?}", other),
        }
    }

    #[test]
    fn test_one_chart_per_metric() {
        let points = vec![
            TimeSeriesPoint::daily("2024-05-26")
                .with_temperature(12.0)
                .with_dewpoint(4.0)
                .with_pressure(30.1),
            TimeSeriesPoint::daily("2024-05-27")
                .with_temperature(14.0)
                .with_pressure(30.0),
            TimeSeriesPoint::daily("2024-05-28")
                .with_temperature(13.0)
                .with_dewpoint(6.0)
                .with_pressure(29.7),
        ];
        let updates = PastWeekReader::updates(&points);
        assert_writes_owned_targets::<PastWeekReader>(&updates);

        let (dewpoint, options) = line_of(&updates[0]);
        assert_eq!(dewpoint.labels, ["2024-05-26", "2024-05-27", "2024-05-28"]);
        assert_eq!(dewpoint.series, vec![vec![Some(4.0), None, Some(6.0)]]);
        assert_eq!(*options, LineChartOptions::default());
        assert!(!options.axis_x.show_label);

        let (pressure, _) = line_of(&updates[1]);
        assert_eq!(pressure.series, vec![vec![Some(30.1), Some(30.0), Some(29.7)]]);

        let (temperature, _) = line_of(&updates[2]);
        assert_eq!(temperature.series, vec![vec![Some(12.0), Some(14.0), Some(13.0)]]);
        assert_eq!(temperature.labels, dewpoint.labels);
    }
}

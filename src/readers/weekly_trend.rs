use crate::readers::{Reader, ReaderKind};
use crate::types::weekly_trend::WeeklyTrendSummary;
use crate::view::{Slot, ViewUpdate};

/// Shows a trend icon for temperature, pressure and dewpoint from `/weather/past-week/trend`.
///
/// Each icon is classified from its own delta only.
pub struct WeeklyTrendReader;

impl Reader for WeeklyTrendReader {
    type Payload = WeeklyTrendSummary;
    const KIND: ReaderKind = ReaderKind::WeeklyTrend;

    fn updates(summary: &WeeklyTrendSummary) -> Vec<ViewUpdate> {
        vec![
            ViewUpdate::Text(Slot::WeekTempTrend, summary.temperature().icon().to_string()),
            ViewUpdate::Text(Slot::WeekPressureTrend, summary.pressure().icon().to_string()),
            ViewUpdate::Text(Slot::WeekDewpointTrend, summary.dewpoint().icon().to_string()),
        ]
    }
}

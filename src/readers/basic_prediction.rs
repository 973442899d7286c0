use crate::readers::{Reader, ReaderKind};
use crate::types::descriptions::FORECAST_DESCRIPTIONS;
use crate::types::forecast::ForecastSummary;
use crate::view::{Slot, ViewUpdate};

/// Shows the forecast sentence and temperature trend from `/predict/basic`.
pub struct BasicPredictionReader;

impl Reader for BasicPredictionReader {
    type Payload = ForecastSummary;
    const KIND: ReaderKind = ReaderKind::BasicPrediction;

    fn updates(forecast: &ForecastSummary) -> Vec<ViewUpdate> {
        let description = forecast
            .forecast_code
            .as_deref()
            .map(|code| FORECAST_DESCRIPTIONS.describe(code))
            .unwrap_or_default();

        vec![
            ViewUpdate::Text(Slot::BasicPrediction, description.to_string()),
            ViewUpdate::Text(
                Slot::BasicTempTrend,
                forecast.temperature_trend().temperature_sentence().to_string(),
            ),
        ]
    }
}

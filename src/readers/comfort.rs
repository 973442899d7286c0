use crate::readers::{Reader, ReaderKind};
use crate::types::comfort::ComfortAssessment;
use crate::types::descriptions::COMFORT_DESCRIPTIONS;
use crate::types::units::format_fixed;
use crate::view::{Slot, ViewUpdate};

/// Shows the comfort description and running advisory from `/comfort/now`.
pub struct ComfortReader;

impl Reader for ComfortReader {
    type Payload = ComfortAssessment;
    const KIND: ReaderKind = ReaderKind::Comfort;

    fn updates(comfort: &ComfortAssessment) -> Vec<ViewUpdate> {
        let description = comfort
            .comfort_code
            .as_deref()
            .map(|code| COMFORT_DESCRIPTIONS.describe(code))
            .unwrap_or_default();

        vec![
            ViewUpdate::Text(Slot::CurrentComfort, description.to_string()),
            ViewUpdate::Text(Slot::SafeToRun, comfort.safety_level.sentence().to_string()),
            ViewUpdate::Text(Slot::ComfortMethod, comfort.method_name.clone()),
            ViewUpdate::Text(Slot::ComfortValue, format_fixed(comfort.score_value, 1)),
        ]
    }
}

use crate::readers::{Reader, ReaderKind};
use crate::types::reading::Reading;
use crate::types::units::{format_fixed, format_plain, to_fahrenheit};
use crate::view::{Slot, ViewUpdate};

/// Shows the current conditions from `/weather/latest-reading`.
///
/// Temperature and dewpoint appear in Celsius and in Fahrenheit, both with one
/// decimal. Humidity and pressure are shown as received.
pub struct LatestReadingReader;

impl Reader for LatestReadingReader {
    type Payload = Reading;
    const KIND: ReaderKind = ReaderKind::LatestReading;

    fn updates(reading: &Reading) -> Vec<ViewUpdate> {
        vec![
            ViewUpdate::Text(Slot::CurrentTemp, format_fixed(reading.temperature_c, 1)),
            ViewUpdate::Text(
                Slot::CurrentTempF,
                format_fixed(to_fahrenheit(reading.temperature_c), 1),
            ),
            ViewUpdate::Text(Slot::CurrentHumidity, format_plain(reading.humidity)),
            ViewUpdate::Text(Slot::CurrentPressure, format_plain(reading.pressure_in_hg)),
            ViewUpdate::Text(Slot::CurrentDewpoint, format_fixed(reading.dewpoint_c, 1)),
            ViewUpdate::Text(
                Slot::CurrentDewpointF,
                format_fixed(to_fahrenheit(reading.dewpoint_c), 1),
            ),
            ViewUpdate::Text(Slot::LatestDatapointTime, reading.time_label.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::assert_writes_owned_targets;

    fn reading(temperature_c: f64, dewpoint_c: f64) -> Reading {
        Reading {
            temperature_c,
            humidity: 55.0,
            pressure_in_hg: 29.92,
            dewpoint_c,
            time_label: "12:00".to_string(),
        }
    }

    #[test]
    fn test_updates() {
        let updates = LatestReadingReader::updates(&reading(20.0, 10.0));
        assert_writes_owned_targets::<LatestReadingReader>(&updates);
        assert_eq!(
            updates,
            vec![
                ViewUpdate::Text(Slot::CurrentTemp, "20.0".into()),
                ViewUpdate::Text(Slot::CurrentTempF, "68.0".into()),
                ViewUpdate::Text(Slot::CurrentHumidity, "55".into()),
                ViewUpdate::Text(Slot::CurrentPressure, "29.92".into()),
                ViewUpdate::Text(Slot::CurrentDewpoint, "10.0".into()),
                ViewUpdate::Text(Slot::CurrentDewpointF, "50.0".into()),
                ViewUpdate::Text(Slot::LatestDatapointTime, "12:00".into()),
            ]
        );
    }

    #[test]
    fn test_negative_and_fractional_temperatures() {
        let updates = LatestReadingReader::updates(&reading(-12.34, -20.0));
        assert_eq!(updates[0], ViewUpdate::Text(Slot::CurrentTemp, "-12.3".into()));
        // -12.34 * 1.8 + 32 = 9.788
        assert_eq!(updates[1], ViewUpdate::Text(Slot::CurrentTempF, "9.8".into()));
        assert_eq!(updates[5], ViewUpdate::Text(Slot::CurrentDewpointF, "-4.0".into()));
    }

    #[test]
    fn test_two_decimal_ties_round_away_from_zero() {
        let updates = LatestReadingReader::updates(&reading(20.25, -3.25));
        assert_eq!(updates[0], ViewUpdate::Text(Slot::CurrentTemp, "20.3".into()));
        assert_eq!(updates[4], ViewUpdate::Text(Slot::CurrentDewpoint, "-3.3".into()));
        // 68.45 and 26.15 are stored slightly above and below the tie.
        assert_eq!(updates[1], ViewUpdate::Text(Slot::CurrentTempF, "68.5".into()));
        assert_eq!(updates[5], ViewUpdate::Text(Slot::CurrentDewpointF, "26.1".into()));
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Composable, Fields, TalkerSentence, Validity,
    nmea_content::{TalkerId, format},
    validity::mask_slots,
};

/// MWD - Wind Direction and Speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwd_wind_direction_speed>
///
/// ```text
///         1     2 3     4 5     6 7     8
///         |     | |     | |     | |     |
///  $--MWD,xxx.x,T,xxx.x,M,xxx.x,N,xxx.x,M*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MWD {
    /// Wind direction in degrees true
    pub direction_true: Option<f64>,
    /// Wind direction in degrees magnetic
    pub direction_magnetic: Option<f64>,
    /// Wind speed in knots
    pub speed_knots: Option<f64>,
    /// Wind speed in meters per second
    pub speed_meters_per_second: Option<f64>,
}

mask_slots! {
    /// Validity mask slots of an [`MWD`] sentence
    pub enum MwdField {
        /// Slot 0 - true direction
        DirectionTrue,
        /// Slot 1 - magnetic direction
        DirectionMagnetic,
        /// Slot 2 - speed in knots
        SpeedKnots,
        /// Slot 3 - speed in meters per second
        SpeedMetersPerSecond,
    }
}

impl MWD {
    /// Clears every field whose slot is flagged invalid.
    pub fn with_validity(self, validity: &Validity) -> Self {
        Self {
            direction_true: validity.gate(MwdField::DirectionTrue, self.direction_true),
            direction_magnetic: validity.gate(MwdField::DirectionMagnetic, self.direction_magnetic),
            speed_knots: validity.gate(MwdField::SpeedKnots, self.speed_knots),
            speed_meters_per_second: validity
                .gate(MwdField::SpeedMetersPerSecond, self.speed_meters_per_second),
        }
    }
}

impl Composable for MWD {
    fn compose_fields(&self, fields: &mut Fields) {
        fields.push_with_unit(self.direction_true, format::angle, 'T');
        fields.push_with_unit(self.direction_magnetic, format::angle, 'M');
        fields.push_with_unit(self.speed_knots, format::angle, 'N');
        fields.push_with_unit(self.speed_meters_per_second, format::angle, 'M');
    }
}

impl TalkerSentence for MWD {
    const SENTENCE_TYPE: &'static str = "MWD";
}

/// Composes an MWD sentence from a positional validity mask (see [`MwdField`]).
pub fn compose_mwd(
    talker: TalkerId,
    validity: &Validity,
    direction_true: f64,
    direction_magnetic: f64,
    speed_knots: f64,
    speed_meters_per_second: f64,
) -> String {
    MWD {
        direction_true: Some(direction_true),
        direction_magnetic: Some(direction_magnetic),
        speed_knots: Some(speed_knots),
        speed_meters_per_second: Some(speed_meters_per_second),
    }
    .with_validity(validity)
    .compose(talker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mwd_all_valid() {
        let sentence = compose_mwd(TalkerId::WEATHER, &Validity::ALL_VALID, 4.2, 4.2, 7.2, 3.7);
        assert_eq!(sentence, "$WIMWD,004.2,T,004.2,M,007.2,N,003.7,M*5B");
    }

    #[test]
    fn test_mwd_units_survive_invalid_values() {
        let sentence = compose_mwd(TalkerId::WEATHER, &Validity::ALL_INVALID, 4.2, 4.2, 7.2, 3.7);
        assert!(sentence.starts_with("$WIMWD,,T,,M,,N,,M*"), "{sentence}");

        let validity = Validity::ALL_VALID.with_invalid(MwdField::DirectionMagnetic);
        let sentence = compose_mwd(TalkerId::WEATHER, &validity, 4.2, 4.2, 7.2, 3.7);
        assert!(sentence.starts_with("$WIMWD,004.2,T,,M,007.2,N,003.7,M*"), "{sentence}");
    }
}

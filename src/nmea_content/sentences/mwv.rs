#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Composable, Fields, TalkerSentence, Validity,
    nmea_content::{AngleReference, SpeedUnits, Status, TalkerId, format},
    validity::mask_slots,
};

/// MWV - Wind Speed and Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwv_wind_speed_and_angle>
///
/// ```text
///         1     2 3     4 5
///         |     | |     | |
///  $--MWV,xxx.x,a,xxx.x,a,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MWV {
    /// Wind angle in degrees, 0 to 359
    pub wind_angle: Option<f64>,
    /// Reference of the wind angle
    pub reference: Option<AngleReference>,
    /// Wind speed
    pub wind_speed: Option<f64>,
    /// Units of the wind speed
    pub speed_units: Option<SpeedUnits>,
    /// Sensor status
    pub status: Option<Status>,
}

mask_slots! {
    /// Validity mask slots of an [`MWV`] sentence
    pub enum MwvField {
        /// Slot 0 - wind angle
        WindAngle,
        /// Slot 1 - angle reference
        Reference,
        /// Slot 2 - wind speed
        WindSpeed,
        /// Slot 3 - wind speed units
        SpeedUnits,
        /// Slot 4 - sensor status
        Status,
    }
}

impl MWV {
    /// Clears every field whose slot is flagged invalid.
    pub fn with_validity(self, validity: &Validity) -> Self {
        Self {
            wind_angle: validity.gate(MwvField::WindAngle, self.wind_angle),
            reference: validity.gate(MwvField::Reference, self.reference),
            wind_speed: validity.gate(MwvField::WindSpeed, self.wind_speed),
            speed_units: validity.gate(MwvField::SpeedUnits, self.speed_units),
            status: validity.gate(MwvField::Status, self.status),
        }
    }
}

impl Composable for MWV {
    fn compose_fields(&self, fields: &mut Fields) {
        fields.push_opt(self.wind_angle, format::angle);
        fields.push_opt(self.reference, |reference| reference.to_string());
        fields.push_opt(self.wind_speed, format::angle);
        fields.push_opt(self.speed_units, |units| units.to_string());
        fields.push_opt(self.status, |status| status.to_string());
    }
}

impl TalkerSentence for MWV {
    const SENTENCE_TYPE: &'static str = "MWV";
}

/// Composes an MWV sentence from a positional validity mask (see [`MwvField`]).
pub fn compose_mwv(
    talker: TalkerId,
    validity: &Validity,
    wind_angle: f64,
    reference: AngleReference,
    wind_speed: f64,
    speed_units: SpeedUnits,
    status: Status,
) -> String {
    MWV {
        wind_angle: Some(wind_angle),
        reference: Some(reference),
        wind_speed: Some(wind_speed),
        speed_units: Some(speed_units),
        status: Some(status),
    }
    .with_validity(validity)
    .compose(talker)
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Composable, Fields, TalkerSentence, Validity,
    nmea_content::{TalkerId, format},
    validity::mask_slots,
};

/// VHW - Water Speed and Heading
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vhw_water_speed_and_heading>
///
/// ```text
///         1      2 3      4 5   6 7   8
///         |      | |      | |   | |   |
///  $--VHW,xxx.xx,T,xxx.xx,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VHW {
    /// Heading in degrees true
    pub heading_true: Option<f64>,
    /// Heading in degrees magnetic
    pub heading_magnetic: Option<f64>,
    /// Speed through water in knots
    pub speed_knots: Option<f64>,
    /// Speed through water in kilometers per hour
    pub speed_kmh: Option<f64>,
}

mask_slots! {
    /// Validity mask slots of a [`VHW`] sentence
    pub enum VhwField {
        /// Slot 0 - true heading
        HeadingTrue,
        /// Slot 1 - magnetic heading
        HeadingMagnetic,
        /// Slot 2 - speed in knots
        SpeedKnots,
        /// Slot 3 - speed in kilometers per hour
        SpeedKmh,
    }
}

impl VHW {
    /// Clears every field whose slot is flagged invalid.
    pub fn with_validity(self, validity: &Validity) -> Self {
        Self {
            heading_true: validity.gate(VhwField::HeadingTrue, self.heading_true),
            heading_magnetic: validity.gate(VhwField::HeadingMagnetic, self.heading_magnetic),
            speed_knots: validity.gate(VhwField::SpeedKnots, self.speed_knots),
            speed_kmh: validity.gate(VhwField::SpeedKmh, self.speed_kmh),
        }
    }
}

impl Composable for VHW {
    fn compose_fields(&self, fields: &mut Fields) {
        fields.push_with_unit(self.heading_true, format::heading, 'T');
        fields.push_with_unit(self.heading_magnetic, format::heading, 'M');
        fields.push_with_unit(self.speed_knots, format::tenths, 'N');
        fields.push_with_unit(self.speed_kmh, format::tenths, 'K');
    }
}

impl TalkerSentence for VHW {
    const SENTENCE_TYPE: &'static str = "VHW";
}

/// Composes a VHW sentence from a positional validity mask (see [`VhwField`]).
pub fn compose_vhw(
    talker: TalkerId,
    validity: &Validity,
    heading_true: f64,
    heading_magnetic: f64,
    speed_knots: f64,
    speed_kmh: f64,
) -> String {
    VHW {
        heading_true: Some(heading_true),
        heading_magnetic: Some(heading_magnetic),
        speed_knots: Some(speed_knots),
        speed_kmh: Some(speed_kmh),
    }
    .with_validity(validity)
    .compose(talker)
}

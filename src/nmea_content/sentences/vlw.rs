#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Composable, Fields, TalkerSentence, Validity,
    nmea_content::{TalkerId, format},
    validity::mask_slots,
};

/// VLW - Distance Traveled through Water
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vlw_distance_traveled_through_water>
///
/// ```text
///         1   2 3   4
///         |   | |   |
///  $--VLW,x.x,N,x.x,N*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VLW {
    /// Total cumulative distance in nautical miles
    pub total_distance: Option<f64>,
    /// Distance since reset in nautical miles
    pub distance_since_reset: Option<f64>,
}

mask_slots! {
    /// Validity mask slots of a [`VLW`] sentence
    pub enum VlwField {
        /// Slot 0 - total cumulative distance
        TotalDistance,
        /// Slot 1 - distance since reset
        DistanceSinceReset,
    }
}

impl VLW {
    /// Clears every field whose slot is flagged invalid.
    pub fn with_validity(self, validity: &Validity) -> Self {
        Self {
            total_distance: validity.gate(VlwField::TotalDistance, self.total_distance),
            distance_since_reset: validity
                .gate(VlwField::DistanceSinceReset, self.distance_since_reset),
        }
    }
}

impl Composable for VLW {
    fn compose_fields(&self, fields: &mut Fields) {
        fields.push_with_unit(self.total_distance, format::decimal, 'N');
        fields.push_with_unit(self.distance_since_reset, format::decimal, 'N');
    }
}

impl TalkerSentence for VLW {
    const SENTENCE_TYPE: &'static str = "VLW";
}

/// Composes a VLW sentence from a positional validity mask (see [`VlwField`]).
pub fn compose_vlw(
    talker: TalkerId,
    validity: &Validity,
    total_distance: f64,
    distance_since_reset: f64,
) -> String {
    VLW {
        total_distance: Some(total_distance),
        distance_since_reset: Some(distance_since_reset),
    }
    .with_validity(validity)
    .compose(talker)
}

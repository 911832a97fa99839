#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Composable, Fields, ProprietarySentence, Validity, nmea_content::format,
    validity::mask_slots,
};

/// PRDID - Teledyne RD Instruments proprietary attitude
///
/// ```text
///        1      2      3
///        |      |      |
///  $PRDID,±pp.pp,±rr.rr,hhh.hh*hh<CR><LF>
/// ```
///
/// A proprietary sentence: its address carries no talker prefix.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PRDID {
    /// Pitch in degrees, positive bow up
    pub pitch: Option<f64>,
    /// Roll in degrees, positive port side up
    pub roll: Option<f64>,
    /// Heading in degrees
    pub heading: Option<f64>,
}

mask_slots! {
    /// Validity mask slots of a [`PRDID`] sentence
    pub enum PrdidField {
        /// Slot 0 - pitch
        Pitch,
        /// Slot 1 - roll
        Roll,
        /// Slot 2 - heading
        Heading,
    }
}

impl PRDID {
    /// Clears every field whose slot is flagged invalid.
    pub fn with_validity(self, validity: &Validity) -> Self {
        Self {
            pitch: validity.gate(PrdidField::Pitch, self.pitch),
            roll: validity.gate(PrdidField::Roll, self.roll),
            heading: validity.gate(PrdidField::Heading, self.heading),
        }
    }
}

impl Composable for PRDID {
    fn compose_fields(&self, fields: &mut Fields) {
        fields.push_opt(self.pitch, format::signed_angle);
        fields.push_opt(self.roll, format::signed_angle);
        fields.push_opt(self.heading, format::heading);
    }
}

impl ProprietarySentence for PRDID {
    const ADDRESS: &'static str = "PRDID";
}

/// Composes a PRDID sentence from a positional validity mask (see [`PrdidField`]).
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::{Validity, nmea_content::compose_prdid};
///
/// let sentence = compose_prdid(&Validity::ALL_VALID, 1.5, -2.25, 90.0);
/// assert_eq!(sentence, "$PRDID,+01.50,-02.25,090.00*77");
/// ```
pub fn compose_prdid(validity: &Validity, pitch: f64, roll: f64, heading: f64) -> String {
    PRDID {
        pitch: Some(pitch),
        roll: Some(roll),
        heading: Some(heading),
    }
    .with_validity(validity)
    .compose()
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Composable, Fields, TalkerSentence, Validity,
    nmea_content::{TalkerId, format},
    validity::mask_slots,
};

/// HDT - Heading - True
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
///
/// ```text
///         1      2
///         |      |
///  $--HDT,xxx.xx,T*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HDT {
    /// Heading in degrees true
    pub heading_true: Option<f64>,
}

mask_slots! {
    /// Validity mask slots of an [`HDT`] sentence
    pub enum HdtField {
        /// Slot 0 - true heading
        HeadingTrue,
    }
}

impl HDT {
    /// Clears every field whose slot is flagged invalid.
    pub fn with_validity(self, validity: &Validity) -> Self {
        Self {
            heading_true: validity.gate(HdtField::HeadingTrue, self.heading_true),
        }
    }
}

impl Composable for HDT {
    fn compose_fields(&self, fields: &mut Fields) {
        fields.push_with_unit(self.heading_true, format::heading, 'T');
    }
}

impl TalkerSentence for HDT {
    const SENTENCE_TYPE: &'static str = "HDT";
}

/// Composes an HDT sentence from a positional validity mask (see [`HdtField`]).
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::{Validity, nmea_content::{TalkerId, compose_hdt}};
///
/// let talker = TalkerId::new("HE").unwrap();
/// assert_eq!(compose_hdt(talker, &Validity::ALL_VALID, 57.34), "$HEHDT,057.34,T*1A");
/// ```
pub fn compose_hdt(talker: TalkerId, validity: &Validity, heading_true: f64) -> String {
    HDT {
        heading_true: Some(heading_true),
    }
    .with_validity(validity)
    .compose(talker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdt() {
        let sentence = compose_hdt(TalkerId::GYRO, &Validity::ALL_VALID, 57.34);
        assert_eq!(sentence, "$HEHDT,057.34,T*1A");

        let sentence = compose_hdt(TalkerId::GYRO, &Validity::ALL_VALID, 359.99);
        assert!(sentence.starts_with("$HEHDT,359.99,T*"));

        let sentence = compose_hdt(TalkerId::GYRO, &Validity::ALL_VALID, 5.0);
        assert!(sentence.starts_with("$HEHDT,005.00,T*"));
    }

    #[test]
    fn test_hdt_invalid_heading() {
        let validity = Validity::ALL_VALID.with_invalid(HdtField::HeadingTrue);
        let sentence = compose_hdt(TalkerId::GYRO, &validity, 57.34);
        assert_eq!(sentence, "$HEHDT,,T*01");
    }
}

mod hdt;
mod mwd;
mod mwv;
mod prdid;
mod rmc;
mod vhw;
mod vlw;
mod xdr;

pub use hdt::{HDT, HdtField, compose_hdt};
pub use mwd::{MWD, MwdField, compose_mwd};
pub use mwv::{MWV, MwvField, compose_mwv};
pub use prdid::{PRDID, PrdidField, compose_prdid};
pub use rmc::{RMC, RmcField, compose_rmc};
pub use vhw::{VHW, VhwField, compose_vhw};
pub use vlw::{VLW, VlwField, compose_vlw};
pub use xdr::{
    MeasuredValue, Transducer, TransducerMeasurement, XDR, XdrField, XdrPart, compose_xdr,
};

use crate::{Composer, TalkerSentence, nmea_content::TalkerId};

/// A unified enum representing all supported NMEA 0183 sentence types.
///
/// This enum acts as a comprehensive abstraction over all built-in NMEA sentence
/// types supported by this composer. Each variant wraps the corresponding strongly-typed
/// struct, so a sink can accept any sentence through a single type.
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_composer::nmea_content::{HDT, NmeaSentence, PRDID, TalkerId};
///
/// let sentences: Vec<NmeaSentence> = vec![
///     HDT { heading_true: Some(57.34) }.into(),
///     PRDID { pitch: Some(1.5), roll: Some(-2.25), heading: Some(90.0) }.into(),
/// ];
///
/// let talker = TalkerId::GYRO;
/// let composed: Vec<String> = sentences.iter().map(|s| s.compose(talker)).collect();
///
/// // The proprietary PRDID sentence ignores the talker
/// assert_eq!(composed, ["$HEHDT,057.34,T*1A", "$PRDID,+01.50,-02.25,090.00*77"]);
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant          | Sentence Type                   | Description                       |
/// |------------------|---------------------------------|-----------------------------------|
/// | HDT([`HDT`])     | Heading - True                  | Gyro heading                      |
/// | MWD([`MWD`])     | Wind Direction and Speed        | True and magnetic wind            |
/// | MWV([`MWV`])     | Wind Speed and Angle            | Relative or true wind             |
/// | PRDID([`PRDID`]) | RD Instruments proprietary      | Pitch, roll and heading           |
/// | RMC([`RMC`])     | Recommended Minimum Navigation  | Essential navigation data         |
/// | VHW([`VHW`])     | Water Speed and Heading         | Speed through water and heading   |
/// | VLW([`VLW`])     | Distance Traveled through Water | Log distances                     |
/// | XDR([`XDR`])     | Transducer Measurement          | Generic sensor readings           |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Heading - True
    HDT(HDT),
    /// Wind Direction and Speed
    MWD(MWD),
    /// Wind Speed and Angle
    MWV(MWV),
    /// Teledyne RD Instruments proprietary attitude
    PRDID(PRDID),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Water Speed and Heading
    VHW(VHW),
    /// Distance Traveled through Water
    VLW(VLW),
    /// Transducer Measurement
    XDR(XDR),
}

impl NmeaSentence {
    /// Returns the sentence type, e.g. `"RMC"`, or the full address of a proprietary sentence.
    pub fn sentence_type(&self) -> &'static str {
        match self {
            Self::HDT(_) => HDT::SENTENCE_TYPE,
            Self::MWD(_) => MWD::SENTENCE_TYPE,
            Self::MWV(_) => MWV::SENTENCE_TYPE,
            Self::PRDID(_) => <PRDID as crate::ProprietarySentence>::ADDRESS,
            Self::RMC(_) => RMC::SENTENCE_TYPE,
            Self::VHW(_) => VHW::SENTENCE_TYPE,
            Self::VLW(_) => VLW::SENTENCE_TYPE,
            Self::XDR(_) => XDR::SENTENCE_TYPE,
        }
    }

    /// Composes the sentence with the default framing.
    ///
    /// The talker is ignored for proprietary sentences.
    pub fn compose(&self, talker: TalkerId) -> String {
        self.compose_with(&Composer::default(), talker)
    }

    /// Composes the sentence with the given composer's framing.
    ///
    /// The talker is ignored for proprietary sentences.
    pub fn compose_with(&self, composer: &Composer, talker: TalkerId) -> String {
        match self {
            Self::HDT(sentence) => composer.compose(talker, sentence),
            Self::MWD(sentence) => composer.compose(talker, sentence),
            Self::MWV(sentence) => composer.compose(talker, sentence),
            Self::PRDID(sentence) => composer.compose_proprietary(sentence),
            Self::RMC(sentence) => composer.compose(talker, sentence),
            Self::VHW(sentence) => composer.compose(talker, sentence),
            Self::VLW(sentence) => composer.compose(talker, sentence),
            Self::XDR(sentence) => composer.compose(talker, sentence),
        }
    }
}

macro_rules! impl_from_sentence {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for NmeaSentence {
                fn from(sentence: $variant) -> Self {
                    Self::$variant(sentence)
                }
            }
        )*
    };
}

impl_from_sentence!(HDT, MWD, MWV, PRDID, RMC, VHW, VLW, XDR);

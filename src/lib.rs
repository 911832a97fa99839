//! # NMEA 0183 Composer
//!
//! This library composes navigation and sensor telemetry into NMEA 0183 sentences of the format:
//! `$HHH,D1,D2,...,Dn*CC`
//!
//! The composer is built in layers:
//! - [`nmea_content::format`] turns single values (positions, times, headings, ...) into
//!   fields with the precision and padding NMEA listeners expect
//! - the typed sentences in [`nmea_content`] order those fields, leaving unknown values empty
//! - [`Composer`] frames the fields with `$`, commas, the XOR checksum and an optional CRLF
//!
//! Which values are known is decided per call, either by leaving struct fields `None` or by
//! handing a positional [`Validity`] mask to a `compose_*` function.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_composer::{
//!     Validity,
//!     nmea_content::{HdtField, TalkerId, compose_hdt},
//! };
//!
//! let talker = TalkerId::new("HE").unwrap();
//!
//! let sentence = compose_hdt(talker, &Validity::ALL_VALID, 57.34);
//! assert_eq!(sentence, "$HEHDT,057.34,T*1A");
//!
//! // The gyro lost its heading: the field is kept, but empty
//! let validity = Validity::ALL_VALID.with_invalid(HdtField::HeadingTrue);
//! let sentence = compose_hdt(talker, &validity, 57.34);
//! assert_eq!(sentence, "$HEHDT,,T*01");
//! ```

mod compose;
pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod validity;

pub use compose::{Composable, Fields, ProprietarySentence, TalkerSentence};
pub use error::Error;
pub use nmea0183::*;
pub use validity::{MaskSlot, VALIDITY_SLOTS, Validity};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

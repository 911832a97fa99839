//! # NMEA Sentence Content
//!
//! Strongly-typed NMEA 0183 sentences, the field formatter behind them, and the
//! single-character codes they share.
//!
//! Every sentence is a plain struct whose optional fields are `Option`s: `None` is written
//! as an empty field. Positional [`Validity`](crate::Validity) masks are applied with each
//! sentence's `with_validity`, or in one step through the `compose_*` functions.

pub mod format;
mod sentences;

pub use sentences::*;

use core::{fmt, str::FromStr};

use crate::{Error, error::Result};

/// Two character identifier of the device class sending a sentence, e.g. `GP` for GPS.
///
/// A `TalkerId` always holds exactly two ASCII alphanumeric characters, so every
/// talker sentence composed with it carries a complete address.
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::{Error, nmea_content::TalkerId};
///
/// let talker: TalkerId = "GP".parse().unwrap();
/// assert_eq!(talker, TalkerId::GPS);
/// assert_eq!(talker.as_str(), "GP");
///
/// assert_eq!(
///     TalkerId::new("GPS"),
///     Err(Error::InvalidTalkerId("GPS".to_string()))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TalkerId([u8; 2]);

impl TalkerId {
    /// GP - Global Positioning System receiver
    pub const GPS: Self = Self(*b"GP");
    /// GN - Combined GNSS receiver
    pub const GNSS: Self = Self(*b"GN");
    /// HE - North seeking gyro
    pub const GYRO: Self = Self(*b"HE");
    /// HC - Magnetic compass
    pub const COMPASS: Self = Self(*b"HC");
    /// II - Integrated instrumentation
    pub const INTEGRATED_INSTRUMENTATION: Self = Self(*b"II");
    /// VW - Mechanical speed log
    pub const SPEED_LOG: Self = Self(*b"VW");
    /// WI - Weather instruments
    pub const WEATHER: Self = Self(*b"WI");

    /// Validates and creates a talker identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTalkerId`] unless `id` is exactly two ASCII alphanumeric
    /// characters.
    pub fn new(id: &str) -> Result<Self> {
        match *id.as_bytes() {
            [first, second] if first.is_ascii_alphanumeric() && second.is_ascii_alphanumeric() => {
                Ok(Self([first, second]))
            }
            _ => Err(Error::InvalidTalkerId(id.to_string())),
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl TryFrom<&str> for TalkerId {
    type Error = Error;

    fn try_from(id: &str) -> Result<Self> {
        Self::new(id)
    }
}

impl FromStr for TalkerId {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        Self::new(id)
    }
}

impl fmt::Display for TalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! composable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Returns the character written for this value.
            pub const fn as_char(self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl From<$name> for char {
            fn from(value: $name) -> char {
                value.as_char()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.as_char())
            }
        }
    };
}

composable_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

composable_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
    }
}

composable_enum! {
    /// Reference of a wind angle
    pub enum AngleReference {
        /// T - True, relative to true north
        'T' => True,
        /// R - Relative, to the vessel's bow
        'R' => Relative,
    }
}

composable_enum! {
    /// Units of a wind speed
    pub enum SpeedUnits {
        /// K - Kilometers per hour
        'K' => KilometersPerHour,
        /// M - Meters per second
        'M' => MetersPerSecond,
        /// N - Knots
        'N' => Knots,
        /// S - Statute miles per hour
        'S' => MilesPerHour,
    }
}

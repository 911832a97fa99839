#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Composable, Fields, MaskSlot, TalkerSentence, Validity,
    nmea_content::{TalkerId, format},
    validity::mask_slots,
};

/// XDR - Transducer Measurement
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_xdr_transducer_measurement>
///
/// ```text
///         1 2   3 4            n
///         | |   | |            |
///  $--XDR,a,x.x,a,c--c, ..... *hh<CR><LF>
/// ```
///
/// Fields 1 to 4 repeat once per transducer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct XDR {
    /// Transducer readings, in wire order
    pub transducers: Vec<Transducer>,
}

/// One transducer quadruplet of an [`XDR`] sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Transducer {
    /// Transducer type, e.g. `C` temperature, `P` pressure, `H` humidity
    pub transducer_type: Option<char>,
    /// Measured value
    pub value: Option<MeasuredValue>,
    /// Units of measurement, e.g. `C` degrees Celsius, `B` bars, `P` percent
    pub units: Option<char>,
    /// Name of the transducer
    pub name: Option<String>,
}

/// A measured value together with the unit that decides how it is written.
///
/// The unit governs formatting even when the units field itself is left empty;
/// see [`format::transducer_value`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredValue {
    /// Measurement
    pub value: f64,
    /// Units of measurement
    pub units: char,
}

/// A complete transducer reading, as supplied by a sensor.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TransducerMeasurement {
    /// Transducer type
    pub transducer_type: char,
    /// Measurement
    pub value: f64,
    /// Units of measurement
    pub units: char,
    /// Name of the transducer
    pub name: String,
}

impl From<TransducerMeasurement> for Transducer {
    fn from(measurement: TransducerMeasurement) -> Self {
        Self {
            transducer_type: Some(measurement.transducer_type),
            value: Some(MeasuredValue {
                value: measurement.value,
                units: measurement.units,
            }),
            units: Some(measurement.units),
            name: Some(measurement.name),
        }
    }
}

mask_slots! {
    /// Part of a transducer quadruplet
    pub enum XdrPart {
        /// Transducer type
        TransducerType,
        /// Measured value
        Value,
        /// Units of measurement
        Units,
        /// Transducer name
        Name,
    }
}

/// Validity mask slot of one part of one transducer in an [`XDR`] sentence.
///
/// Slots advance across the whole sentence: transducer `i` owns slots `4 * i` to `4 * i + 3`.
/// With a 16 slot mask only the first four transducers can be flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XdrField {
    /// Index of the transducer in the sentence
    pub transducer: usize,
    /// Part of the transducer quadruplet
    pub part: XdrPart,
}

impl XdrField {
    /// Creates the slot of `part` of the transducer at index `transducer`.
    pub const fn new(transducer: usize, part: XdrPart) -> Self {
        Self { transducer, part }
    }
}

impl MaskSlot for XdrField {
    fn slot(self) -> usize {
        self.transducer
            .saturating_mul(4)
            .saturating_add(self.part.slot())
    }
}

impl XDR {
    /// Creates a sentence reporting every given measurement.
    pub fn new(measurements: impl IntoIterator<Item = TransducerMeasurement>) -> Self {
        Self {
            transducers: measurements.into_iter().map(Transducer::from).collect(),
        }
    }

    /// Clears every field whose slot is flagged invalid.
    pub fn with_validity(self, validity: &Validity) -> Self {
        let transducers = self
            .transducers
            .into_iter()
            .enumerate()
            .map(|(index, transducer)| {
                let slot = |part| XdrField::new(index, part);

                Transducer {
                    transducer_type: validity
                        .gate(slot(XdrPart::TransducerType), transducer.transducer_type),
                    value: validity.gate(slot(XdrPart::Value), transducer.value),
                    units: validity.gate(slot(XdrPart::Units), transducer.units),
                    name: validity.gate(slot(XdrPart::Name), transducer.name),
                }
            })
            .collect();

        Self { transducers }
    }
}

impl Composable for XDR {
    fn compose_fields(&self, fields: &mut Fields) {
        for transducer in &self.transducers {
            fields.push_opt(transducer.transducer_type, String::from);
            fields.push_opt(transducer.value, |measured| {
                format::transducer_value(measured.value, measured.units)
            });
            fields.push_opt(transducer.units, String::from);
            fields.push_opt(transducer.name.as_deref(), String::from);
        }
    }
}

impl TalkerSentence for XDR {
    const SENTENCE_TYPE: &'static str = "XDR";
}

/// Composes an XDR sentence from a positional validity mask (see [`XdrField`]).
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::{
///     Validity,
///     nmea_content::{TalkerId, TransducerMeasurement, compose_xdr},
/// };
///
/// let measurements = [TransducerMeasurement {
///     transducer_type: 'C',
///     value: 16.4,
///     units: 'C',
///     name: "TEMP".to_string(),
/// }];
///
/// let sentence = compose_xdr(TalkerId::WEATHER, &Validity::from_bits(0b10), &measurements);
/// assert_eq!(sentence, "$WIXDR,C,,C,TEMP*5C");
/// ```
pub fn compose_xdr(
    talker: TalkerId,
    validity: &Validity,
    measurements: &[TransducerMeasurement],
) -> String {
    XDR::new(measurements.iter().cloned())
        .with_validity(validity)
        .compose(talker)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_station() -> Vec<TransducerMeasurement> {
        vec![
            TransducerMeasurement {
                transducer_type: 'C',
                value: 16.4,
                units: 'C',
                name: "TEMP".to_string(),
            },
            TransducerMeasurement {
                transducer_type: 'P',
                value: 1.0079,
                units: 'B',
                name: "PRESS".to_string(),
            },
            TransducerMeasurement {
                transducer_type: 'H',
                value: 98.9,
                units: 'P',
                name: "RH".to_string(),
            },
        ]
    }

    #[test]
    fn test_xdr_all_valid() {
        let sentence = compose_xdr(TalkerId::WEATHER, &Validity::ALL_VALID, &weather_station());
        assert_eq!(sentence, "$WIXDR,C,+016.4,C,TEMP,P,1.0079,B,PRESS,H,098.9,P,RH*3A");
    }

    #[test]
    fn test_xdr_empty() {
        let sentence = compose_xdr(TalkerId::WEATHER, &Validity::ALL_VALID, &[]);
        assert_eq!(sentence, "$WIXDR*50");
    }

    #[test]
    fn test_xdr_slots_advance_across_transducers() {
        let validity = Validity::ALL_VALID
            .with_invalid(XdrField::new(1, XdrPart::Value))
            .with_invalid(XdrField::new(2, XdrPart::Name));
        assert_eq!(validity.bits(), (1 << 5) | (1 << 11));

        let sentence = compose_xdr(TalkerId::WEATHER, &validity, &weather_station());
        assert!(
            sentence.starts_with("$WIXDR,C,+016.4,C,TEMP,P,,B,PRESS,H,098.9,P,*"),
            "{sentence}"
        );
    }

    #[test]
    fn test_xdr_value_keeps_unit_format_when_units_withheld() {
        let validity = Validity::ALL_VALID.with_invalid(XdrField::new(0, XdrPart::Units));
        let sentence = compose_xdr(TalkerId::WEATHER, &validity, &weather_station()[..1]);
        assert!(sentence.starts_with("$WIXDR,C,+016.4,,TEMP*"), "{sentence}");
    }

    #[test]
    fn test_xdr_transducers_beyond_mask_are_valid() {
        // The fifth reading owns slots 16 to 19, which the mask cannot flag
        let measurements: Vec<_> = weather_station().into_iter().cycle().take(5).collect();
        assert_eq!(measurements[4].name, "PRESS");

        let sentence = compose_xdr(TalkerId::WEATHER, &Validity::ALL_INVALID, &measurements);
        assert!(
            sentence.starts_with("$WIXDR,,,,,,,,,,,,,,,,,P,1.0079,B,PRESS*"),
            "{sentence}"
        );
    }

    #[test]
    fn test_xdr_unknown_unit() {
        let measurements = [TransducerMeasurement {
            transducer_type: 'A',
            value: -12.34,
            units: 'D',
            name: "PTCH".to_string(),
        }];
        let sentence = compose_xdr(
            TalkerId::INTEGRATED_INSTRUMENTATION,
            &Validity::ALL_VALID,
            &measurements,
        );
        assert!(sentence.starts_with("$IIXDR,A,-12.3,D,PTCH*"), "{sentence}");
    }
}

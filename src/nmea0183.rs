//! # NMEA 0183 Sentence Framing
//!
//! This module provides the framing half of the composer: it turns an ordered list of
//! already formatted fields into a complete NMEA 0183 sentence of the form
//! `$HHH,D1,D2,...,Dn*CC`, optionally followed by `\r\n`.
//!
//! The framing is configurable to handle:
//! - Upper or lower case hexadecimal checksums
//! - Appending or omitting the CRLF line ending

use core::fmt::Write;

#[cfg(feature = "heapless")]
use crate::{Error, error::Result};
use crate::{
    compose::{Fields, ProprietarySentence, TalkerSentence},
    nmea_content::TalkerId,
};

/// Maximum length of an NMEA 0183 sentence, counting the leading `$` and the trailing `\r\n`.
///
/// Longer sentences are still produced, but a warning is logged because strict
/// listeners may drop them.
pub const MAX_SENTENCE_LENGTH: usize = 82;

/// Defines the letter case of the two hexadecimal checksum digits.
///
/// NMEA 0183 specifies upper case; some devices emit lower case and some
/// listeners expect it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumCase {
    /// Upper case digits, e.g. `*4B`.
    ///
    /// This is the NMEA 0183 conformant form.
    #[default]
    Upper,

    /// Lower case digits, e.g. `*4b`.
    Lower,
}

impl ChecksumCase {
    /// Renders a checksum as exactly two hexadecimal digits in this case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_composer::ChecksumCase;
    ///
    /// assert_eq!(ChecksumCase::Upper.format(0x4B), "4B");
    /// assert_eq!(ChecksumCase::Lower.format(0x4B), "4b");
    /// assert_eq!(ChecksumCase::Lower.format(0x0A), "0a");
    /// ```
    pub fn format(self, checksum: u8) -> String {
        match self {
            ChecksumCase::Upper => format!("{checksum:02X}"),
            ChecksumCase::Lower => format!("{checksum:02x}"),
        }
    }
}

/// Defines whether composed sentences carry the CRLF line ending.
///
/// On the wire every NMEA 0183 sentence ends with `\r\n`, but framing is usually the
/// transport's job, so by default the composer leaves it off.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// CRLF line ending is appended after the checksum.
    ///
    /// Use this mode when writing straight to a serial port or a log file.
    Required,

    /// No line ending is appended.
    ///
    /// Use this mode when handing sentences to a transport that frames lines itself.
    #[default]
    Forbidden,
}

/// Composes sentences with a fixed framing configuration.
///
/// A `Composer` carries no state between calls; it only remembers how sentences should be
/// framed. `Composer::default()` produces upper case checksums without a line ending.
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::{
///     ChecksumCase, Composer, LineEndingMode,
///     nmea_content::{HDT, TalkerId},
/// };
///
/// let talker = TalkerId::new("HE").unwrap();
/// let hdt = HDT { heading_true: Some(57.34) };
///
/// let composer = Composer::default();
/// assert_eq!(composer.compose(talker, &hdt), "$HEHDT,057.34,T*1A");
///
/// let composer = Composer::new(ChecksumCase::Lower, LineEndingMode::Required);
/// assert_eq!(composer.compose(talker, &hdt), "$HEHDT,057.34,T*1a\r\n");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Composer {
    checksum_case: ChecksumCase,
    line_ending: LineEndingMode,
}

impl Composer {
    /// Creates a composer with the given checksum case and line ending mode.
    pub const fn new(checksum_case: ChecksumCase, line_ending: LineEndingMode) -> Self {
        Self {
            checksum_case,
            line_ending,
        }
    }

    /// Returns the configured checksum case.
    pub const fn checksum_case(&self) -> ChecksumCase {
        self.checksum_case
    }

    /// Returns the configured line ending mode.
    pub const fn line_ending(&self) -> LineEndingMode {
        self.line_ending
    }

    /// Composes a talker sentence, addressing it as `<talker><sentence type>`.
    pub fn compose<S: TalkerSentence>(&self, talker: TalkerId, sentence: &S) -> String {
        let mut fields = Fields::new();
        fields.push(format!("{talker}{}", S::SENTENCE_TYPE));
        sentence.compose_fields(&mut fields);

        self.frame(&fields)
    }

    /// Composes a proprietary sentence, whose address carries no talker prefix.
    pub fn compose_proprietary<S: ProprietarySentence>(&self, sentence: &S) -> String {
        let mut fields = Fields::new();
        fields.push(S::ADDRESS);
        sentence.compose_fields(&mut fields);

        self.frame(&fields)
    }

    /// Composes a talker sentence into any [`core::fmt::Write`] sink.
    ///
    /// The sentence is handed to the sink in a single `write_str` call.
    pub fn compose_into<W, S>(
        &self,
        sink: &mut W,
        talker: TalkerId,
        sentence: &S,
    ) -> core::fmt::Result
    where
        W: Write,
        S: TalkerSentence,
    {
        sink.write_str(&self.compose(talker, sentence))
    }

    /// Composes a talker sentence into a fixed-capacity string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the framed sentence is longer than `N` bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_composer::{Composer, Error, nmea_content::{HDT, TalkerId}};
    ///
    /// let talker = TalkerId::new("HE").unwrap();
    /// let hdt = HDT { heading_true: Some(57.34) };
    ///
    /// let sentence = Composer::default().compose_heapless::<82, _>(talker, &hdt).unwrap();
    /// assert_eq!(sentence.as_str(), "$HEHDT,057.34,T*1A");
    ///
    /// let result = Composer::default().compose_heapless::<8, _>(talker, &hdt);
    /// assert_eq!(result, Err(Error::CapacityExceeded { capacity: 8 }));
    /// ```
    #[cfg(feature = "heapless")]
    pub fn compose_heapless<const N: usize, S: TalkerSentence>(
        &self,
        talker: TalkerId,
        sentence: &S,
    ) -> Result<heapless::String<N>> {
        let mut sink = heapless::String::<N>::new();
        self.compose_into(&mut sink, talker, sentence)
            .map_err(|_| Error::CapacityExceeded { capacity: N })?;

        Ok(sink)
    }

    /// Frames already formatted fields according to this composer's configuration.
    pub fn frame(&self, fields: &Fields) -> String {
        let mut sentence = assemble(fields.as_slice(), self.checksum_case);

        let framed_length = sentence.len() + 2;
        if framed_length > MAX_SENTENCE_LENGTH {
            tracing::warn!(
                length = framed_length,
                max = MAX_SENTENCE_LENGTH,
                "sentence exceeds the NMEA 0183 maximum length"
            );
        }

        if self.line_ending == LineEndingMode::Required {
            sentence.push_str("\r\n");
        }

        tracing::debug!(sentence = sentence.trim_end(), "composed sentence");
        sentence
    }
}

/// Assembles formatted fields into a sentence and appends its checksum.
///
/// The result is `"$" + fields.join(",") + "*" + checksum`. Fields are written verbatim;
/// they must not contain `$`, `,` or `*`, which is not checked.
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::{ChecksumCase, assemble};
///
/// let sentence = assemble(&["GPGGA", "123456", "data"], ChecksumCase::Upper);
/// assert_eq!(sentence, "$GPGGA,123456,data*41");
///
/// let sentence = assemble(&["HEHDT", "", "T"], ChecksumCase::Upper);
/// assert_eq!(sentence, "$HEHDT,,T*01");
/// ```
pub fn assemble<F: AsRef<str>>(fields: &[F], case: ChecksumCase) -> String {
    let mut sentence = String::with_capacity(MAX_SENTENCE_LENGTH);
    sentence.push('$');

    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            sentence.push(',');
        }
        let field = field.as_ref();
        tracing::trace!(index, field, "field");
        sentence.push_str(field);
    }

    sentence.push('*');
    let checksum = sentence_checksum(&sentence);
    sentence.push_str(&case.format(checksum));

    sentence
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The NMEA 0183 checksum is calculated by performing an XOR (exclusive OR) operation
/// on all bytes in the message content. This includes everything between the '$' prefix
/// and the '*' checksum delimiter, but excludes both the '$' and '*' characters themselves.
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::checksum;
///
/// // Calculate checksum for "GPGGA,123456,data"
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(content: &str) -> u8 {
    content
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Calculates the checksum of a sentence that already carries its `$` prefix and `*`
/// delimiter.
///
/// Every byte strictly between the first and the last character is XORed. Inputs shorter
/// than three characters have no content and yield `0`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::sentence_checksum;
///
/// assert_eq!(sentence_checksum("$GPGGA,123456,data*"), 0x41);
/// assert_eq!(sentence_checksum("$*"), 0);
/// ```
pub fn sentence_checksum(sentence: &str) -> u8 {
    let bytes = sentence.as_bytes();
    bytes
        .get(1..bytes.len().saturating_sub(1))
        .unwrap_or_default()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::format_checksum;
///
/// let checksum = 0x41;
/// assert_eq!(format_checksum(checksum), "41");
///
/// let checksum = 0x0A;
/// assert_eq!(format_checksum(checksum), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    ChecksumCase::Upper.format(checksum)
}

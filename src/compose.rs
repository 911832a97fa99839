use crate::{Composer, nmea_content::TalkerId};

/// Trait for sentence content that can be written as an ordered list of NMEA fields.
///
/// Implementors push every field after the address, in wire order. Unknown values are
/// pushed as empty fields rather than skipped, so the position of every field is fixed
/// regardless of which values are known.
///
/// This trait is implemented by all strongly-typed NMEA sentence structs. On its own it
/// says nothing about the sentence address; see [`TalkerSentence`] and
/// [`ProprietarySentence`].
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_composer::{Composable, Fields, TalkerSentence, nmea_content::TalkerId};
///
/// struct DPT {
///     depth: Option<f64>,
///     offset: Option<f64>,
/// }
///
/// impl Composable for DPT {
///     fn compose_fields(&self, fields: &mut Fields) {
///         fields.push_opt(self.depth, |depth| format!("{depth:.1}"));
///         fields.push_opt(self.offset, |offset| format!("{offset:.1}"));
///     }
/// }
///
/// impl TalkerSentence for DPT {
///     const SENTENCE_TYPE: &'static str = "DPT";
/// }
///
/// let dpt = DPT { depth: Some(10.5), offset: None };
/// let sentence = dpt.compose(TalkerId::new("SD").unwrap());
/// assert!(sentence.starts_with("$SDDPT,10.5,*"));
/// ```
pub trait Composable {
    /// Pushes the sentence's fields, excluding the address, onto `fields`.
    fn compose_fields(&self, fields: &mut Fields);
}

/// A sentence addressed as `<talker id><sentence type>`, e.g. `GPRMC`.
pub trait TalkerSentence: Composable + Sized {
    /// Three letter sentence type, e.g. `"RMC"`.
    const SENTENCE_TYPE: &'static str;

    /// Composes the sentence with the default framing (upper case checksum, no line ending).
    fn compose(&self, talker: TalkerId) -> String {
        Composer::default().compose(talker, self)
    }
}

/// A proprietary sentence, whose address is fixed and carries no talker prefix, e.g. `PRDID`.
pub trait ProprietarySentence: Composable + Sized {
    /// Complete sentence address, e.g. `"PRDID"`.
    const ADDRESS: &'static str;

    /// Composes the sentence with the default framing (upper case checksum, no line ending).
    fn compose(&self) -> String {
        Composer::default().compose_proprietary(self)
    }
}

/// Ordered list of formatted fields, the address included.
///
/// Empty strings stand for fields whose value is unknown. Fields are expected to be
/// free of the `$`, `,` and `*` delimiters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fields(Vec<String>);

impl Fields {
    /// Creates an empty field list.
    pub fn new() -> Self {
        Self(Vec::with_capacity(16))
    }

    /// Appends a formatted field.
    pub fn push(&mut self, field: impl Into<String>) {
        self.0.push(field.into());
    }

    /// Appends a single character field, such as a unit or a hemisphere letter.
    pub fn push_char(&mut self, field: char) {
        self.0.push(field.to_string());
    }

    /// Appends an empty field.
    pub fn push_empty(&mut self) {
        self.0.push(String::new());
    }

    /// Appends `format(value)`, or an empty field if the value is unknown.
    pub fn push_opt<T>(&mut self, value: Option<T>, format: impl FnOnce(T) -> String) {
        match value {
            Some(value) => self.push(format(value)),
            None => self.push_empty(),
        }
    }

    /// Appends a value followed by its direction letter, e.g. `1202.5313983,S`.
    ///
    /// An unknown value empties both fields.
    pub fn push_pair(&mut self, pair: Option<(String, char)>) {
        match pair {
            Some((value, direction)) => {
                self.push(value);
                self.push_char(direction);
            }
            None => {
                self.push_empty();
                self.push_empty();
            }
        }
    }

    /// Appends a value followed by a literal unit or reference letter, e.g. `057.34,T`.
    ///
    /// The letter is written even if the value is unknown.
    pub fn push_with_unit<T>(
        &mut self,
        value: Option<T>,
        format: impl FnOnce(T) -> String,
        unit: char,
    ) {
        self.push_opt(value, format);
        self.push_char(unit);
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the fields as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl AsRef<[String]> for Fields {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl IntoIterator for Fields {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pair() {
        let mut fields = Fields::new();
        fields.push_pair(Some(("1.4".to_string(), 'W')));
        fields.push_pair(None);
        assert_eq!(fields.as_slice(), ["1.4", "W", "", ""]);
    }

    #[test]
    fn test_push_with_unit_keeps_unit() {
        let mut fields = Fields::new();
        fields.push_with_unit(Some(12.25), |v| format!("{v:.2}"), 'N');
        fields.push_with_unit(None::<f64>, |v| format!("{v:.2}"), 'N');
        assert_eq!(fields.as_slice(), ["12.25", "N", "", "N"]);
        assert_eq!(fields.len(), 4);
    }
}

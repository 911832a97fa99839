//! # Validity Mask
//!
//! Every composer accepts a [`Validity`] mask describing which of its optional fields hold
//! known values. The mask has 16 positional slots. A **set** slot means the value is invalid
//! or unknown and its field is emitted empty; a **clear** slot means the value is formatted.
//!
//! Slot numbering is message specific: slot 0 is always the first optional field of the
//! message, counting upwards in field order. Composite fields such as a latitude and its
//! hemisphere letter share a single slot.
//!
//! Raw positional masks are supported through [`Validity::from_bits`]. Callers that would
//! rather not count slots use the named slot enums exported by each sentence module
//! (for example [`RmcField`](crate::nmea_content::RmcField)):
//!
//! ```rust
//! use nmea0183_composer::{Validity, nmea_content::RmcField};
//!
//! let validity = Validity::ALL_VALID
//!     .with_invalid(RmcField::SpeedOverGround)
//!     .with_invalid(RmcField::MagneticVariation);
//!
//! assert_eq!(validity.bits(), 0b0100_1000);
//! assert!(validity.is_invalid(RmcField::SpeedOverGround));
//! assert!(validity.is_valid(RmcField::FixTime));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of slots held by a [`Validity`] mask.
pub const VALIDITY_SLOTS: usize = 16;

/// A position inside a [`Validity`] mask.
///
/// Implemented for `usize` (a raw positional index) and for the named per-message slot enums.
pub trait MaskSlot {
    /// Returns the zero-based slot index.
    fn slot(self) -> usize;
}

impl MaskSlot for usize {
    fn slot(self) -> usize {
        self
    }
}

/// Per-call field validity flags.
///
/// A set bit marks the corresponding field as invalid. Slots at or beyond
/// [`VALIDITY_SLOTS`] cannot be flagged and always read as valid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Validity(u16);

impl Validity {
    /// A mask with every slot valid.
    pub const ALL_VALID: Self = Self(0);

    /// A mask with every slot invalid.
    pub const ALL_INVALID: Self = Self(u16::MAX);

    /// Creates a mask from its raw positional bits; bit `n` governs slot `n`.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw positional bits.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if the slot's value should be formatted.
    pub fn is_valid(&self, slot: impl MaskSlot) -> bool {
        !self.is_invalid(slot)
    }

    /// Returns `true` if the slot's field should be emitted empty.
    pub fn is_invalid(&self, slot: impl MaskSlot) -> bool {
        let slot = slot.slot();
        slot < VALIDITY_SLOTS && self.0 & (1 << slot) != 0
    }

    /// Flags a slot as invalid.
    ///
    /// Slots beyond the mask are ignored.
    pub fn set_invalid(&mut self, slot: impl MaskSlot) {
        let slot = slot.slot();
        if slot < VALIDITY_SLOTS {
            self.0 |= 1 << slot;
        }
    }

    /// Clears a slot's invalid flag.
    pub fn set_valid(&mut self, slot: impl MaskSlot) {
        let slot = slot.slot();
        if slot < VALIDITY_SLOTS {
            self.0 &= !(1 << slot);
        }
    }

    /// Builder form of [`Validity::set_invalid`].
    #[must_use]
    pub fn with_invalid(mut self, slot: impl MaskSlot) -> Self {
        self.set_invalid(slot);
        self
    }

    /// Keeps `value` only if its slot is valid.
    pub fn gate<T>(&self, slot: impl MaskSlot, value: Option<T>) -> Option<T> {
        value.filter(|_| self.is_valid(slot))
    }
}

impl From<u16> for Validity {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

/// Declares a named slot enum for a sentence's validity mask.
///
/// Discriminants follow declaration order, which must match the message's field order.
macro_rules! mask_slots {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::validity::MaskSlot for $name {
            fn slot(self) -> usize {
                self as usize
            }
        }
    };
}

pub(crate) use mask_slots;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_bits() {
        let validity = Validity::from_bits(0b101);
        assert!(validity.is_invalid(0usize));
        assert!(validity.is_valid(1usize));
        assert!(validity.is_invalid(2usize));
        assert!(validity.is_valid(15usize));
    }

    #[test]
    fn test_slots_beyond_mask_are_valid() {
        let mut validity = Validity::ALL_INVALID;
        assert!(validity.is_invalid(15usize));
        assert!(validity.is_valid(16usize));
        assert!(validity.is_valid(usize::MAX));

        validity.set_invalid(40usize);
        assert_eq!(validity, Validity::ALL_INVALID);
    }

    #[test]
    fn test_set_and_clear() {
        let mut validity = Validity::default();
        validity.set_invalid(3usize);
        assert_eq!(validity.bits(), 0b1000);
        validity.set_valid(3usize);
        assert_eq!(validity, Validity::ALL_VALID);
    }

    #[test]
    fn test_gate() {
        let validity = Validity::ALL_VALID.with_invalid(1usize);
        assert_eq!(validity.gate(0usize, Some(4.2)), Some(4.2));
        assert_eq!(validity.gate(1usize, Some(4.2)), None);
        assert_eq!(validity.gate(0usize, None::<f64>), None);
    }
}

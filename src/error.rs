//! # Error Types
//!
//! This module defines the error types used throughout the NMEA composing library.
//!
//! Composing itself is total: once a sentence value and a validated [`TalkerId`] exist,
//! turning them into text cannot fail. Errors only arise at the edges, when a caller hands
//! in a malformed talker identifier or asks for output into a buffer that is too small.
//!
//! [`TalkerId`]: crate::nmea_content::TalkerId

use thiserror::Error;

/// Holds the result of fallible operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all possible errors that can occur while preparing or writing an NMEA sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The provided talker identifier is not exactly two ASCII alphanumeric characters.
    ///
    /// A sentence address without a valid talker prefix would be structurally short,
    /// so it is rejected before any sentence is composed.
    ///
    /// Contains the rejected input.
    #[error("invalid talker id {0:?}: expected exactly two ASCII alphanumeric characters")]
    InvalidTalkerId(String),

    /// The output sink could not hold the complete sentence.
    ///
    /// Returned by fixed-capacity sinks (for example a `heapless::String<N>`)
    /// when the framed sentence is longer than their capacity.
    #[error("sentence does not fit in a buffer of {capacity} bytes")]
    CapacityExceeded {
        /// The capacity of the sink that overflowed
        capacity: usize,
    },
}

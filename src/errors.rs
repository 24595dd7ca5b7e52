//! Encode, decode, and conversion failures.
//!
//! Every failure aborts the call that raised it: the encoder never returns
//! partial output and the decoder never returns a partial value tree. Decode
//! errors carry the cursor position at the point of failure.
//!
//! The value enum is closed, so there is no runtime "unsupported type" case
//! on the encode path; a Rust type without a `Poculum` representation fails
//! to convert in the rep layer with [`ConversionError`] instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A length would not fit the widest size class of its tag family.
    #[error("{what} of length {len} exceeds the encodable maximum of {max}")]
    OutOfRange {
        what: &'static str,
        len: usize,
        max: u64,
    },

    /// Value nesting deeper than the recursion guard.
    #[error("value nesting exceeds {limit} levels")]
    DepthLimit { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended before the current field was complete.
    #[error("input truncated at byte {at}: needed {needed} more byte(s)")]
    Truncated { at: usize, needed: usize },

    /// A leading byte with no assigned meaning.
    #[error("unknown tag 0x{tag:02x} at byte {at}")]
    UnknownTag { tag: u8, at: usize },

    /// A string payload that is not valid UTF-8.
    #[error("invalid UTF-8 in string payload at byte {at}")]
    InvalidUtf8 { at: usize },

    /// A map entry whose key does not carry a string tag.
    #[error("map key at byte {at} carries non-string tag 0x{tag:02x}")]
    InvalidKey { tag: u8, at: usize },

    /// The root value ended before the input did.
    #[error("root value ends at byte {at}, leaving {trailing} trailing byte(s)")]
    TrailingBytes { at: usize, trailing: usize },

    /// Input nesting deeper than the recursion guard.
    #[error("input nesting exceeds {limit} levels")]
    DepthLimit { limit: usize },
}

/// Failure to view a value as a concrete Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConversionError(pub String);

impl ConversionError {
    pub fn new(s: &str) -> Self { ConversionError(s.to_string()) }
}

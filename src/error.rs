//! Defines [`WKBError`], representing all errors returned by this crate.

use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WKBError {
    /// An element, ring or point index was past the end of its sequence.
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The destination buffer cannot hold the encoded geometry.
    #[error("Buffer too small: need {required} bytes from offset {offset}, have {available}")]
    BufferTooSmall {
        offset: usize,
        required: usize,
        available: usize,
    },

    /// The input ended before the structure it declares was complete.
    #[error("Truncated input at offset {offset}: need {needed} bytes, have {available}")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The type tag, with extension flags masked off, is not one of 1..=7.
    #[error("Unknown WKB type tag: {0}")]
    UnknownTypeTag(u32),

    /// The byte order marker was neither 0 nor 1.
    #[error("Invalid byte order marker: {0}")]
    InvalidByteOrder(u8),

    /// The type word carries a Z or M flag. Only XY geometries are modeled.
    #[error("Unsupported dimension flags in type word {0:#010x}")]
    UnsupportedDimension(u32),

    /// A multi geometry contained a member of the wrong type.
    #[error("Unexpected child type {found} inside {parent}")]
    UnexpectedChildType { parent: &'static str, found: u32 },

    /// Geometry collections were nested deeper than the decoder accepts.
    #[error("Geometry collections nested deeper than {0} levels")]
    NestingTooDeep(usize),

    /// Bytes remained after a complete top-level geometry.
    #[error("{0} trailing bytes after geometry")]
    TrailingBytes(usize),

    /// A hex-encoded EWKB string could not be parsed.
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    /// Whenever a count does not fit into the 32 bit field of the format.
    #[error("Overflow")]
    Overflow,

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type WKBResult<T> = std::result::Result<T, WKBError>;

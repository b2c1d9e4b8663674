use thiserror::Error;

use crate::codec::width::ElementWidth;

/// Codec-level error type - single point of truth
///
/// Sniffer "no match" is deliberately not represented here: an unrecognized
/// blob is a normal `Ok(None)` outcome, never an error.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Base64 text outside the expected alphabet/padding rules
    #[error("Malformed base64 input: {0}")]
    MalformedInput(#[from] base64::DecodeError),

    /// Byte-oriented operation applied to a buffer wider than 8 bits
    #[error("Unsupported element width: {width} bits (operation requires 8-bit elements)")]
    UnsupportedWidth { width: ElementWidth },

    /// Stored element has no corresponding Unicode scalar value
    #[error("Invalid code point: {0:#x}")]
    InvalidCodePoint(u64),

    /// Blob read failure inside a converter
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Codec-level result type - single point of truth
pub type CodecResult<T> = Result<T, CodecError>;

//! Base64 conversion
//!
//! Thin wrapper over the `base64` crate engines. The primitive itself is
//! trusted, not reimplemented; this module only selects the alphabet and
//! enforces the byte-oriented contract: base64 operates on 8-bit buffers
//! only, wider buffers are rejected with `UnsupportedWidth`.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::engine::GeneralPurpose;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::codec::buffer::BinaryBuffer;
use crate::errors::CodecResult;

/// Base64 alphabet selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alphabet {
    /// Standard padded alphabet (`+`, `/`)
    #[default]
    Standard,
    /// URL-safe alphabet (`-`, `_`), padding unchanged
    UrlSafe,
}

impl Alphabet {
    fn engine(&self) -> &'static GeneralPurpose {
        match self {
            Self::Standard => &STANDARD,
            Self::UrlSafe => &URL_SAFE,
        }
    }
}

/// Encode raw bytes to base64 text
pub fn bytes_to_base64(bytes: &[u8], alphabet: Alphabet) -> String {
    alphabet.engine().encode(bytes)
}

/// Decode base64 text to raw bytes
///
/// Malformed input (alphabet or padding violations) surfaces
/// [`CodecError::MalformedInput`](crate::errors::CodecError::MalformedInput).
pub fn base64_to_bytes(text: &str, alphabet: Alphabet) -> CodecResult<Vec<u8>> {
    Ok(alphabet.engine().decode(text)?)
}

/// Encode an 8-bit buffer to base64 text
///
/// Rejects wider buffers: base64 is inherently byte-oriented.
pub fn buffer_to_base64(buffer: BinaryBuffer, alphabet: Alphabet) -> CodecResult<String> {
    Ok(bytes_to_base64(&buffer.into_bytes()?, alphabet))
}

/// Decode base64 text into an 8-bit buffer
pub fn base64_to_buffer(text: &str, alphabet: Alphabet) -> CodecResult<BinaryBuffer> {
    Ok(BinaryBuffer::from_bytes(base64_to_bytes(text, alphabet)?))
}

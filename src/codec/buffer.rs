//! Adaptive binary buffer encoding
//!
//! Converts a code-point sequence into the narrowest fixed-width buffer that
//! holds the whole sequence, in one pass. The width decision is incremental:
//! writing starts at 8 bits and the buffer is widened the first time a value
//! does not fit, with a single bulk copy of the already-written prefix. After
//! a tier is entered its bound is the only check on the hot path - there is
//! no "has the buffer upgraded" flag re-tested per element.
//!
//! The width is carried as an explicit tag on the buffer, decided once at
//! construction, never re-derived from element values on access.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::width::ElementWidth;
use crate::errors::{CodecError, CodecResult};

/// An owned fixed-width buffer of code points
///
/// The variant is the element width; `len()` counts elements, not bytes.
/// Every stored value fits the declared width by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryBuffer {
    /// 8-bit elements
    W8(Vec<u8>),
    /// 16-bit elements
    W16(Vec<u16>),
    /// 32-bit elements
    W32(Vec<u32>),
    /// 64-bit elements
    W64(Vec<u64>),
}

impl BinaryBuffer {
    /// Wrap raw bytes as an 8-bit buffer
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::W8(bytes)
    }

    /// Element width tag
    pub fn width(&self) -> ElementWidth {
        match self {
            Self::W8(_) => ElementWidth::W8,
            Self::W16(_) => ElementWidth::W16,
            Self::W32(_) => ElementWidth::W32,
            Self::W64(_) => ElementWidth::W64,
        }
    }

    /// Element count (not byte count)
    pub fn len(&self) -> usize {
        match self {
            Self::W8(v) => v.len(),
            Self::W16(v) => v.len(),
            Self::W32(v) => v.len(),
            Self::W64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occupied size in bytes
    pub fn byte_len(&self) -> usize {
        self.len() * self.width().bytes()
    }

    /// Element at `index`, widened to `u64`
    pub fn get(&self, index: usize) -> Option<u64> {
        match self {
            Self::W8(v) => v.get(index).copied().map(u64::from),
            Self::W16(v) => v.get(index).copied().map(u64::from),
            Self::W32(v) => v.get(index).copied().map(u64::from),
            Self::W64(v) => v.get(index).copied(),
        }
    }

    /// Decode counterpart of [`encode`]: each element back to its code point
    ///
    /// The width comes from the variant tag - no scanning.
    pub fn code_points(&self) -> Vec<u64> {
        match self {
            Self::W8(v) => v.iter().copied().map(u64::from).collect(),
            Self::W16(v) => v.iter().copied().map(u64::from).collect(),
            Self::W32(v) => v.iter().copied().map(u64::from).collect(),
            Self::W64(v) => v.clone(),
        }
    }

    /// Decode to text, one character per element
    ///
    /// Fails with [`CodecError::InvalidCodePoint`] if an element is not a
    /// Unicode scalar value. The 8-bit variant never fails (Latin-1 range).
    pub fn to_text(&self) -> CodecResult<String> {
        match self {
            Self::W8(v) => Ok(latin1_text(v)),
            _ => self
                .code_points()
                .into_iter()
                .map(|value| {
                    u32::try_from(value)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or(CodecError::InvalidCodePoint(value))
                })
                .collect(),
        }
    }

    /// Borrow the raw bytes of an 8-bit buffer
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::W8(v) => Some(v),
            _ => None,
        }
    }

    /// Take ownership of the raw bytes of an 8-bit buffer
    ///
    /// Byte-oriented consumers (base64, blob construction) reject wider
    /// buffers rather than guessing an endianness for the flattening.
    pub fn into_bytes(self) -> CodecResult<Vec<u8>> {
        match self {
            Self::W8(v) => Ok(v),
            other => Err(CodecError::UnsupportedWidth {
                width: other.width(),
            }),
        }
    }
}

/// Decode bytes as Latin-1 text, one character per byte
pub fn latin1_text(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Encode Latin-1 text back to its bytes
///
/// Characters above U+00FF are truncated to their low byte, matching the
/// lossy byte-oriented round trip of [`latin1_text`].
pub fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u32 as u8).collect()
}

/// Encode a code-point sequence at the narrowest width that fits all of it
///
/// One pass, widening at most once per tier (8→16→32→64). A value that does
/// not even fit the next tier cascades straight through to the one after, so
/// a leading `u64::MAX` upgrades an empty prefix directly to 64 bits before
/// anything is written.
pub fn encode<I>(codes: I) -> BinaryBuffer
where
    I: IntoIterator<Item = u64>,
{
    let iter = codes.into_iter();
    let (reserve, _) = iter.size_hint();
    fill_u8(Vec::with_capacity(reserve), iter)
}

/// Encode a string, one element per Unicode scalar value
pub fn encode_text(text: &str) -> BinaryBuffer {
    encode(text.chars().map(|c| c as u64))
}

fn fill_u8<I>(mut buf: Vec<u8>, mut iter: I) -> BinaryBuffer
where
    I: Iterator<Item = u64>,
{
    while let Some(code) = iter.next() {
        if code > u64::from(u8::MAX) {
            debug!(at = buf.len(), to = %ElementWidth::W16, "widening binary buffer");
            let mut wide = Vec::with_capacity(buf.len() + 1 + iter.size_hint().0);
            wide.extend(buf.iter().copied().map(u16::from));
            return fill_u16(wide, code, iter);
        }
        buf.push(code as u8);
    }
    BinaryBuffer::W8(buf)
}

fn fill_u16<I>(mut buf: Vec<u16>, first: u64, mut iter: I) -> BinaryBuffer
where
    I: Iterator<Item = u64>,
{
    let mut code = first;
    loop {
        if code > u64::from(u16::MAX) {
            debug!(at = buf.len(), to = %ElementWidth::W32, "widening binary buffer");
            let mut wide = Vec::with_capacity(buf.len() + 1 + iter.size_hint().0);
            wide.extend(buf.iter().copied().map(u32::from));
            return fill_u32(wide, code, iter);
        }
        buf.push(code as u16);
        match iter.next() {
            Some(next) => code = next,
            None => return BinaryBuffer::W16(buf),
        }
    }
}

fn fill_u32<I>(mut buf: Vec<u32>, first: u64, mut iter: I) -> BinaryBuffer
where
    I: Iterator<Item = u64>,
{
    let mut code = first;
    loop {
        if code > u64::from(u32::MAX) {
            debug!(at = buf.len(), to = %ElementWidth::W64, "widening binary buffer");
            let mut wide = Vec::with_capacity(buf.len() + 1 + iter.size_hint().0);
            wide.extend(buf.iter().copied().map(u64::from));
            wide.push(code);
            wide.extend(iter);
            return BinaryBuffer::W64(wide);
        }
        buf.push(code as u32);
        match iter.next() {
            Some(next) => code = next,
            None => return BinaryBuffer::W32(buf),
        }
    }
}

//! Element width classification
//!
//! Determines the narrowest fixed-width storage class (8/16/32/64 bits) that
//! can hold every value of a code-point sequence unsigned. The classifier is
//! shared by the adaptive encoder and the byte-oriented base64 entry points.

use serde::{Deserialize, Serialize};

/// Fixed element width of a binary buffer, in bits
///
/// Widths only ever increase while a buffer is being built, never decrease.
/// Input values are `u64`, so anything ≥ 2^64 is outside the input domain by
/// construction rather than a runtime case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementWidth {
    /// 8-bit elements (values in [0, 2^8))
    W8,
    /// 16-bit elements (values in [0, 2^16))
    W16,
    /// 32-bit elements (values in [0, 2^32))
    W32,
    /// 64-bit elements (any `u64` value)
    W64,
}

impl ElementWidth {
    /// Width in bits
    pub const fn bits(&self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Width in bytes (element stride)
    pub const fn bytes(&self) -> usize {
        match self {
            Self::W8 => 1,
            Self::W16 => 2,
            Self::W32 => 4,
            Self::W64 => 8,
        }
    }

    /// Whether `value` fits unsigned in this width
    pub const fn fits(&self, value: u64) -> bool {
        match self {
            Self::W8 => value <= u8::MAX as u64,
            Self::W16 => value <= u16::MAX as u64,
            Self::W32 => value <= u32::MAX as u64,
            Self::W64 => true,
        }
    }

    /// Narrowest width that holds `value`
    pub const fn for_value(value: u64) -> Self {
        if value <= u8::MAX as u64 {
            Self::W8
        } else if value <= u16::MAX as u64 {
            Self::W16
        } else if value <= u32::MAX as u64 {
            Self::W32
        } else {
            Self::W64
        }
    }

    /// Next wider width, if any
    pub const fn widen(&self) -> Option<Self> {
        match self {
            Self::W8 => Some(Self::W16),
            Self::W16 => Some(Self::W32),
            Self::W32 => Some(Self::W64),
            Self::W64 => None,
        }
    }

    /// Classify a whole sequence: the narrowest width holding every value
    ///
    /// Single pass with early exit - once `W64` is reached no wider answer is
    /// possible, so the remaining values are not scanned. An empty sequence
    /// classifies as `W8` (smallest/default width by policy, not an error).
    pub fn classify<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut width = Self::W8;
        for value in values {
            let needed = Self::for_value(value);
            if needed > width {
                width = needed;
                if width == Self::W64 {
                    break;
                }
            }
        }
        width
    }
}

impl std::fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

//! Binary payload codec and media-type sniffing
//!
//! Three tightly coupled pieces: an adaptive binary encoder that stores a
//! code-point sequence at the narrowest fixed element width holding all of
//! it, a base64/data-URL codec built on the 8-bit form of that buffer, and a
//! byte-signature sniffer that classifies the blobs the decode path produces.
//!
//! ```rust
//! use blobkit::codec::{self, ElementWidth};
//!
//! let buf = codec::encode_text("Hello, World!");
//! assert_eq!(buf.width(), ElementWidth::W8);
//! let b64 = codec::buffer_to_base64(buf, codec::Alphabet::Standard).unwrap();
//! assert_eq!(b64, "SGVsbG8sIFdvcmxkIQ==");
//! ```

pub mod codec;
pub mod errors;
pub mod sniff;

pub use errors::{CodecError, CodecResult};

//! Media-type sniffing
//!
//! Byte-signature and content-heuristic classification of opaque blobs.
//! Blob reads are the one asynchronous boundary in the crate; the pattern
//! walk itself is pure.

pub mod blob;
pub mod classify;
pub mod markup;
pub mod patterns;

pub use blob::{BlobSource, MemoryBlob};
pub use classify::{base64_to_blob, classify_media_type, classify_with_table};
pub use patterns::{media_type_for_extension, ContentTest, MimePattern, IMAGE_PATTERNS};

//! Signature sniffing
//!
//! Classifies an opaque blob against the pattern table: exact leading-byte
//! comparison for signature entries, content heuristics for the rest. First
//! match in table order wins, even when a later, longer entry would also
//! match. Exhausting the table is a normal `Ok(None)` outcome - callers fall
//! back to their own default type.
//!
//! Iteration is strictly sequential: one entry's blob read completes before
//! the next begins. A read that never completes hangs the call; no timeout is
//! imposed here.

use std::io;
use tracing::debug;

use crate::codec::base64::{self, Alphabet};
use crate::errors::CodecResult;
use crate::sniff::blob::{BlobSource, MemoryBlob};
use crate::sniff::patterns::{MimePattern, IMAGE_PATTERNS};

/// Classify a blob against the built-in image pattern table
pub async fn classify_media_type(blob: &dyn BlobSource) -> io::Result<Option<&'static MimePattern>> {
    classify_with_table(blob, IMAGE_PATTERNS).await
}

/// Classify a blob against a caller-supplied pattern table
pub async fn classify_with_table<'t>(
    blob: &dyn BlobSource,
    table: &'t [MimePattern],
) -> io::Result<Option<&'t MimePattern>> {
    for pattern in table {
        if let Some(signature) = pattern.signature {
            // Exactly signature.len() leading bytes; a shorter blob yields a
            // shorter read and therefore no match
            let header = blob.read_range(0, signature.len()).await?;
            if header == signature {
                debug!(media_type = pattern.media_type, "signature match");
                return Ok(Some(pattern));
            }
        } else if let Some(test) = &pattern.content_test {
            if test.matches(blob).await? {
                debug!(media_type = pattern.media_type, "content-test match");
                return Ok(Some(pattern));
            }
        }
    }
    debug!(size = blob.size(), "no pattern matched");
    Ok(None)
}

/// Decode base64 text into a blob, tagging it with the sniffed media type
/// when one is recognized
pub async fn base64_to_blob(text: &str) -> CodecResult<MemoryBlob> {
    let blob = MemoryBlob::new(base64::base64_to_bytes(text, Alphabet::Standard)?);
    match classify_media_type(&blob).await? {
        Some(pattern) => Ok(blob.tagged(pattern.media_type)),
        None => Ok(blob),
    }
}

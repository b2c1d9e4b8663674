//! Data URL parsing
//!
//! Decomposes `data:` URLs such as
//! `data:image/png;base64,<payload>` or
//! `data:application/json;charset=utf-8;base64,<payload>`
//! into media type, charset, encoding flag and payload.
//!
//! The parse is tolerant: input that is not a data URL yields the all-empty
//! components value rather than an error, so `parse_data_url` doubles as a
//! classifier. The split happens at the FIRST comma; a raw, non-percent-
//! encoded comma inside the payload therefore truncates the header/payload
//! boundary. Downstream callers depend on that exact boundary, so it is kept
//! as-is rather than second-guessed.

use serde::{Deserialize, Serialize};

use crate::codec::base64::{self, Alphabet};
use crate::codec::buffer;
use crate::errors::CodecResult;
use crate::sniff::blob::MemoryBlob;

/// Parsed components of a `data:` URL
///
/// `is_base64 == true` implies the payload is base64-alphabet text. An absent
/// media type leaves the default (`text/plain;charset=US-ASCII` per the
/// platform convention) to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataUrlComponents {
    /// Media type, lowercased, e.g. `image/png`
    pub media_type: Option<String>,
    /// Character set from a `charset=` header segment
    pub charset: Option<String>,
    /// Whether the payload is base64-encoded
    pub is_base64: bool,
    /// Raw payload substring, percent-encoding untouched
    pub payload: String,
}

/// Whether `url` carries the `data:` scheme prefix (case-insensitive)
pub fn is_data_url(url: &str) -> bool {
    url.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("data:"))
}

/// Parse a data URL into its components
///
/// Non-`data:` input returns `DataUrlComponents::default()`.
pub fn parse_data_url(url: &str) -> DataUrlComponents {
    let mut result = DataUrlComponents::default();
    if !is_data_url(url) {
        return result;
    }

    let rest = &url[5..];
    let (header, payload) = rest.split_once(',').unwrap_or((rest, ""));
    result.payload = payload.to_string();

    let header = header.to_ascii_lowercase();
    let mut segments: Vec<&str> = header.split(';').collect();
    if segments.last() == Some(&"base64") {
        result.is_base64 = true;
        segments.pop();
    }
    if let Some(first) = segments.first() {
        if first.contains('/') {
            result.media_type = Some((*first).to_string());
            if let Some(second) = segments.get(1) {
                if second.contains("charset") {
                    result.charset = second.split('=').nth(1).map(str::to_string);
                }
            }
        }
    }
    result
}

/// Convert a data URL into an in-memory blob tagged with its media type
///
/// Base64 payloads go through the base64 decode path; literal payloads are
/// treated as Latin-1-range characters and run through the adaptive encoder
/// (a payload character above U+00FF widens the buffer past 8 bits and is
/// rejected as `UnsupportedWidth`).
pub fn data_url_to_blob(url: &str) -> CodecResult<MemoryBlob> {
    let components = parse_data_url(url);
    let bytes = if components.is_base64 {
        base64::base64_to_bytes(&components.payload, Alphabet::Standard)?
    } else {
        buffer::encode_text(&components.payload).into_bytes()?
    };
    Ok(match components.media_type {
        Some(media_type) => MemoryBlob::with_content_type(bytes, media_type),
        None => MemoryBlob::new(bytes),
    })
}

/// Inverse conversion: render a blob as a base64 data URL
pub async fn blob_to_data_url(blob: &dyn crate::sniff::blob::BlobSource) -> CodecResult<String> {
    let bytes = blob.read_all().await?;
    let payload = base64::bytes_to_base64(&bytes, Alphabet::Standard);
    let media_type = blob.content_type().unwrap_or("application/octet-stream");
    Ok(format!("data:{media_type};base64,{payload}"))
}

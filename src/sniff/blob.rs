//! Blob abstraction
//!
//! Reading bytes out of a blob-like object may be asynchronous in the hosting
//! runtime, so the blob seam is an async trait and every read is a single
//! suspension point. The in-memory implementation backs the codec's decode
//! outputs and all tests.

use async_trait::async_trait;
use std::io;

use crate::codec::buffer::latin1_text;

/// Byte-range access to an opaque binary object
///
/// `read_range` clamps to the blob's size, mirroring byte-range slicing
/// semantics: asking for more bytes than exist returns what is there.
#[async_trait]
pub trait BlobSource: Send + Sync {
    /// Total size in bytes
    fn size(&self) -> usize;

    /// Declared content type, if any
    fn content_type(&self) -> Option<&str>;

    /// Read bytes in `[start, end)`, clamped to `size()`
    async fn read_range(&self, start: usize, end: usize) -> io::Result<Vec<u8>>;

    /// Read the whole blob
    async fn read_all(&self) -> io::Result<Vec<u8>> {
        self.read_range(0, self.size()).await
    }

    /// Read the whole blob as text, assuming the default Latin-1 mapping
    /// (one character per byte)
    async fn read_text(&self) -> io::Result<String> {
        Ok(latin1_text(&self.read_all().await?))
    }
}

/// An owned in-memory blob with an optional content-type tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBlob {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

impl MemoryBlob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: None,
        }
    }

    pub fn with_content_type(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: Some(content_type.into()),
        }
    }

    /// Replace the content-type tag, keeping the bytes
    pub fn tagged(self, content_type: impl Into<String>) -> Self {
        Self {
            bytes: self.bytes,
            content_type: Some(content_type.into()),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[async_trait]
impl BlobSource for MemoryBlob {
    fn size(&self) -> usize {
        self.bytes.len()
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    async fn read_range(&self, start: usize, end: usize) -> io::Result<Vec<u8>> {
        let end = end.min(self.bytes.len());
        let start = start.min(end);
        Ok(self.bytes[start..end].to_vec())
    }
}

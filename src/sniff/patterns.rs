//! MIME pattern table
//!
//! Ordered table of byte-signature and content-heuristic rules for image
//! formats, after <https://mimesniff.spec.whatwg.org/#matching-an-image-type-pattern>.
//!
//! Table order is a correctness property, not cosmetic: the first matching
//! entry wins, so the 2-byte TIFF markers (`II`/`MM`) must sit after every
//! longer signature they could prefix, and the content-test entries come
//! last. Byte signatures are compared for exact element-wise equality - the
//! four size bytes inside the WebP marker are literal placeholders in this
//! table, kept as-is from the reference table.

use std::io;

use crate::codec::buffer::latin1_text;
use crate::sniff::blob::BlobSource;
use crate::sniff::markup;

/// Content-level heuristic for formats without a usable fixed signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTest {
    /// Latin-1-decode the first `window` bytes and search for `needle`
    /// anywhere in that text. A heuristic, not a container parse.
    HeaderSubstring {
        window: usize,
        needle: &'static str,
    },
    /// Read the whole blob as text and compare the markup root element's tag
    /// name (case-insensitive)
    MarkupRootTag { tag: &'static str },
}

impl ContentTest {
    pub(crate) async fn matches(&self, blob: &dyn BlobSource) -> io::Result<bool> {
        match self {
            Self::HeaderSubstring { window, needle } => {
                let header = blob.read_range(0, *window).await?;
                Ok(latin1_text(&header).contains(needle))
            }
            Self::MarkupRootTag { tag } => {
                let text = blob.read_text().await?;
                Ok(markup::root_element_name(&text)
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag)))
            }
        }
    }
}

/// One entry of the sniffing table
///
/// Exactly one of `signature` / `content_test` drives matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MimePattern {
    /// Leading-byte signature, matched exactly at offset 0
    pub signature: Option<&'static [u8]>,
    /// Media type reported on match, e.g. `image/png`
    pub media_type: &'static str,
    /// Canonical file extension, with leading dot
    pub extension: &'static str,
    /// Content heuristic used when no fixed signature applies
    pub content_test: Option<ContentTest>,
}

/// Built-in image pattern table, in match-priority order
pub static IMAGE_PATTERNS: &[MimePattern] = &[
    MimePattern {
        signature: Some(&[0x00, 0x00, 0x01, 0x00]),
        media_type: "image/x-icon",
        extension: ".ico",
        content_test: None,
    },
    MimePattern {
        signature: Some(&[0x00, 0x00, 0x02, 0x00]),
        media_type: "image/x-icon",
        extension: ".cur",
        content_test: None,
    },
    // "BM"
    MimePattern {
        signature: Some(&[0x42, 0x4D]),
        media_type: "image/bmp",
        extension: ".bmp",
        content_test: None,
    },
    // "GIF87a"
    MimePattern {
        signature: Some(&[0x47, 0x49, 0x46, 0x38, 0x37, 0x61]),
        media_type: "image/gif",
        extension: ".gif",
        content_test: None,
    },
    // "GIF89a"
    MimePattern {
        signature: Some(&[0x47, 0x49, 0x46, 0x38, 0x39, 0x61]),
        media_type: "image/gif",
        extension: ".gif",
        content_test: None,
    },
    // "RIFF" <size placeholder> "WEBPVP"
    MimePattern {
        signature: Some(&[
            0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50, 0x56, 0x50,
        ]),
        media_type: "image/webp",
        extension: ".webp",
        content_test: None,
    },
    MimePattern {
        signature: Some(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        media_type: "image/png",
        extension: ".png",
        content_test: None,
    },
    MimePattern {
        signature: Some(&[0xFF, 0xD8, 0xFF]),
        media_type: "image/jpeg",
        extension: ".jpg",
        content_test: None,
    },
    // "II", TIFF little-endian. Distinguished from "MM" only by exact
    // position, never by containment.
    MimePattern {
        signature: Some(&[0x49, 0x49]),
        media_type: "image/tiff",
        extension: ".tiff",
        content_test: None,
    },
    // "MM", TIFF big-endian
    MimePattern {
        signature: Some(&[0x4D, 0x4D]),
        media_type: "image/tiff",
        extension: ".tiff",
        content_test: None,
    },
    // AVIF carries its brand inside an ftyp box; a substring scan over the
    // first 24 bytes is enough in practice
    MimePattern {
        signature: None,
        media_type: "image/avif",
        extension: ".avif",
        content_test: Some(ContentTest::HeaderSubstring {
            window: 24,
            needle: "avif",
        }),
    },
    MimePattern {
        signature: None,
        media_type: "image/svg+xml",
        extension: ".svg",
        content_test: Some(ContentTest::MarkupRootTag { tag: "svg" }),
    },
];

/// Media type for an image file extension (with leading dot)
///
/// Covers the extensions whose media type is not simply `image/<ext>`, then
/// falls back to that generic form.
pub fn media_type_for_extension(ext: &str) -> String {
    let ext = ext.to_ascii_lowercase();
    match ext.as_str() {
        ".ico" => "image/vnd.microsoft.icon".to_string(),
        ".jpg" | ".jpeg" => "image/jpeg".to_string(),
        ".svg" => "image/svg+xml".to_string(),
        ".tif" | ".tiff" => "image/tiff".to_string(),
        _ => format!("image/{}", ext.trim_start_matches('.')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sniff::blob::MemoryBlob;

    #[test]
    fn test_every_entry_drives_matching_one_way() {
        for pattern in IMAGE_PATTERNS {
            assert!(
                pattern.signature.is_some() ^ pattern.content_test.is_some(),
                "{} must have exactly one of signature/content_test",
                pattern.media_type
            );
        }
    }

    #[test]
    fn test_tiff_markers_come_after_longer_signatures() {
        let tiff_first = IMAGE_PATTERNS
            .iter()
            .position(|p| p.media_type == "image/tiff")
            .unwrap();
        for (index, pattern) in IMAGE_PATTERNS.iter().enumerate() {
            if let Some(signature) = pattern.signature {
                if signature.len() > 2 {
                    assert!(index < tiff_first, "{} after TIFF", pattern.media_type);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_header_substring_window_is_bounded() {
        // "avif" outside the 24-byte window must not match
        let mut bytes = vec![0u8; 30];
        bytes.extend_from_slice(b"avif");
        let test = ContentTest::HeaderSubstring {
            window: 24,
            needle: "avif",
        };
        assert!(!test.matches(&MemoryBlob::new(bytes)).await.unwrap());

        let mut bytes = vec![0u8; 8];
        bytes.extend_from_slice(b"ftypavif");
        assert!(test.matches(&MemoryBlob::new(bytes)).await.unwrap());
    }

    #[tokio::test]
    async fn test_markup_root_tag_is_case_insensitive() {
        let test = ContentTest::MarkupRootTag { tag: "svg" };
        let blob = MemoryBlob::new(b"<SVG xmlns=\"http://www.w3.org/2000/svg\"/>".to_vec());
        assert!(test.matches(&blob).await.unwrap());
        let blob = MemoryBlob::new(b"<html><svg/></html>".to_vec());
        assert!(!test.matches(&blob).await.unwrap());
    }

    #[test]
    fn test_extension_mapping_special_cases() {
        assert_eq!(media_type_for_extension(".ico"), "image/vnd.microsoft.icon");
        assert_eq!(media_type_for_extension(".jpeg"), "image/jpeg");
        assert_eq!(media_type_for_extension(".JPG"), "image/jpeg");
        assert_eq!(media_type_for_extension(".svg"), "image/svg+xml");
        assert_eq!(media_type_for_extension(".tif"), "image/tiff");
        assert_eq!(media_type_for_extension(".png"), "image/png");
        assert_eq!(media_type_for_extension(".webp"), "image/webp");
    }
}

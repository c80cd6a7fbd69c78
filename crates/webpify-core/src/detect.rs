//! Source format detection from leading byte signatures.
//!
//! Detection is a pure function of a fixed-size byte prefix; it never trusts
//! caller-declared content types and never parses beyond the signature.

use serde::{Deserialize, Serialize};

/// The closed set of supported source encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG/JFIF.
    Jpeg,
    /// Portable Network Graphics.
    Png,
    /// GIF (87a or 89a; animated files decode their first frame).
    Gif,
    /// WebP (re-encoded to the configured settings like any other source).
    WebP,
}

/// All formats the engine accepts as input, in detection order.
pub const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

impl ImageFormat {
    /// Canonical lowercase name, as reported to hosts.
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
        }
    }

    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
        }
    }
}

/// Classify a byte buffer by its magic-number signature.
///
/// Returns `None` for empty input, truncated signatures, or any signature
/// outside the supported set. Only the first 12 bytes are ever examined.
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageFormat::Png);
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some(ImageFormat::Gif);
    }
    // RIFF container with the WEBP fourcc; the RIFF chunk size in between is
    // not part of the signature.
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::WebP);
    }
    None
}

//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detect::ImageFormat;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stream ended before the declared image data was complete.
    #[error("truncated image data: {0}")]
    Truncated(String),

    /// The image file is structurally invalid or corrupted.
    #[error("corrupted image data: {0}")]
    Corrupt(String),

    /// The format is supported but this color mode within it is not.
    #[error("unsupported color mode: {0}")]
    UnsupportedColorMode(String),

    /// The header declares a zero width or height.
    #[error("image has zero width or height")]
    ZeroDimensions,

    /// The image exceeds the decoder's memory limits.
    #[error("image too large to decode: {0}")]
    TooLarge(String),
}

impl DecodeError {
    /// Map an `image` crate error onto the decode taxonomy.
    pub(crate) fn from_image(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(e) => DecodeError::UnsupportedColorMode(e.to_string()),
            image::ImageError::Limits(e) => DecodeError::TooLarge(e.to_string()),
            // Reading past the end of an in-memory buffer surfaces as I/O
            image::ImageError::IoError(e) => DecodeError::Truncated(e.to_string()),
            other => DecodeError::Corrupt(other.to_string()),
        }
    }
}

/// Channel layout of a decoded pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelLayout {
    /// 8-bit RGB, 3 bytes per pixel.
    Rgb8,
    /// 8-bit RGBA, 4 bytes per pixel.
    Rgba8,
}

impl PixelLayout {
    /// Number of interleaved channels per pixel.
    pub fn channels(&self) -> usize {
        match self {
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 => 4,
        }
    }
}

/// Header-derivable facts about an image, produced without a full decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Detected source format.
    pub format: ImageFormat,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Bits per pixel of the decoded representation.
    pub bits_per_pixel: u16,
    /// Whether the image carries an alpha channel.
    pub has_alpha: bool,
}

/// A decoded image with interleaved 8-bit pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Image width in pixels, strictly positive.
    pub width: u32,
    /// Image height in pixels, strictly positive.
    pub height: u32,
    /// Channel layout of `samples`.
    pub layout: PixelLayout,
    /// Row-major sample data. Length is always
    /// `width * height * layout.channels()`.
    pub samples: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer from dimensions, layout, and sample data.
    pub fn new(width: u32, height: u32, layout: PixelLayout, samples: Vec<u8>) -> Self {
        debug_assert_eq!(
            samples.len(),
            width as usize * height as usize * layout.channels(),
            "Sample buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            samples,
        }
    }

    /// Create a PixelBuffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Rgb8,
            samples: img.into_raw(),
        }
    }

    /// Create a PixelBuffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Rgba8,
            samples: img.into_raw(),
        }
    }

    /// Sample length implied by the declared dimensions and layout.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.layout.channels()
    }

    /// Check that the buffer satisfies its own structural invariant.
    pub fn is_consistent(&self) -> bool {
        self.width > 0 && self.height > 0 && self.samples.len() == self.expected_len()
    }
}

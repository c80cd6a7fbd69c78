//! WebP encoding with configurable quality and chroma handling.

use thiserror::Error;

use super::chroma;
use crate::config::ChromaSampling;
use crate::decode::{PixelBuffer, PixelLayout};

/// Largest width or height a WebP container can address.
pub const MAX_WEBP_DIMENSION: u32 = 16383;

/// Errors that can occur during WebP encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The image exceeds the WebP container's 16383-pixel side limit.
    #[error("image {width}x{height} exceeds the WebP dimension limit of {MAX_WEBP_DIMENSION}")]
    TooLarge { width: u32, height: u32 },

    /// Sample data length doesn't match the declared dimensions.
    #[error("invalid sample data: expected {expected} bytes, got {actual}")]
    InvalidSampleData { expected: usize, actual: usize },

    /// The underlying encoder failed.
    #[error("WebP encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a pixel buffer as a lossy WebP stream.
///
/// `quality` is the usual 1-100 control: higher values give larger, more
/// faithful output. Out-of-range values are clamped. The chroma mode is
/// applied per [`chroma`] before the data reaches the encoder. The caller
/// passes scalar snapshot values, never a live configuration object.
///
/// # Errors
///
/// Fails for zero or over-limit dimensions, inconsistent sample data, or an
/// internal encoder failure.
pub fn encode_webp(
    buffer: &PixelBuffer,
    quality: u8,
    chroma_mode: ChromaSampling,
) -> Result<Vec<u8>, EncodeError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }
    if buffer.width > MAX_WEBP_DIMENSION || buffer.height > MAX_WEBP_DIMENSION {
        return Err(EncodeError::TooLarge {
            width: buffer.width,
            height: buffer.height,
        });
    }
    if buffer.samples.len() != buffer.expected_len() {
        return Err(EncodeError::InvalidSampleData {
            expected: buffer.expected_len(),
            actual: buffer.samples.len(),
        });
    }

    let quality = quality.clamp(1, 100);
    let prepared = chroma::prepare(buffer, chroma_mode);

    let encoder = match prepared.layout {
        PixelLayout::Rgb8 => {
            webp::Encoder::from_rgb(&prepared.samples, prepared.width, prepared.height)
        }
        PixelLayout::Rgba8 => {
            webp::Encoder::from_rgba(&prepared.samples, prepared.width, prepared.height)
        }
    };

    let mut config = webp::WebPConfig::new().map_err(|_| {
        EncodeError::EncodingFailed("failed to initialize encoder configuration".to_string())
    })?;
    config.quality = f32::from(quality);
    config.alpha_quality = i32::from(quality);
    config.method = 4;
    if chroma_mode == ChromaSampling::Cs444 {
        config.use_sharp_yuv = 1;
    }

    let output = encoder
        .encode_advanced(&config)
        .map_err(|e| EncodeError::EncodingFailed(format!("{e:?}")))?;

    Ok(output.to_vec())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::tests::{is_webp, photo_like};
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=32, 1u32..=32)
    }

    fn quality_strategy() -> impl Strategy<Value = u8> {
        1u8..=100
    }

    proptest! {
        /// Valid input always produces a valid WebP container.
        #[test]
        fn prop_valid_input_produces_webp(
            (width, height) in dimensions_strategy(),
            quality in quality_strategy(),
        ) {
            let buf = photo_like(width, height);
            let result = encode_webp(&buf, quality, ChromaSampling::Cs420);
            prop_assert!(result.is_ok());
            prop_assert!(is_webp(&result.unwrap()));
        }

        /// Same input always produces same output.
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=16, 1u32..=16),
            quality in quality_strategy(),
        ) {
            let buf = photo_like(width, height);
            let first = encode_webp(&buf, quality, ChromaSampling::Cs420);
            let second = encode_webp(&buf, quality, ChromaSampling::Cs420);
            prop_assert!(first.is_ok() && second.is_ok());
            prop_assert_eq!(first.unwrap(), second.unwrap());
        }

        /// Mismatched sample length is always rejected.
        #[test]
        fn prop_invalid_sample_length_rejected(
            (width, height) in dimensions_strategy(),
            delta in -8i32..=8,
        ) {
            prop_assume!(delta != 0);
            let expected = (width as usize) * (height as usize) * 3;
            let actual = if delta > 0 {
                expected + delta as usize
            } else {
                expected.saturating_sub((-delta) as usize)
            };
            prop_assume!(actual != expected);

            let buf = PixelBuffer {
                width,
                height,
                layout: PixelLayout::Rgb8,
                samples: vec![128u8; actual],
            };
            prop_assert!(
                matches!(
                    encode_webp(&buf, 80, ChromaSampling::Cs420),
                    Err(EncodeError::InvalidSampleData { .. })
                ),
                "expected InvalidSampleData error"
            );
        }

        /// Every chroma mode accepts every quality value.
        #[test]
        fn prop_all_modes_all_qualities(quality in 0u8..=255) {
            let buf = photo_like(8, 8);
            for mode in [
                ChromaSampling::Cs420,
                ChromaSampling::Cs422,
                ChromaSampling::Cs444,
                ChromaSampling::Cs400,
            ] {
                prop_assert!(encode_webp(&buf, quality, mode).is_ok());
            }
        }
    }
}

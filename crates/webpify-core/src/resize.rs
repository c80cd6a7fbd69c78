//! Downscaling to a maximum-dimension constraint.
//!
//! The normalizer scales a decoded buffer so that its longer side does not
//! exceed a configured bound, preserving aspect ratio. It never upscales.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{PixelBuffer, PixelLayout};

/// Errors from resize operations.
#[derive(Debug, Error)]
pub enum ResizeError {
    /// The requested bound is zero pixels.
    #[error("maximum edge must be a positive number of pixels")]
    ZeroMaxEdge,

    /// The input buffer violates its own dimensional invariant.
    #[error("pixel buffer is inconsistent with its declared dimensions")]
    InconsistentBuffer,
}

/// Filter type for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize a buffer to fit within a maximum edge length, preserving aspect
/// ratio.
///
/// The longer side is scaled to exactly `max_edge` and the shorter side
/// proportionally, rounded and floored at 1 pixel. Buffers already within
/// the bound are returned unchanged (as a copy). Upscaling never happens.
///
/// # Errors
///
/// Returns [`ResizeError::ZeroMaxEdge`] for a zero bound and
/// [`ResizeError::InconsistentBuffer`] if the buffer's sample length does
/// not match its declared dimensions.
pub fn resize_to_fit(
    buffer: &PixelBuffer,
    max_edge: u32,
    filter: FilterType,
) -> Result<PixelBuffer, ResizeError> {
    if max_edge == 0 {
        return Err(ResizeError::ZeroMaxEdge);
    }
    if !buffer.is_consistent() {
        return Err(ResizeError::InconsistentBuffer);
    }

    if buffer.width <= max_edge && buffer.height <= max_edge {
        return Ok(buffer.clone());
    }

    let (new_width, new_height) = fit_dimensions(buffer.width, buffer.height, max_edge);
    resample(buffer, new_width, new_height, filter)
}

/// Resample a buffer to exact dimensions with the given filter.
fn resample(
    buffer: &PixelBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelBuffer, ResizeError> {
    match buffer.layout {
        PixelLayout::Rgb8 => {
            let img: image::RgbImage =
                image::ImageBuffer::from_raw(buffer.width, buffer.height, buffer.samples.clone())
                    .ok_or(ResizeError::InconsistentBuffer)?;
            let resized = image::imageops::resize(&img, width, height, filter.to_image_filter());
            Ok(PixelBuffer::from_rgb_image(resized))
        }
        PixelLayout::Rgba8 => {
            let img: image::RgbaImage =
                image::ImageBuffer::from_raw(buffer.width, buffer.height, buffer.samples.clone())
                    .ok_or(ResizeError::InconsistentBuffer)?;
            let resized = image::imageops::resize(&img, width, height, filter.to_image_filter());
            Ok(PixelBuffer::from_rgba_image(resized))
        }
    }
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let ratio = f64::from(width) / f64::from(height);

    if width >= height {
        // Landscape or square: constrain by width
        let new_height = (f64::from(max_edge) / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_width = (f64::from(max_edge) * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}

//! Image decoding pipeline.
//!
//! This module turns detected source bytes into [`PixelBuffer`]s:
//! - One decode strategy per supported format, selected by an exhaustive
//!   match on [`ImageFormat`]
//! - Header-only inspection ([`read_info`]) that reports dimensions and
//!   color depth without paying for a full pixel decode
//!
//! Decoding is pure and stateless: no state is cached between independent
//! inputs, and a returned buffer always satisfies the [`PixelBuffer`]
//! structural invariant.

mod gif;
mod jpeg;
mod png;
mod types;
mod webp;

pub use types::{DecodeError, ImageInfo, PixelBuffer, PixelLayout};

use image::{DynamicImage, ImageDecoder};

use crate::detect::ImageFormat;

/// Decode the bytes of a detected format into a pixel buffer.
///
/// Sources with an alpha channel decode to [`PixelLayout::Rgba8`], everything
/// else to [`PixelLayout::Rgb8`]. Animated GIFs yield their first frame.
///
/// # Errors
///
/// Returns a [`DecodeError`] for truncated or corrupt streams, unsupported
/// color modes, or zero-sized images.
pub fn decode(bytes: &[u8], format: ImageFormat) -> Result<PixelBuffer, DecodeError> {
    match format {
        ImageFormat::Jpeg => jpeg::decode(bytes),
        ImageFormat::Png => png::decode(bytes),
        ImageFormat::Gif => gif::decode(bytes),
        ImageFormat::WebP => webp::decode(bytes),
    }
}

/// Read header-derivable metadata without decoding pixel data.
///
/// Constructing a codec decoder parses the format header, which is enough to
/// report dimensions and color layout; the scan data is never touched.
///
/// # Errors
///
/// Shares the [`DecodeError`] taxonomy with [`decode`].
pub fn read_info(bytes: &[u8], format: ImageFormat) -> Result<ImageInfo, DecodeError> {
    match format {
        ImageFormat::Jpeg => jpeg::read_info(bytes),
        ImageFormat::Png => png::read_info(bytes),
        ImageFormat::Gif => gif::read_info(bytes),
        ImageFormat::WebP => webp::read_info(bytes),
    }
}

/// Run a constructed codec decoder to completion and normalize the result
/// into an 8-bit RGB or RGBA buffer.
fn pixel_buffer_from(decoder: impl ImageDecoder) -> Result<PixelBuffer, DecodeError> {
    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimensions);
    }
    let has_alpha = decoder.color_type().has_alpha();

    let image = DynamicImage::from_decoder(decoder).map_err(DecodeError::from_image)?;

    let buffer = if has_alpha {
        PixelBuffer::from_rgba_image(image.into_rgba8())
    } else {
        PixelBuffer::from_rgb_image(image.into_rgb8())
    };
    debug_assert!(buffer.is_consistent());
    Ok(buffer)
}

/// Build an [`ImageInfo`] from a decoder that has parsed its header.
fn info_from(format: ImageFormat, decoder: &impl ImageDecoder) -> Result<ImageInfo, DecodeError> {
    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimensions);
    }
    let color = decoder.color_type();
    Ok(ImageInfo {
        format,
        width,
        height,
        bits_per_pixel: u16::from(color.bytes_per_pixel()) * 8,
        has_alpha: color.has_alpha(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_fixture(img: DynamicImage, format: image::ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), format)
            .expect("fixture encoding failed");
        bytes
    }

    fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([
                ((x * 255) / width.max(1)) as u8,
                ((y * 255) / height.max(1)) as u8,
                128,
            ])
        });
        DynamicImage::ImageRgb8(img)
    }

    fn gradient_rgba(width: u32, height: u32) -> DynamicImage {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([
                ((x * 255) / width.max(1)) as u8,
                ((y * 255) / height.max(1)) as u8,
                128,
                200,
            ])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_decode_png_rgb() {
        let bytes = encode_fixture(gradient_rgb(40, 20), image::ImageFormat::Png);
        let buf = decode(&bytes, ImageFormat::Png).unwrap();

        assert_eq!(buf.width, 40);
        assert_eq!(buf.height, 20);
        assert_eq!(buf.layout, PixelLayout::Rgb8);
        assert!(buf.is_consistent());
    }

    #[test]
    fn test_decode_png_preserves_alpha() {
        let bytes = encode_fixture(gradient_rgba(16, 16), image::ImageFormat::Png);
        let buf = decode(&bytes, ImageFormat::Png).unwrap();

        assert_eq!(buf.layout, PixelLayout::Rgba8);
        // Alpha channel survives the decode
        assert_eq!(buf.samples[3], 200);
    }

    #[test]
    fn test_decode_jpeg() {
        let bytes = encode_fixture(gradient_rgb(32, 24), image::ImageFormat::Jpeg);
        let buf = decode(&bytes, ImageFormat::Jpeg).unwrap();

        assert_eq!(buf.width, 32);
        assert_eq!(buf.height, 24);
        assert_eq!(buf.layout, PixelLayout::Rgb8);
    }

    #[test]
    fn test_decode_gif_first_frame() {
        let bytes = encode_fixture(gradient_rgb(20, 10), image::ImageFormat::Gif);
        let buf = decode(&bytes, ImageFormat::Gif).unwrap();

        assert_eq!(buf.width, 20);
        assert_eq!(buf.height, 10);
        assert!(buf.is_consistent());
    }

    #[test]
    fn test_decode_webp_source() {
        let bytes = encode_fixture(gradient_rgb(24, 24), image::ImageFormat::WebP);
        let buf = decode(&bytes, ImageFormat::WebP).unwrap();

        assert_eq!(buf.width, 24);
        assert_eq!(buf.height, 24);
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = encode_fixture(gradient_rgb(40, 40), image::ImageFormat::Png);
        let result = decode(&bytes[..bytes.len() / 2], ImageFormat::Png);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_garbage_with_jpeg_signature() {
        let mut bytes = vec![0xFF, 0xD8, 0xFF];
        bytes.extend_from_slice(&[0u8; 32]);
        assert!(decode(&bytes, ImageFormat::Jpeg).is_err());
    }

    #[test]
    fn test_read_info_png() {
        let bytes = encode_fixture(gradient_rgba(60, 30), image::ImageFormat::Png);
        let info = read_info(&bytes, ImageFormat::Png).unwrap();

        assert_eq!(info.format, ImageFormat::Png);
        assert_eq!(info.width, 60);
        assert_eq!(info.height, 30);
        assert_eq!(info.bits_per_pixel, 32);
        assert!(info.has_alpha);
    }

    #[test]
    fn test_read_info_jpeg_no_alpha() {
        let bytes = encode_fixture(gradient_rgb(10, 10), image::ImageFormat::Jpeg);
        let info = read_info(&bytes, ImageFormat::Jpeg).unwrap();

        assert_eq!(info.bits_per_pixel, 24);
        assert!(!info.has_alpha);
    }

    #[test]
    fn test_read_info_matches_decode_dimensions() {
        let bytes = encode_fixture(gradient_rgb(33, 17), image::ImageFormat::Png);
        let info = read_info(&bytes, ImageFormat::Png).unwrap();
        let buf = decode(&bytes, ImageFormat::Png).unwrap();

        assert_eq!((info.width, info.height), (buf.width, buf.height));
    }

    #[test]
    fn test_read_info_is_idempotent() {
        let bytes = encode_fixture(gradient_rgb(25, 25), image::ImageFormat::Gif);
        let first = read_info(&bytes, ImageFormat::Gif).unwrap();
        let second = read_info(&bytes, ImageFormat::Gif).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_info_truncated_header() {
        let bytes = encode_fixture(gradient_rgb(10, 10), image::ImageFormat::Png);
        // PNG signature survives but the IHDR chunk is cut off
        assert!(read_info(&bytes[..12], ImageFormat::Png).is_err());
    }
}

//! WebP decode strategy.
//!
//! WebP is also accepted as a source, so existing WebP files can be
//! re-encoded under new quality or dimension constraints.

use std::io::Cursor;

use image::codecs::webp::WebPDecoder;

use super::{info_from, pixel_buffer_from, DecodeError, ImageInfo, PixelBuffer};
use crate::detect::ImageFormat;

pub(super) fn decode(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let decoder = WebPDecoder::new(Cursor::new(bytes)).map_err(DecodeError::from_image)?;
    pixel_buffer_from(decoder)
}

pub(super) fn read_info(bytes: &[u8]) -> Result<ImageInfo, DecodeError> {
    let decoder = WebPDecoder::new(Cursor::new(bytes)).map_err(DecodeError::from_image)?;
    info_from(ImageFormat::WebP, &decoder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn webp_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([5, 120, 240]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::WebP)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_webp() {
        let buf = decode(&webp_bytes(16, 8)).unwrap();
        assert_eq!((buf.width, buf.height), (16, 8));
    }

    #[test]
    fn test_read_info_webp() {
        let info = read_info(&webp_bytes(16, 8)).unwrap();
        assert_eq!(info.format, ImageFormat::WebP);
        assert_eq!((info.width, info.height), (16, 8));
    }

    #[test]
    fn test_decode_header_only_garbage() {
        let mut bytes = b"RIFF\x24\x00\x00\x00WEBP".to_vec();
        bytes.extend_from_slice(&[0u8; 24]);
        assert!(decode(&bytes).is_err());
    }
}

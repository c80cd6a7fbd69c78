//! GIF decode strategy.
//!
//! Animated files are not a supported output; decoding yields the first
//! frame only.

use std::io::Cursor;

use image::codecs::gif::GifDecoder;

use super::{info_from, pixel_buffer_from, DecodeError, ImageInfo, PixelBuffer};
use crate::detect::ImageFormat;

pub(super) fn decode(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).map_err(DecodeError::from_image)?;
    pixel_buffer_from(decoder)
}

pub(super) fn read_info(bytes: &[u8]) -> Result<ImageInfo, DecodeError> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).map_err(DecodeError::from_image)?;
    info_from(ImageFormat::Gif, &decoder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn gif_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([200, 100, 50]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Gif)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_gif() {
        let buf = decode(&gif_bytes(12, 6)).unwrap();
        assert_eq!((buf.width, buf.height), (12, 6));
        assert!(buf.is_consistent());
    }

    #[test]
    fn test_read_info_gif() {
        let info = read_info(&gif_bytes(12, 6)).unwrap();
        assert_eq!((info.width, info.height), (12, 6));
        assert_eq!(info.format, ImageFormat::Gif);
    }

    #[test]
    fn test_decode_truncated_gif() {
        let bytes = gif_bytes(12, 6);
        assert!(decode(&bytes[..10]).is_err());
    }
}

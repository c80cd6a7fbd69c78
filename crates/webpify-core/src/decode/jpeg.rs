//! JPEG decode strategy.

use std::io::Cursor;

use image::codecs::jpeg::JpegDecoder;

use super::{info_from, pixel_buffer_from, DecodeError, ImageInfo, PixelBuffer};
use crate::detect::ImageFormat;

pub(super) fn decode(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let decoder = JpegDecoder::new(Cursor::new(bytes)).map_err(DecodeError::from_image)?;
    pixel_buffer_from(decoder)
}

pub(super) fn read_info(bytes: &[u8]) -> Result<ImageInfo, DecodeError> {
    let decoder = JpegDecoder::new(Cursor::new(bytes)).map_err(DecodeError::from_image)?;
    info_from(ImageFormat::Jpeg, &decoder)
}

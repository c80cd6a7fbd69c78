//! Chroma preprocessing applied ahead of WebP encoding.
//!
//! Lossy WebP streams carry 4:2:0 chroma natively, so the configurable modes
//! are realized as controls on the pixel data handed to the encoder:
//! 4:2:2 averages the chroma of horizontally adjacent pixel pairs in YCbCr
//! space, and monochrome replaces every pixel with its luma. 4:2:0 and 4:4:4
//! leave the buffer untouched (4:4:4 additionally enables sharp YUV
//! conversion in the encoder).
//!
//! Conversions use the BT.601 full-range matrix, the same one the encoder
//! applies internally.

use std::borrow::Cow;

use crate::config::ChromaSampling;
use crate::decode::PixelBuffer;

/// Apply the configured chroma mode, copying the buffer only when it has to
/// change.
pub(super) fn prepare(buffer: &PixelBuffer, mode: ChromaSampling) -> Cow<'_, PixelBuffer> {
    match mode {
        ChromaSampling::Cs420 | ChromaSampling::Cs444 => Cow::Borrowed(buffer),
        ChromaSampling::Cs422 => {
            let mut out = buffer.clone();
            subsample_horizontal(&mut out);
            Cow::Owned(out)
        }
        ChromaSampling::Cs400 => {
            let mut out = buffer.clone();
            to_monochrome(&mut out);
            Cow::Owned(out)
        }
    }
}

/// BT.601 full-range RGB to YCbCr.
fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = 128.0 - 0.168_736 * r - 0.331_264 * g + 0.5 * b;
    let cr = 128.0 + 0.5 * r - 0.418_688 * g - 0.081_312 * b;
    (y, cb, cr)
}

/// BT.601 full-range YCbCr to RGB, clamped to the 8-bit range.
fn ycbcr_to_rgb(y: f32, cb: f32, cr: f32) -> (u8, u8, u8) {
    let r = y + 1.402 * (cr - 128.0);
    let g = y - 0.344_136 * (cb - 128.0) - 0.714_136 * (cr - 128.0);
    let b = y + 1.772 * (cb - 128.0);
    (
        r.clamp(0.0, 255.0).round() as u8,
        g.clamp(0.0, 255.0).round() as u8,
        b.clamp(0.0, 255.0).round() as u8,
    )
}

/// Average Cb/Cr over horizontally adjacent pixel pairs, keeping per-pixel
/// luma. A trailing odd pixel in a row keeps its own chroma.
fn subsample_horizontal(buffer: &mut PixelBuffer) {
    let channels = buffer.layout.channels();
    let width = buffer.width as usize;

    for row in buffer.samples.chunks_exact_mut(width * channels) {
        let mut x = 0;
        while x + 1 < width {
            let left = x * channels;
            let right = (x + 1) * channels;

            let (y0, cb0, cr0) = rgb_to_ycbcr(row[left], row[left + 1], row[left + 2]);
            let (y1, cb1, cr1) = rgb_to_ycbcr(row[right], row[right + 1], row[right + 2]);
            let cb = (cb0 + cb1) / 2.0;
            let cr = (cr0 + cr1) / 2.0;

            let (r0, g0, b0) = ycbcr_to_rgb(y0, cb, cr);
            let (r1, g1, b1) = ycbcr_to_rgb(y1, cb, cr);
            row[left] = r0;
            row[left + 1] = g0;
            row[left + 2] = b0;
            row[right] = r1;
            row[right + 1] = g1;
            row[right + 2] = b1;

            x += 2;
        }
    }
}

/// Replace every pixel's color channels with its luma; alpha is untouched.
fn to_monochrome(buffer: &mut PixelBuffer) {
    let channels = buffer.layout.channels();
    for pixel in buffer.samples.chunks_exact_mut(channels) {
        let (y, _, _) = rgb_to_ycbcr(pixel[0], pixel[1], pixel[2]);
        let luma = y.clamp(0.0, 255.0).round() as u8;
        pixel[0] = luma;
        pixel[1] = luma;
        pixel[2] = luma;
    }
}

//! WebP encoding pipeline.
//!
//! Serializes a (possibly resized) [`crate::decode::PixelBuffer`] into a
//! lossy WebP byte stream at a configured quality and chroma mode. The
//! encoder consumes scalar snapshot values only; it never reads from a live
//! configuration object.

mod chroma;
mod webp;

pub use self::webp::{encode_webp, EncodeError, MAX_WEBP_DIMENSION};

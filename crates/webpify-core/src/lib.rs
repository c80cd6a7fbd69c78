//! Webpify Core - Image conversion engine
//!
//! This crate converts raster images (JPEG, PNG, GIF, WebP) to lossy WebP
//! under caller-specified quality and dimension constraints, and reports
//! structural metadata without re-encoding. It is a synchronous,
//! self-contained library meant to be embedded behind a narrow boundary
//! (the `webpify-wasm` crate exposes it to a browser host): bytes in,
//! bytes out, no shared references across the boundary.
//!
//! The pipeline per image is detect → decode → normalize → encode, driven
//! by a [`Processor`] that owns a validated [`ProcessingConfig`] and takes
//! an immutable snapshot of it per call.

pub mod config;
pub mod decode;
pub mod detect;
pub mod encode;
pub mod processor;
pub mod resize;

pub use config::{ChromaSampling, ConfigError, ProcessingConfig, DEFAULT_QUALITY};
pub use decode::{DecodeError, ImageInfo, PixelBuffer, PixelLayout};
pub use detect::{detect_format, ImageFormat, SUPPORTED_FORMATS};
pub use encode::{encode_webp, EncodeError, MAX_WEBP_DIMENSION};
pub use processor::{version, ItemError, ProcessError, Processor};
pub use resize::{resize_to_fit, FilterType, ResizeError};

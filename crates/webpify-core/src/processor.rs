//! Conversion orchestration.
//!
//! A [`Processor`] owns one [`ProcessingConfig`] and sequences
//! detect → decode → normalize → encode per image. Every call copies the
//! config once up front, so concurrent reconfiguration never leaks into an
//! in-flight conversion, and a whole batch runs under a single snapshot.
//!
//! The processor keeps no other state: no caches, no sessions, and no
//! failure ever leaves it unusable.

use thiserror::Error;

use crate::config::{ChromaSampling, ConfigError, ProcessingConfig};
use crate::decode::{self, DecodeError, ImageInfo};
use crate::detect::detect_format;
use crate::encode::{encode_webp, EncodeError};
use crate::resize::{resize_to_fit, FilterType, ResizeError};

/// A failure at some stage of the conversion pipeline.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Input bytes match no supported source-format signature.
    #[error("unrecognized image format")]
    Unrecognized,

    /// The source decoded incorrectly.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Downscaling failed.
    #[error(transparent)]
    Resize(#[from] ResizeError),

    /// WebP encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A pipeline failure tagged with the position of the offending image.
///
/// Single-image conversion always reports index 0; batch conversion reports
/// the item's slot in the input sequence.
#[derive(Debug, Error)]
#[error("image {index}: {source}")]
pub struct ItemError {
    /// Zero-based position of the failed image in the submitted sequence.
    pub index: usize,
    /// The stage failure itself.
    #[source]
    pub source: ProcessError,
}

/// Engine version, as reported to hosts.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// The conversion engine's public entry point.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: ProcessingConfig,
}

impl Processor {
    /// Create a processor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current configuration (a copy; the processor's own config can only
    /// change through the validated setters).
    pub fn config(&self) -> ProcessingConfig {
        self.config
    }

    /// Set the lossy quality (1-100). Rejected values leave the previous
    /// quality in effect.
    pub fn set_quality(&mut self, quality: u8) -> Result<(), ConfigError> {
        self.config.set_quality(quality)
    }

    /// Set or clear the maximum-dimension bound. `Some(0)` is rejected.
    pub fn set_max_dimension(&mut self, max_dimension: Option<u32>) -> Result<(), ConfigError> {
        self.config.set_max_dimension(max_dimension)
    }

    /// Set the chroma subsampling mode.
    pub fn set_chroma(&mut self, chroma: ChromaSampling) {
        self.config.set_chroma(chroma);
    }

    /// Convert one image to WebP under the current configuration.
    ///
    /// # Errors
    ///
    /// Any stage failure is returned as an [`ItemError`] with index 0.
    pub fn process_single(&self, bytes: &[u8]) -> Result<Vec<u8>, ItemError> {
        let snapshot = self.config;
        convert(bytes, &snapshot).map_err(|source| ItemError { index: 0, source })
    }

    /// Convert a batch of images, isolating per-item failures.
    ///
    /// The result has exactly one slot per input, in input order; a failed
    /// item yields an `Err` in its own slot and never affects its siblings.
    /// The whole batch runs under one configuration snapshot taken here, so
    /// reconfiguration during a long batch cannot produce mixed settings.
    pub fn process_batch<I, B>(&self, items: I) -> Vec<Result<Vec<u8>, ItemError>>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let snapshot = self.config;
        items
            .into_iter()
            .enumerate()
            .map(|(index, bytes)| {
                convert(bytes.as_ref(), &snapshot).map_err(|source| ItemError { index, source })
            })
            .collect()
    }

    /// Report header-derivable metadata without converting the image.
    ///
    /// Only the format header is parsed; pixel data is never decoded.
    pub fn image_info(&self, bytes: &[u8]) -> Result<ImageInfo, ProcessError> {
        let format = detect_format(bytes).ok_or(ProcessError::Unrecognized)?;
        Ok(decode::read_info(bytes, format)?)
    }
}

/// Run the full pipeline for one image against a config snapshot.
fn convert(bytes: &[u8], config: &ProcessingConfig) -> Result<Vec<u8>, ProcessError> {
    let format = detect_format(bytes).ok_or(ProcessError::Unrecognized)?;
    let decoded = decode::decode(bytes, format)?;

    let normalized = match config.max_dimension() {
        Some(max_edge) => resize_to_fit(&decoded, max_edge, FilterType::Lanczos3)?,
        None => decoded,
    };

    Ok(encode_webp(&normalized, config.quality(), config.chroma())?)
}

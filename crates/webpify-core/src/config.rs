//! Processing configuration with validated ranges.
//!
//! A [`ProcessingConfig`] is owned by a `Processor` and mutated between calls.
//! Every processing call copies the config once at call start, so mutation
//! never affects an in-flight conversion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lossy quality used when none is configured.
pub const DEFAULT_QUALITY: u8 = 80;

/// Errors from rejected configuration updates.
///
/// A rejected update leaves the previous valid value in effect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Quality must be in the 1-100 range.
    #[error("quality must be between 1 and 100, got {0}")]
    QualityOutOfRange(u8),

    /// A maximum dimension of zero would make every output empty.
    #[error("max dimension must be a positive number of pixels")]
    ZeroMaxDimension,
}

/// Chroma subsampling applied when encoding.
///
/// Variant names follow the usual `CsXYZ` shorthand for the J:a:b sampling
/// notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChromaSampling {
    /// Chroma halved both horizontally and vertically (4:2:0).
    #[default]
    Cs420,
    /// Chroma halved horizontally (4:2:2).
    Cs422,
    /// Chroma at full resolution (4:4:4).
    Cs444,
    /// Monochrome: color information is discarded entirely.
    Cs400,
}

/// Parameters for one conversion: quality, size bound, and chroma mode.
///
/// The type is `Copy` so that callers can take an immutable snapshot per call
/// or per batch; the encoder only ever sees such a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    quality: u8,
    max_dimension: Option<u32>,
    chroma: ChromaSampling,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            max_dimension: None,
            chroma: ChromaSampling::default(),
        }
    }
}

impl ProcessingConfig {
    /// Create a config with default values (quality 80, no resize, 4:2:0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Lossy quality, always within 1-100.
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Upper bound on the longer image side, `None` meaning no resize.
    pub fn max_dimension(&self) -> Option<u32> {
        self.max_dimension
    }

    /// Configured chroma subsampling mode.
    pub fn chroma(&self) -> ChromaSampling {
        self.chroma
    }

    /// Set the lossy quality. Values outside 1-100 are rejected and the
    /// previous quality stays in effect.
    pub fn set_quality(&mut self, quality: u8) -> Result<(), ConfigError> {
        if !(1..=100).contains(&quality) {
            return Err(ConfigError::QualityOutOfRange(quality));
        }
        self.quality = quality;
        Ok(())
    }

    /// Set or clear the maximum dimension. `Some(0)` is rejected.
    pub fn set_max_dimension(&mut self, max_dimension: Option<u32>) -> Result<(), ConfigError> {
        if max_dimension == Some(0) {
            return Err(ConfigError::ZeroMaxDimension);
        }
        self.max_dimension = max_dimension;
        Ok(())
    }

    /// Set the chroma subsampling mode. Every variant is valid, so this
    /// cannot fail.
    pub fn set_chroma(&mut self, chroma: ChromaSampling) {
        self.chroma = chroma;
    }
}

//! The `ImageProcessor` binding.
//!
//! Wraps [`webpify_core::Processor`] for JavaScript hosts. Failures become
//! thrown JS strings in single-image mode; in batch mode each failed item is
//! logged to the console and surfaces as `null` in its slot, so one bad file
//! never aborts its siblings.

use wasm_bindgen::prelude::*;

use webpify_core::Processor;

/// Chroma subsampling format
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaSampling {
    /// Both vertically and horizontally subsampled.
    Cs420 = 0,
    /// Horizontally subsampled.
    Cs422 = 1,
    /// Not subsampled.
    Cs444 = 2,
    /// Monochrome.
    Cs400 = 3,
}

impl From<ChromaSampling> for webpify_core::ChromaSampling {
    fn from(value: ChromaSampling) -> Self {
        match value {
            ChromaSampling::Cs420 => webpify_core::ChromaSampling::Cs420,
            ChromaSampling::Cs422 => webpify_core::ChromaSampling::Cs422,
            ChromaSampling::Cs444 => webpify_core::ChromaSampling::Cs444,
            ChromaSampling::Cs400 => webpify_core::ChromaSampling::Cs400,
        }
    }
}

/// Image conversion engine exposed to JavaScript.
#[wasm_bindgen]
#[derive(Default)]
pub struct ImageProcessor {
    inner: Processor,
}

#[wasm_bindgen]
impl ImageProcessor {
    /// Create a processor with default settings (quality 80, no resize,
    /// 4:2:0 chroma).
    #[wasm_bindgen(constructor)]
    pub fn new() -> ImageProcessor {
        ImageProcessor {
            inner: Processor::new(),
        }
    }

    /// Main processing function: converts any supported image to WebP
    ///
    /// Throws a string describing the failed stage if conversion fails.
    pub fn process_image(&self, input_data: &[u8]) -> Result<Vec<u8>, JsValue> {
        self.inner
            .process_single(input_data)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get image information without processing
    ///
    /// Returns `{ format, width, height, bits_per_pixel, has_alpha }`.
    /// Only the image header is parsed; pixel data is never decoded.
    pub fn get_image_info(&self, input_data: &[u8]) -> Result<JsValue, JsValue> {
        let info = self
            .inner
            .image_info(input_data)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Batch process multiple images
    ///
    /// Returns an array with one slot per input, in input order: a
    /// `Uint8Array` of WebP bytes on success, `null` for a failed item.
    /// The whole batch runs under the configuration in effect at call time.
    pub fn process_batch(&self, images: Vec<js_sys::Uint8Array>) -> js_sys::Array {
        let buffers: Vec<Vec<u8>> = images.iter().map(|a| a.to_vec()).collect();
        let results = js_sys::Array::new();

        for result in self.inner.process_batch(&buffers) {
            match result {
                Ok(bytes) => {
                    results.push(&js_sys::Uint8Array::from(bytes.as_slice()));
                }
                Err(err) => {
                    web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
                    results.push(&JsValue::NULL);
                }
            }
        }
        results
    }

    /// Set the lossy quality (1-100). Throws on out-of-range values and
    /// keeps the previous quality in effect.
    #[wasm_bindgen(setter)]
    pub fn set_quality(&mut self, value: u8) -> Result<(), JsValue> {
        self.inner
            .set_quality(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the maximum output dimension in pixels, or `null` to disable
    /// resizing. Throws on zero.
    #[wasm_bindgen(setter)]
    pub fn set_max_dimensions(&mut self, value: Option<u32>) -> Result<(), JsValue> {
        self.inner
            .set_max_dimension(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the chroma subsampling mode.
    #[wasm_bindgen(setter)]
    pub fn set_chroma(&mut self, value: ChromaSampling) {
        self.inner.set_chroma(value.into());
    }
}

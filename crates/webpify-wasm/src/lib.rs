//! Webpify WASM - WebAssembly bindings for the Webpify conversion engine
//!
//! This crate exposes the `webpify-core` pipeline to JavaScript/TypeScript
//! applications as an `ImageProcessor` class plus a couple of informational
//! free functions. All data crosses the boundary as owned byte buffers:
//! the host hands over `Uint8Array` contents, the engine hands back WebP
//! bytes, and neither side keeps references into the other's memory.
//!
//! # Usage
//!
//! ```typescript
//! import init, { ImageProcessor, ChromaSampling } from 'webpify';
//!
//! await init();
//! const processor = new ImageProcessor();
//! processor.quality = 85;
//! processor.max_dimensions = 2048;
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const webp = processor.process_image(bytes);
//! ```

use wasm_bindgen::prelude::*;

mod processor;

pub use processor::{ChromaSampling, ImageProcessor};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn main() {}

/// Get the version of the conversion engine
#[wasm_bindgen]
pub fn get_version() -> String {
    webpify_core::version().to_string()
}

/// List the source formats the engine accepts, as lowercase names
#[wasm_bindgen]
pub fn get_supported_formats() -> Vec<String> {
    webpify_core::SUPPORTED_FORMATS
        .iter()
        .map(|format| format.name().to_string())
        .collect()
}

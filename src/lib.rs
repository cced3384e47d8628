//! # Image Palette Report
//!
//! Extracts the exact color palette of an image and describes every color:
//! frequency, hex, CMYK and hue-rotation harmonies.
//!
//! The pipeline runs one way:
//! pixel grid -> histogram -> (optional reorder) -> per-color enrichment -> report.
//!
//! ```rust,no_run
//! use image_palette_report::{SortCriterion, analyze_bytes, report::render_text};
//!
//! let bytes = std::fs::read("photo.png")?;
//! let analysis = analyze_bytes("photo.png", &bytes, SortCriterion::Hue)?;
//! println!("{}", render_text(&analysis));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use js_sys::{JSON, Object, Reflect};
use wasm_bindgen::prelude::*;

pub mod analysis;
pub mod color;
pub mod config;
pub mod decode;
pub mod error;
pub mod histogram;
pub mod report;
pub mod sort;

#[cfg(not(target_arch = "wasm32"))]
pub mod batch;

pub use analysis::{AnalysisEngine, ColorRecord, ImageAnalysis};
pub use color::{Cmyk, Harmonies, HarmonyKind, Hsv, Rgb};
pub use config::{AnalyzerConfig, ReportFormat};
pub use decode::{DecodedImage, SUPPORTED_EXTENSIONS};
pub use error::{AnalysisError, Result};
pub use sort::SortCriterion;

/// Decode `input` and analyze its palette.
///
/// Returns a JS object with two keys:
/// - `report`: the text report
/// - `analysis`: the analysis as a plain JS object
///
/// `sort` is one of `frequency` (default), `hue`, `saturation`, `brightness`.
#[wasm_bindgen]
pub fn analyze(input: Vec<u8>, sort: Option<String>) -> std::result::Result<Object, JsValue> {
    let to_js = |e: AnalysisError| JsValue::from_str(&e.to_string());

    let criterion = match sort {
        Some(s) => s.parse::<SortCriterion>().map_err(to_js)?,
        None => SortCriterion::default(),
    };

    let image = decode::decode_bytes("image", &input).map_err(to_js)?;
    let analysis = AnalysisEngine::new().analyze_image(&image, criterion);

    let text = report::render_text(&analysis);
    let json = report::render_json(&analysis).map_err(to_js)?;

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("report"), &JsValue::from_str(&text))?;
    Reflect::set(&result, &JsValue::from_str("analysis"), &JSON::parse(&json)?)?;

    Ok(result)
}

/// Native counterpart of [`analyze`]: decode `input` and analyze it.
pub fn analyze_bytes(
    filename: &str,
    input: &[u8],
    criterion: SortCriterion,
) -> Result<ImageAnalysis> {
    let image = decode::decode_bytes(filename, input)?;
    Ok(AnalysisEngine::new().analyze_image(&image, criterion))
}

//! Image decoding in front of the analysis core.
//!
//! Decoding is delegated to the `image` crate; the core only ever sees the
//! resulting RGBA grid.

use std::path::Path;

use image::{GenericImageView, ImageFormat, Rgba};

use crate::{AnalysisError, Result};

/// File extensions a batch run picks up (compared lowercase).
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "tiff", "webp", "psd"];

/// A decoded image ready for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    /// Upper-case container name, e.g. `PNG` or `JPEG`.
    pub format: String,
    /// Row-major, `width * height` entries.
    pub pixels: Vec<Rgba<u8>>,
}

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Upper-case tag for a container format.
pub fn format_tag(format: ImageFormat) -> String {
    format!("{format:?}").to_ascii_uppercase()
}

/// Decode in-memory image bytes, sniffing the container from its magic bytes.
pub fn decode_bytes(filename: &str, bytes: &[u8]) -> Result<DecodedImage> {
    let decode_err = |source| AnalysisError::Decode {
        name: filename.to_string(),
        source,
    };

    let format = image::guess_format(bytes).map_err(decode_err)?;
    let img = image::load_from_memory_with_format(bytes, format).map_err(decode_err)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().pixels().copied().collect();

    Ok(DecodedImage {
        filename: filename.to_string(),
        width,
        height,
        format: format_tag(format),
        pixels,
    })
}

pub fn decode_file(path: &Path) -> Result<DecodedImage> {
    let bytes = std::fs::read(path).map_err(|e| AnalysisError::io(path, e))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    decode_bytes(&filename, &bytes)
}

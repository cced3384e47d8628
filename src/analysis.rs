//! Per-image color analysis
//!
//! [`AnalysisEngine`] turns a decoded pixel grid into an [`ImageAnalysis`]:
//! histogram, dominant color, optional reordering, then per-color enrichment
//! (hex, CMYK, frequency, harmonies). The engine holds no state, so one
//! instance can be shared across threads.

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::color::{Cmyk, Harmonies, Rgb, find_harmonies, rgb_to_cmyk, rgb_to_hex};
use crate::decode::DecodedImage;
use crate::histogram::{HistogramEntry, build_histogram};
use crate::sort::{SortCriterion, sort_entries};

/// Everything reported about one distinct visible color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub rgb: Rgb,
    /// Lowercase, no `#` prefix.
    pub hex: String,
    pub cmyk: Cmyk,
    /// Share of all pixels (transparent ones included), in percent, 2 decimals.
    pub frequency: f64,
    pub harmonies: Harmonies,
}

impl ColorRecord {
    pub fn new(rgb: Rgb, frequency: f64) -> Self {
        Self {
            rgb,
            hex: rgb_to_hex(rgb),
            cmyk: rgb_to_cmyk(rgb.r, rgb.g, rgb.b),
            frequency,
            harmonies: find_harmonies(rgb),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
    /// Most frequent visible color, fixed before any reordering.
    pub dominant_color: Option<Rgb>,
    pub sort: SortCriterion,
    pub colors: Vec<ColorRecord>,
}

impl ImageAnalysis {
    pub fn total_frequency(&self) -> f64 {
        self.colors.iter().map(|c| c.frequency).sum()
    }
}

/// Percentage of `count` over `total`, rounded half away from zero to 2 decimals.
///
/// This deliberately departs from reports produced with half-to-even rounding
/// on exact ties: `1 / 32` is 3.125% and gives `3.13` here, not `3.12`.
/// A zero `total` yields `0.0`.
pub fn frequency_percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = count as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a grid of `width * height` RGBA pixels.
    ///
    /// `pixels` must hold exactly `width * height` entries, since frequencies
    /// are taken over the grid area. A longer slice would push the frequency sum
    /// past 100; debug builds assert on the mismatch.
    ///
    /// An empty grid is not an error: it yields no colors and no dominant color.
    pub fn analyze(
        &self,
        filename: impl Into<String>,
        pixels: &[Rgba<u8>],
        width: u32,
        height: u32,
        format: impl Into<String>,
        criterion: SortCriterion,
    ) -> ImageAnalysis {
        let mut analysis = ImageAnalysis {
            filename: filename.into(),
            width,
            height,
            format: format.into(),
            dominant_color: None,
            sort: criterion,
            colors: Vec::new(),
        };

        let total = u64::from(width) * u64::from(height);
        if pixels.is_empty() || total == 0 {
            return analysis;
        }
        debug_assert_eq!(pixels.len() as u64, total, "pixel count must equal width * height");

        let histogram = build_histogram(pixels);
        analysis.dominant_color = histogram.dominant();

        let mut entries = histogram.entries;
        sort_entries(&mut entries, criterion);

        analysis.colors = entries
            .iter()
            .map(|&HistogramEntry { color, count }| {
                ColorRecord::new(color, frequency_percent(count, total))
            })
            .collect();
        analysis
    }

    pub fn analyze_image(&self, image: &DecodedImage, criterion: SortCriterion) -> ImageAnalysis {
        self.analyze(
            image.filename.as_str(),
            &image.pixels,
            image.width,
            image.height,
            image.format.as_str(),
            criterion,
        )
    }
}

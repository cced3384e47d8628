//! Pixel histogram construction
//!
//! Counting happens in two explicit passes:
//! 1. every full RGBA tuple is counted, in first-encountered order;
//! 2. visible tuples (alpha > 0) are merged by RGB, ignoring alpha.
//!
//! The total pixel count (transparent pixels included) is kept alongside
//! the visible entries and is the denominator for frequencies.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use image::Rgba;

use crate::color::Rgb;

/// One distinct visible color and the number of pixels carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramEntry {
    pub color: Rgb,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    /// Visible colors, most frequent first; ties keep first-encountered order.
    pub entries: Vec<HistogramEntry>,
    /// Every pixel in the input, including fully transparent ones.
    pub total: u64,
}

impl Histogram {
    /// Most frequent visible color, if any.
    pub fn dominant(&self) -> Option<Rgb> {
        self.entries.first().map(|e| e.color)
    }

    pub fn visible_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count each full RGBA tuple, preserving first-encountered order.
pub fn count_rgba(pixels: &[Rgba<u8>]) -> Vec<(Rgba<u8>, u64)> {
    let mut index: HashMap<Rgba<u8>, usize> = HashMap::new();
    let mut counts: Vec<(Rgba<u8>, u64)> = Vec::new();

    for &px in pixels {
        match index.entry(px) {
            Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(counts.len());
                counts.push((px, 1));
            }
        }
    }
    counts
}

/// Merge RGBA counts by RGB, dropping fully transparent tuples.
pub fn merge_visible(rgba_counts: &[(Rgba<u8>, u64)]) -> Vec<HistogramEntry> {
    let mut index: HashMap<Rgb, usize> = HashMap::new();
    let mut entries: Vec<HistogramEntry> = Vec::new();

    for &(Rgba([r, g, b, a]), count) in rgba_counts {
        if a == 0 {
            continue;
        }
        let color = Rgb::new(r, g, b);
        match index.entry(color) {
            Entry::Occupied(slot) => entries[*slot.get()].count += count,
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push(HistogramEntry { color, count });
            }
        }
    }
    entries
}

/// Build the frequency-ranked histogram of visible colors.
pub fn build_histogram(pixels: &[Rgba<u8>]) -> Histogram {
    let mut entries = merge_visible(&count_rgba(pixels));
    // stable: equal counts keep stream order
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Histogram {
        entries,
        total: pixels.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
        Rgba([r, g, b, a])
    }

    #[test]
    fn test_single_color() {
        let hist = build_histogram(&[px(255, 0, 0, 255), px(255, 0, 0, 255)]);
        assert_eq!(
            hist.entries,
            vec![HistogramEntry {
                color: Rgb::new(255, 0, 0),
                count: 2
            }]
        );
        assert_eq!(hist.total, 2);
        assert_eq!(hist.dominant(), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_transparent_pixels_count_toward_total_only() {
        let hist = build_histogram(&[px(255, 0, 0, 255), px(0, 0, 0, 0), px(9, 9, 9, 0)]);
        assert_eq!(hist.entries.len(), 1);
        assert_eq!(hist.total, 3);
        assert_eq!(hist.visible_count(), 1);
    }

    #[test]
    fn test_alpha_variants_merge_by_rgb() {
        let pixels = [
            px(10, 20, 30, 255),
            px(10, 20, 30, 128),
            px(10, 20, 30, 1),
            px(10, 20, 30, 0),
            px(1, 1, 1, 255),
        ];
        let rgba = count_rgba(&pixels);
        assert_eq!(rgba.len(), 5);

        let hist = build_histogram(&pixels);
        assert_eq!(hist.entries[0].color, Rgb::new(10, 20, 30));
        assert_eq!(hist.entries[0].count, 3);
        assert_eq!(hist.entries[1].count, 1);
        assert_eq!(hist.total, 5);
    }

    #[test]
    fn test_ordering_by_count_then_first_seen() {
        let pixels = [
            px(3, 3, 3, 255),
            px(1, 1, 1, 255),
            px(2, 2, 2, 255),
            px(2, 2, 2, 255),
            px(1, 1, 1, 255),
            px(4, 4, 4, 255),
            px(2, 2, 2, 255),
        ];
        let colors: Vec<_> = build_histogram(&pixels)
            .entries
            .iter()
            .map(|e| (e.color.r, e.count))
            .collect();
        assert_eq!(colors, vec![(2, 3), (1, 2), (3, 1), (4, 1)]);
    }

    #[test]
    fn test_rgb_first_seen_through_translucent_variant() {
        // (5,5,5) is first seen at alpha 10, before (6,6,6) appears at all.
        let pixels = [px(5, 5, 5, 10), px(6, 6, 6, 255), px(5, 5, 5, 255), px(6, 6, 6, 255)];
        let hist = build_histogram(&pixels);
        assert_eq!(hist.entries[0].color, Rgb::new(5, 5, 5));
        assert_eq!(hist.entries[1].color, Rgb::new(6, 6, 6));
    }

    #[test]
    fn test_empty_input() {
        let hist = build_histogram(&[]);
        assert!(hist.is_empty());
        assert_eq!(hist.total, 0);
        assert_eq!(hist.dominant(), None);
    }
}

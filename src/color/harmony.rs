//! Color harmonies derived by rotating the hue of a base color.
//!
//! Each harmony keeps the base saturation and value. Derived colors are
//! quantized back to 8 bits by truncation, not rounding, so reports stay
//! bit-exact with previously generated output.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::conversion::{Hsv, Rgb, hsv_to_rgb, truncate_to_rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 4] = [
        HarmonyKind::Complementary,
        HarmonyKind::Analogous,
        HarmonyKind::Triadic,
        HarmonyKind::Tetradic,
    ];

    /// Hue offsets in degrees, in output order.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            HarmonyKind::Complementary => &[180.0],
            HarmonyKind::Analogous => &[-30.0, 0.0, 30.0],
            // base is listed second
            HarmonyKind::Triadic => &[120.0, 0.0, 240.0],
            HarmonyKind::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Tetradic => "tetradic",
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four harmony sets of one base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmonies {
    pub complementary: [Rgb; 1],
    pub analogous: [Rgb; 3],
    pub triadic: [Rgb; 3],
    pub tetradic: [Rgb; 4],
}

impl Harmonies {
    pub fn get(&self, kind: HarmonyKind) -> &[Rgb] {
        match kind {
            HarmonyKind::Complementary => &self.complementary,
            HarmonyKind::Analogous => &self.analogous,
            HarmonyKind::Triadic => &self.triadic,
            HarmonyKind::Tetradic => &self.tetradic,
        }
    }

    /// Harmony sets in report order.
    pub fn iter(&self) -> impl Iterator<Item = (HarmonyKind, &[Rgb])> + '_ {
        HarmonyKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Rotated HSV colors for one harmony kind, before quantization.
pub fn harmony_hsv(base: Hsv, kind: HarmonyKind) -> Vec<Hsv> {
    kind.offsets().iter().map(|&deg| base.rotate(deg)).collect()
}

fn derive<const N: usize>(base: Hsv, kind: HarmonyKind) -> [Rgb; N] {
    let offsets = kind.offsets();
    debug_assert_eq!(offsets.len(), N);
    std::array::from_fn(|i| truncate_to_rgb(hsv_to_rgb(base.rotate(offsets[i]))))
}

/// Compute every harmony set for `base`.
pub fn find_harmonies(base: Rgb) -> Harmonies {
    let hsv = base.to_hsv();
    Harmonies {
        complementary: derive(hsv, HarmonyKind::Complementary),
        analogous: derive(hsv, HarmonyKind::Analogous),
        triadic: derive(hsv, HarmonyKind::Triadic),
        tetradic: derive(hsv, HarmonyKind::Tetradic),
    }
}

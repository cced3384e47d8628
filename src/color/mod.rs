//! Color representations, conversions and harmonies

pub mod conversion;
pub mod harmony;

pub use conversion::{
    Cmyk, Hsv, Rgb, hex_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsv, truncate_to_rgb,
};
pub use harmony::{Harmonies, HarmonyKind, find_harmonies, harmony_hsv};

//! Color space conversion utilities
//!
//! Conversions between the representations carried by a color report:
//! - RGB <-> hexadecimal strings
//! - RGB -> CMYK percentages
//! - RGB <-> HSV (hexcone model, hue in degrees)

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// An 8-bit sRGB color. Equality and hashing are exact and channel-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to `[0, 1]` as exactly `c / 255`.
    ///
    /// Harmony truncation relies on this to stay bit-exact.
    pub fn to_unit(self) -> Srgb<f64> {
        let unit = |c: u8| f64::from(c) / 255.0;
        Srgb::new(unit(self.r), unit(self.g), unit(self.b))
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.to_unit())
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(c: Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(c: Rgb) -> Self {
        Srgb::new(c.r, c.g, c.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

/// CMYK ink coverage, each channel an integer percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    pub const BLACK: Cmyk = Cmyk::new(0, 0, 0, 100);

    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.c, self.m, self.y, self.k)
    }
}

/// HSV color: hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Same saturation and value, hue moved by `degrees` (wrapped into `[0, 360)`).
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            hue: (self.hue + degrees).rem_euclid(360.0),
            ..self
        }
    }
}

/// Parse a 6-digit hex color, with or without a leading `#`.
///
/// # Errors
///
/// Returns `AnalysisError::Format` if the string (after the optional `#`)
/// is not exactly six ASCII hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let fail = |reason| AnalysisError::Format {
        input: hex.to_string(),
        reason,
    };

    if digits.len() != 6 {
        return Err(fail("expected 6 hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(fail("non-hex digit"));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| fail("non-hex digit"))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Lowercase 6-digit hex string without a `#` prefix.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert RGB to CMYK percentages.
///
/// Percentages are rounded half away from zero. Pure black (and anything whose
/// key channel reaches 1) maps to `(0, 0, 0, 100)`.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    if r == 0 && g == 0 && b == 0 {
        return Cmyk::BLACK;
    }

    let c = 1.0 - f64::from(r) / 255.0;
    let m = 1.0 - f64::from(g) / 255.0;
    let y = 1.0 - f64::from(b) / 255.0;
    let k = c.min(m).min(y);

    if k == 1.0 {
        return Cmyk::BLACK;
    }

    let percent = |x: f64| (x * 100.0).round().clamp(0.0, 100.0) as u8;
    let scale = 1.0 - k;
    Cmyk::new(
        percent((c - k) / scale),
        percent((m - k) / scale),
        percent((y - k) / scale),
        percent(k),
    )
}

/// Convert normalized RGB to HSV (hexcone model).
pub fn rgb_to_hsv(rgb: Srgb<f64>) -> Hsv {
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return Hsv::new(0.0, 0.0, max);
    }

    let range = max - min;
    let saturation = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let turn = (sector / 6.0).rem_euclid(1.0);

    Hsv::new(turn * 360.0, saturation, max)
}

/// Convert HSV back to normalized RGB (hexcone model).
pub fn hsv_to_rgb(hsv: Hsv) -> Srgb<f64> {
    let Hsv {
        hue,
        saturation: s,
        value: v,
    } = hsv;

    if s == 0.0 {
        return Srgb::new(v, v, v);
    }

    let h6 = hue / 360.0 * 6.0;
    let sector = h6.trunc();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Srgb::new(r, g, b)
}

/// Quantize normalized RGB to 8 bits by truncation (`floor(x * 255)`).
pub fn truncate_to_rgb(rgb: Srgb<f64>) -> Rgb {
    let channel = |x: f64| (x * 255.0) as u8;
    Rgb::new(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

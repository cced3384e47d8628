//! End-to-end tests: encoded image bytes in, analysis and report out.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use image_palette_report::color::{hex_to_rgb, rgb_to_cmyk, rgb_to_hex};
use image_palette_report::report::render_text;
use image_palette_report::{AnalysisEngine, Cmyk, Rgb, SortCriterion, analyze_bytes};
use std::io::Cursor;

fn encode(img: RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

/// 4x4 image: 8 blue, 4 yellow, 2 red, 1 grey, 1 transparent pixel.
fn sample_png() -> Vec<u8> {
    let mut img = RgbaImage::new(4, 4);
    for (i, px) in img.pixels_mut().enumerate() {
        *px = match i {
            0..=7 => Rgba([0, 0, 255, 255]),
            8..=11 => Rgba([255, 255, 0, 255]),
            12 | 13 => Rgba([255, 0, 0, 200]),
            14 => Rgba([128, 128, 128, 255]),
            _ => Rgba([0, 0, 0, 0]),
        };
    }
    encode(img, ImageFormat::Png)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_sample_png_frequency_order() {
    let analysis = analyze_bytes("sample.png", &sample_png(), SortCriterion::Frequency).unwrap();

    assert_eq!(analysis.format, "PNG");
    assert_eq!((analysis.width, analysis.height), (4, 4));
    assert_eq!(analysis.dominant_color, Some(Rgb::new(0, 0, 255)));

    let summary: Vec<(Rgb, f64)> = analysis.colors.iter().map(|c| (c.rgb, c.frequency)).collect();
    assert_eq!(
        summary,
        vec![
            (Rgb::new(0, 0, 255), 50.0),
            (Rgb::new(255, 255, 0), 25.0),
            (Rgb::new(255, 0, 0), 12.5),
            (Rgb::new(128, 128, 128), 6.25),
        ]
    );
    // one of sixteen pixels is transparent
    assert!((analysis.total_frequency() - 93.75).abs() < 1e-9);
}

#[test]
fn test_dominant_color_stable_across_criteria() {
    let bytes = sample_png();
    for criterion in SortCriterion::ALL {
        let analysis = analyze_bytes("sample.png", &bytes, criterion).unwrap();
        assert_eq!(analysis.dominant_color, Some(Rgb::new(0, 0, 255)), "{criterion}");
        assert_eq!(analysis.colors.len(), 4);
        assert_eq!(analysis.sort, criterion);
    }
}

#[test]
fn test_hue_order_is_non_decreasing() {
    let analysis = analyze_bytes("sample.png", &sample_png(), SortCriterion::Hue).unwrap();
    let hues: Vec<f64> = analysis.colors.iter().map(|c| c.rgb.to_hsv().hue).collect();
    assert!(hues.windows(2).all(|w| w[0] <= w[1]), "{hues:?}");
}

#[test]
fn test_brightness_puts_grey_last() {
    let analysis = analyze_bytes("sample.png", &sample_png(), SortCriterion::Brightness).unwrap();
    assert_eq!(analysis.colors.last().unwrap().rgb, Rgb::new(128, 128, 128));
}

#[test]
fn test_opaque_image_frequencies_sum_to_hundred() {
    let mut img = RgbaImage::new(3, 3);
    for (i, px) in img.pixels_mut().enumerate() {
        *px = Rgba([(i * 25) as u8, 10, 200, 255]);
    }
    let png = encode(img, ImageFormat::Png);
    let analysis = analyze_bytes("nine.png", &png, SortCriterion::Frequency).unwrap();
    assert_eq!(analysis.colors.len(), 9);
    assert!((analysis.total_frequency() - 100.0).abs() <= 0.01 * 9.0);
}

#[test]
fn test_engine_on_raw_pixels() {
    let engine = AnalysisEngine::new();
    let red = Rgba([255, 0, 0, 255]);

    let full = engine.analyze("a", &[red, red], 2, 1, "PNG", SortCriterion::Frequency);
    assert_eq!(full.colors.len(), 1);
    assert_eq!(full.colors[0].frequency, 100.0);

    let clear = Rgba([0, 0, 0, 0]);
    let half = engine.analyze("b", &[red, clear], 2, 1, "PNG", SortCriterion::Frequency);
    assert_eq!(half.colors.len(), 1);
    assert_eq!(half.colors[0].frequency, 50.0);
    assert_eq!(half.colors[0].harmonies.complementary, [Rgb::new(0, 255, 255)]);
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn test_hex_round_trip_over_channel_grid() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(51) {
            for b in [0u8, 1, 127, 254, 255] {
                let rgb = Rgb::new(r, g, b);
                assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
            }
        }
    }
}

#[test]
fn test_cmyk_black_and_white() {
    assert_eq!(rgb_to_cmyk(0, 0, 0), Cmyk::new(0, 0, 0, 100));
    assert_eq!(rgb_to_cmyk(255, 255, 255), Cmyk::new(0, 0, 0, 0));
}

#[test]
fn test_rendered_report_lists_every_color() {
    let analysis = analyze_bytes("sample.png", &sample_png(), SortCriterion::Saturation).unwrap();
    let text = render_text(&analysis);
    assert!(text.contains("Colors (sorted by saturation):"));
    assert_eq!(text.matches("    Harmonies:").count(), 4);
    assert!(text.contains("HEX: #0000ff"));
    assert!(text.contains("Frequency: 6.25%"));
}

//! Report rendering and writing

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::analysis::ImageAnalysis;
use crate::color::{Rgb, rgb_to_hex};
use crate::config::ReportFormat;
use crate::{AnalysisError, Result};

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn rgb_list(colors: &[Rgb]) -> String {
    let items: Vec<String> = colors.iter().map(Rgb::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Human-readable report, colors in the analysis' output order.
pub fn render_text(analysis: &ImageAnalysis) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "Image Analysis for {}", analysis.filename);
    let _ = writeln!(out, "Dimensions: {}x{}", analysis.width, analysis.height);
    let _ = writeln!(out, "Format: {}", analysis.format);
    match analysis.dominant_color {
        Some(rgb) => {
            let _ = writeln!(out, "Dominant Color: RGB: {rgb}, HEX: #{}", rgb_to_hex(rgb));
        }
        None => {
            let _ = writeln!(out, "Dominant Color: none");
        }
    }
    let _ = writeln!(out, "\nColors (sorted by {}):", analysis.sort);

    for color in &analysis.colors {
        let _ = writeln!(
            out,
            "  RGB: {}, HEX: #{}, CMYK: {}, Frequency: {:.2}%",
            color.rgb, color.hex, color.cmyk, color.frequency
        );
        let _ = writeln!(out, "    Harmonies:");
        for (kind, colors) in color.harmonies.iter() {
            let _ = writeln!(out, "      {}: {}", capitalize(kind.name()), rgb_list(colors));
        }
    }
    out
}

pub fn render_json(analysis: &ImageAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

pub fn render(analysis: &ImageAnalysis, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(analysis)),
        ReportFormat::Json => render_json(analysis),
    }
}

/// `<dir>/<filename>_analysis.<ext>`
pub fn report_path(dir: &Path, analysis: &ImageAnalysis, format: ReportFormat) -> PathBuf {
    dir.join(format!("{}_analysis.{}", analysis.filename, format.extension()))
}

/// Write the report into `dir`, creating it if needed. Returns the file written.
pub fn write_report(dir: &Path, analysis: &ImageAnalysis, format: ReportFormat) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| AnalysisError::io(dir, e))?;
    let path = report_path(dir, analysis, format);
    let body = render(analysis, format)?;
    std::fs::write(&path, body).map_err(|e| AnalysisError::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisEngine;
    use crate::sort::SortCriterion;
    use image::Rgba;

    fn red_half() -> ImageAnalysis {
        AnalysisEngine::new().analyze(
            "half.png",
            &[Rgba([255, 0, 0, 255]), Rgba([0, 0, 0, 0])],
            2,
            1,
            "PNG",
            SortCriterion::Frequency,
        )
    }

    #[test]
    fn test_text_report_layout() {
        let text = render_text(&red_half());
        let expected = "\
Image Analysis for half.png
Dimensions: 2x1
Format: PNG
Dominant Color: RGB: (255, 0, 0), HEX: #ff0000

Colors (sorted by frequency):
  RGB: (255, 0, 0), HEX: #ff0000, CMYK: (0, 100, 100, 0), Frequency: 50.00%
    Harmonies:
      Complementary: [(0, 255, 255)]
      Analogous: [(255, 0, 127), (255, 0, 0), (255, 127, 0)]
      Triadic: [(0, 255, 0), (255, 0, 0), (0, 0, 255)]
      Tetradic: [(255, 0, 0), (127, 255, 0), (0, 255, 255), (127, 0, 255)]
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_report_without_colors() {
        let empty = AnalysisEngine::new().analyze("e.png", &[], 0, 0, "PNG", SortCriterion::Hue);
        let text = render_text(&empty);
        assert!(text.contains("Dominant Color: none"));
        assert!(text.ends_with("Colors (sorted by hue):\n"));
    }

    #[test]
    fn test_json_report_fields() {
        let json = render_json(&red_half()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["filename"], "half.png");
        assert_eq!(value["sort"], "frequency");
        assert_eq!(value["colors"][0]["hex"], "ff0000");
        assert_eq!(value["colors"][0]["frequency"], 50.0);
        assert_eq!(value["colors"][0]["harmonies"]["tetradic"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_write_report_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("nested").join("reports");
        let path = write_report(&out, &red_half(), ReportFormat::Text).unwrap();
        assert_eq!(path, out.join("half.png_analysis.txt"));
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.starts_with("Image Analysis for half.png\n"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("triadic"), "Triadic");
        assert_eq!(capitalize(""), "");
    }
}

//! Error types for the image_palette_report library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for image_palette_report operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised while parsing colors, decoding images, or writing reports.
///
/// The color-analysis core is total over its inputs; only hex parsing and the
/// collaborators around the core (decoding, configuration, report files) fail.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Malformed hex color string
    #[error("Invalid hex color {input:?}: {reason}")]
    Format { input: String, reason: &'static str },

    /// Image bytes could not be decoded
    #[error("Failed to decode image {name}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    /// File system access failed
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed or written
    #[error("Invalid configuration file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Analysis could not be serialized to JSON
    #[error("Failed to serialize analysis")]
    Serialize(#[from] serde_json::Error),

    /// Worker pool for batch processing could not be created
    #[error("Failed to configure thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Unknown sort criterion {0:?} (expected frequency, hue, saturation or brightness)")]
    InvalidSortCriterion(String),

    #[error("Unknown report format {0:?} (expected text or json)")]
    InvalidReportFormat(String),
}

impl AnalysisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether a batch run can skip the affected file and carry on.
    ///
    /// Only failures tied to reading or decoding a single source image qualify.
    pub fn is_skippable(&self) -> bool {
        matches!(self, AnalysisError::Decode { .. } | AnalysisError::Io { .. })
    }
}

//! Batch driver: analyze one image or a directory of images and write reports.
//!
//! Images are independent, so a directory is processed in parallel with rayon.
//! Progress and failures are reported through an injected [`BatchObserver`];
//! [`LogObserver`] forwards them to the `log` facade.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::analysis::{AnalysisEngine, ImageAnalysis};
use crate::config::AnalyzerConfig;
use crate::decode::{decode_file, is_supported};
use crate::report::write_report;
use crate::{AnalysisError, Result};

/// Callbacks for batch progress. All methods default to doing nothing.
pub trait BatchObserver: Sync {
    fn on_start(&self, _total: usize) {}
    fn on_analyzed(&self, _path: &Path, _analysis: &ImageAnalysis) {}
    fn on_saved(&self, _path: &Path, _report: &Path) {}
    fn on_skipped(&self, _path: &Path, _error: &AnalysisError) {}
    fn on_finish(&self, _summary: &BatchSummary) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl BatchObserver for SilentObserver {}

/// Observer that logs every event.
#[derive(Debug, Default)]
pub struct LogObserver {
    done: AtomicUsize,
    total: AtomicUsize,
}

impl BatchObserver for LogObserver {
    fn on_start(&self, total: usize) {
        self.total.store(total, Ordering::SeqCst);
        info!("Processing {total} image(s)");
    }

    fn on_analyzed(&self, path: &Path, analysis: &ImageAnalysis) {
        debug!(
            "Analyzed {}: {}x{} {}, {} distinct color(s)",
            path.display(),
            analysis.width,
            analysis.height,
            analysis.format,
            analysis.colors.len()
        );
    }

    fn on_saved(&self, path: &Path, report: &Path) {
        let done = self.done.fetch_add(1, Ordering::SeqCst) + 1;
        let total = self.total.load(Ordering::SeqCst);
        info!("[{done}/{total}] {} -> {}", path.display(), report.display());
    }

    fn on_skipped(&self, path: &Path, error: &AnalysisError) {
        self.done.fetch_add(1, Ordering::SeqCst);
        match std::error::Error::source(error) {
            Some(cause) => warn!("Skipping {}: {error}: {cause}", path.display()),
            None => warn!("Skipping {}: {error}", path.display()),
        }
    }

    fn on_finish(&self, summary: &BatchSummary) {
        info!(
            "Finished: {} analyzed, {} skipped",
            summary.analyzed,
            summary.skipped.len()
        );
    }
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub analyzed: usize,
    /// Files that could not be read or decoded
    pub skipped: Vec<PathBuf>,
    /// Reports written, in input order
    pub reports: Vec<PathBuf>,
}

/// Every supported image under `root`, sorted by path.
pub fn collect_images(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|e| AnalysisError::io(&dir, e))?;
        for entry in entries {
            let path = entry.map_err(|e| AnalysisError::io(&dir, e))?.path();
            if path.is_dir() {
                if recursive {
                    pending.push(path);
                }
            } else if is_supported(&path) {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

enum Outcome {
    Saved(PathBuf),
    Skipped,
}

fn process_one<O: BatchObserver>(
    path: &Path,
    output: &Path,
    config: &AnalyzerConfig,
    engine: &AnalysisEngine,
    observer: &O,
) -> Result<Outcome> {
    let image = match decode_file(path) {
        Ok(image) => image,
        Err(e) if e.is_skippable() => {
            observer.on_skipped(path, &e);
            return Ok(Outcome::Skipped);
        }
        Err(e) => return Err(e),
    };

    let analysis = engine.analyze_image(&image, config.sort);
    observer.on_analyzed(path, &analysis);

    let report = write_report(output, &analysis, config.report_format)?;
    observer.on_saved(path, &report);
    Ok(Outcome::Saved(report))
}

fn process_all<O: BatchObserver>(
    inputs: &[PathBuf],
    output: &Path,
    config: &AnalyzerConfig,
    observer: &O,
) -> Result<BatchSummary> {
    let engine = AnalysisEngine::new();

    let outcomes: Vec<Result<Outcome>> = inputs
        .par_iter()
        .map(|path| process_one(path, output, config, &engine, observer))
        .collect();

    let mut summary = BatchSummary::default();
    for (path, outcome) in inputs.iter().zip(outcomes) {
        match outcome? {
            Outcome::Saved(report) => {
                summary.analyzed += 1;
                summary.reports.push(report);
            }
            Outcome::Skipped => summary.skipped.push(path.clone()),
        }
    }
    Ok(summary)
}

/// Analyze `input` (a file or a directory) and write reports into `output`.
///
/// Unreadable or undecodable images are skipped; failing to write a report
/// aborts the run.
pub fn run<O: BatchObserver>(
    input: &Path,
    output: &Path,
    config: &AnalyzerConfig,
    observer: &O,
) -> Result<BatchSummary> {
    let inputs = if input.is_file() {
        vec![input.to_path_buf()]
    } else if input.is_dir() {
        collect_images(input, config.recursive)?
    } else {
        let missing = std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "input is neither a file nor a directory",
        );
        return Err(AnalysisError::io(input, missing));
    };

    observer.on_start(inputs.len());

    let summary = match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(|| process_all(&inputs, output, config, observer))?
        }
        None => process_all(&inputs, output, config, observer)?,
    };

    observer.on_finish(&summary);
    Ok(summary)
}

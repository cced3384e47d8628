use anyhow::{Context, Result};
use clap::Parser;
use image_palette_report::batch::{self, LogObserver};
use image_palette_report::{AnalyzerConfig, ReportFormat, SortCriterion};
use std::path::PathBuf;

/// Write a color palette report for an image or a directory of images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image file or directory of images
    input: PathBuf,

    /// Directory that receives the reports
    output: PathBuf,

    /// Color ordering: frequency, hue, saturation or brightness
    #[arg(short, long)]
    sort: Option<SortCriterion>,

    /// Report format: text or json
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Only look at the top level of an input directory
    #[arg(long)]
    no_recursive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(sort) = args.sort {
        config.sort = sort;
    }
    if let Some(format) = args.format {
        config.report_format = format;
    }
    if args.threads.is_some() {
        config.threads = args.threads;
    }
    if args.no_recursive {
        config.recursive = false;
    }

    let summary = batch::run(&args.input, &args.output, &config, &LogObserver::default())
        .with_context(|| format!("processing {}", args.input.display()))?;

    println!(
        "Saved {} report(s) to {} ({} skipped)",
        summary.reports.len(),
        args.output.display(),
        summary.skipped.len()
    );
    for path in &summary.skipped {
        println!("  skipped {}", path.display());
    }

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use tsmo::batch::{collect_image_paths, run_batch};
use tsmo::report::{render_text, BatchReport, ThresholdConfig};
use tsmo::{MultilevelThresholder, ThresholdParams};

#[derive(Parser, Debug)]
#[command(name = "tsmo")]
#[command(version, about = "Automatic multilevel thresholds for grayscale images", long_about = None)]
struct Cli {
    /// Image files or directories
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// JSON config with inputs, params and output path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of coarse histogram bins (M)
    #[arg(short = 'm', long, value_name = "M")]
    bins: Option<usize>,

    /// Number of intensity levels (L)
    #[arg(short = 'l', long, value_name = "L")]
    levels: Option<usize>,

    /// Descend into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Write a JSON report to this path
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

#[cfg(feature = "tracing")]
fn init_logging(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    tsmo::core::init_tracing(false, level);
    Ok(())
}

#[cfg(not(feature = "tracing"))]
fn init_logging(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.min(LevelFilter::Warn));
    for target in tsmo::core::LOG_TARGETS {
        builder.filter_module(target, level);
    }
    builder.parse_default_env().try_init()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    let config = match &cli.config {
        Some(path) => ThresholdConfig::load_json(path)?,
        None => ThresholdConfig::default(),
    };

    let base = config.params();
    let params = ThresholdParams {
        bins: cli.bins.unwrap_or(base.bins),
        levels: cli.levels.unwrap_or(base.levels),
    };
    let thresholder = MultilevelThresholder::new(params)?;

    let mut inputs = config.input_paths();
    inputs.extend(cli.inputs.iter().cloned());
    if inputs.is_empty() {
        return Err("no inputs given (pass files/directories or --config)".into());
    }

    let paths = collect_image_paths(&inputs, cli.recursive || config.recursive)?;
    if paths.is_empty() {
        return Err("no supported image files found".into());
    }

    let reports = run_batch(&paths, &thresholder);
    print!("{}", render_text(&reports));

    let output = cli
        .json
        .clone()
        .or_else(|| config.output_path.as_ref().map(PathBuf::from));
    let report = BatchReport::new(params, reports);
    if let Some(path) = output {
        report.write_json(&path)?;
        log::info!("wrote {}", path.display());
    }
    if report.failures() > 0 {
        log::warn!("{} of {} images failed", report.failures(), report.images.len());
    }

    Ok(())
}

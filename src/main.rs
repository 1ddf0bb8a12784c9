use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod batch;
mod bbox;
mod classifier;
mod classifiers;
mod config;
mod cropping;
mod error;
mod mask;
mod output;

use cropping::Method;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bbox-crop")]
#[command(about = "Crop images to the bounding box of their foreground content")]
#[command(version)]
pub struct Args {
    /// Folder containing the JPEG/PNG images to crop
    #[arg(env = "BBOX_CROP_INPUT", default_value = "images")]
    pub input_dir: PathBuf,

    /// Folder for cropped images (default: <INPUT_DIR>/cropped)
    #[arg(short, long, env = "BBOX_CROP_OUTPUT")]
    pub output_dir: Option<PathBuf>,

    /// How foreground is told apart from background
    #[arg(short, long, value_enum, env = "BBOX_CROP_METHOD", default_value_t = Method::DarkTol)]
    pub method: Method,

    /// Intensity a pixel must exceed to count as foreground (default depends on method)
    #[arg(short, long, env = "BBOX_CROP_THRESHOLD")]
    pub threshold: Option<u8>,

    /// Rows dropped from the bottom of landscape images before analysis
    #[arg(long, env = "BBOX_CROP_TRIM_LANDSCAPE")]
    pub trim_landscape: Option<u32>,

    /// Rows dropped from the bottom of portrait images before analysis
    #[arg(long, env = "BBOX_CROP_TRIM_PORTRAIT")]
    pub trim_portrait: Option<u32>,

    /// Text placed before the input file stem in output names
    #[arg(long, env = "BBOX_CROP_PREFIX", default_value = "")]
    pub prefix: String,

    /// Text placed after the input file stem in output names
    #[arg(long, env = "BBOX_CROP_SUFFIX", default_value = "_cropped")]
    pub suffix: String,

    /// Output encoding
    #[arg(short, long, value_enum, env = "BBOX_CROP_FORMAT", default_value_t = OutputFormat::Keep)]
    pub format: OutputFormat,

    /// JPEG quality (1-100)
    #[arg(short, long, env = "BBOX_CROP_QUALITY", default_value = "90",
          value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Write images even when cropping would not shrink them
    #[arg(long)]
    pub force: bool,

    /// Write a JSON summary of the run to this path
    #[arg(long, env = "BBOX_CROP_REPORT")]
    pub report: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing; stdout is reserved for status lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from(args);

    tracing::info!("Starting bbox-crop v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Cropping {:?} into {:?} with method {}",
        config.input_dir,
        config.output_dir,
        config.method.as_str()
    );

    if let Err(e) = batch::run(&config) {
        tracing::error!(fatal = e.is_fatal(), "Run aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}

//! Directory batch driver
//!
//! Crops every image in the input folder independently. Only a missing input
//! folder or an uncreatable output folder stop the run; every per-image
//! failure is reported and the batch moves on.

use crate::bbox::BoundingBox;
use crate::config::Config;
use crate::cropping::{Outcome, Pipeline, StepTiming};
use crate::error::CropError;
use crate::output;
use image::{DynamicImage, ImageError, ImageReader};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// File extensions picked up from the input folder (case-insensitive)
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Cropped,
    Unchanged,
    Empty,
    Failed,
}

/// Per-file entry of the run summary
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub status: FileStatus,
    pub original: Option<(u32, u32)>,
    pub cropped: Option<(u32, u32)>,
    pub bbox: Option<BoundingBox>,
    /// Set only when an image was actually written
    pub output: Option<PathBuf>,
    pub reason: Option<String>,
    pub steps: Vec<StepTiming>,
}

impl FileReport {
    fn new(file: String) -> Self {
        Self {
            file,
            status: FileStatus::Failed,
            original: None,
            cropped: None,
            bbox: None,
            output: None,
            reason: None,
            steps: Vec::new(),
        }
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub method: String,
    pub written: usize,
    pub unchanged: usize,
    pub empty: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    fn record(&mut self, file: FileReport) {
        if file.output.is_some() {
            self.written += 1;
        }
        match file.status {
            FileStatus::Cropped => {}
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Empty => self.empty += 1,
            FileStatus::Failed => self.failed += 1,
        }
        self.files.push(file);
    }
}

/// Crop every image in the configured input folder
pub fn run(config: &Config) -> Result<BatchReport, CropError> {
    if !config.input_dir.is_dir() {
        return Err(CropError::InputDirMissing(config.input_dir.clone()));
    }

    let pipeline = config.pipeline();
    let mut report = BatchReport {
        method: pipeline.method().as_str().to_string(),
        ..Default::default()
    };

    let inputs = list_images(&config.input_dir)?;
    if inputs.is_empty() {
        println!("No image files found in '{}'.", config.input_dir.display());
        write_report(config, &report)?;
        return Ok(report);
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| CropError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    tracing::info!(
        "Processing {} images with {} ({})",
        inputs.len(),
        pipeline.classifier().name(),
        pipeline.classifier().description()
    );

    // Output path -> input file that wrote it
    let mut written: HashMap<PathBuf, String> = HashMap::new();

    for input in &inputs {
        let file = process_file(&pipeline, config, input, &mut written);
        report.record(file);
        println!();
    }

    println!(
        "Done: {} written, {} unchanged, {} without foreground, {} failed.",
        report.written, report.unchanged, report.empty, report.failed
    );

    write_report(config, &report)?;
    Ok(report)
}

/// Regular files in `dir` with a recognized image extension, sorted by name
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, CropError> {
    let mut images = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_image(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|known| e.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

fn process_file(
    pipeline: &Pipeline,
    config: &Config,
    input: &Path,
    written: &mut HashMap<PathBuf, String>,
) -> FileReport {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut report = FileReport::new(name.clone());

    println!("Processing {}:", name);

    let result = decode(input).and_then(|image| pipeline.process(image));
    let result = match result {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Skipping {:?}: {}", input, e);
            println!("Error processing {}: {}", name, e);
            report.reason = Some(e.to_string());
            return report;
        }
    };

    let (width, height) = result.original;
    report.original = Some(result.original);
    report.steps = result.steps;
    println!("Original size: {}x{} pixels", width, height);
    tracing::debug!("{} took {}ms", name, result.total_time_ms);

    let (image, bbox) = match result.outcome {
        Outcome::Empty => {
            println!("No object found to crop.");
            report.status = FileStatus::Empty;
            report.reason = Some("no foreground found".to_string());
            return report;
        }
        Outcome::Unchanged { image, bbox } => {
            report.status = FileStatus::Unchanged;
            report.bbox = Some(bbox);
            report.cropped = Some((image.width(), image.height()));
            if !config.force {
                println!("Image was not cropped (same size as original).");
                report.reason = Some("crop is a no-op".to_string());
                return report;
            }
            (image, bbox)
        }
        Outcome::Cropped { image, bbox } => {
            report.status = FileStatus::Cropped;
            report.bbox = Some(bbox);
            report.cropped = Some((image.width(), image.height()));
            (image, bbox)
        }
    };

    println!("Cropped size: {}x{} pixels", image.width(), image.height());
    tracing::debug!("{} cropped to {}", name, bbox);

    let output_path = config.naming.output_path(input, &config.output_dir);
    if let Some(earlier) = written.get(&output_path) {
        let reason = format!(
            "output name {} collides with {}",
            output_path.display(),
            earlier
        );
        tracing::warn!("Skipping {:?}: {}", input, reason);
        println!("Error: {}", reason);
        report.status = FileStatus::Failed;
        report.reason = Some(reason);
        return report;
    }

    match output::save(&image, &output_path, config.quality) {
        Ok(()) => {
            println!("Saved cropped image to {}", output_path.display());
            written.insert(output_path.clone(), name);
            report.output = Some(output_path);
        }
        Err(e) => {
            tracing::warn!("Skipping {:?}: {}", input, e);
            println!("Error: {}", e);
            report.status = FileStatus::Failed;
            report.reason = Some(e.to_string());
        }
    }

    report
}

fn decode(path: &Path) -> Result<DynamicImage, CropError> {
    let decode_error = |source: ImageError| CropError::Decode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)
}

fn write_report(config: &Config, report: &BatchReport) -> Result<(), CropError> {
    let Some(path) = &config.report else {
        return Ok(());
    };

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, report).map_err(std::io::Error::from)?;
    tracing::info!("Wrote run report to {:?}", path);
    Ok(())
}

use crate::bbox::{find_bbox, BoundingBox};
use crate::classifier::ForegroundClassifier;
use crate::classifiers;
use crate::error::CropError;
use image::{DynamicImage, GenericImageView};
use serde::Serialize;
use std::time::Instant;

use super::steps;
use super::steps::pretrim::Margins;

/// Crop method names
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Any colour channel above the threshold (default threshold 50)
    #[default]
    DarkTol,
    /// Grayscale intensity above the threshold (default threshold 0)
    Grayscale,
    /// Bounding rectangle of the largest outer contour (default threshold 10)
    Contour,
    /// Drop a fixed bottom band by orientation, then trim empty borders
    Fixed,
    /// Grayscale crop that also blacks out everything above the object outline
    Silhouette,
}

impl Method {
    /// Get the method name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DarkTol => "dark-tol",
            Self::Grayscale => "grayscale",
            Self::Contour => "contour",
            Self::Fixed => "fixed",
            Self::Silhouette => "silhouette",
        }
    }

    /// Threshold used when none is configured
    pub fn default_threshold(&self) -> u8 {
        match self {
            Self::DarkTol => 50,
            Self::Contour => 10,
            Self::Grayscale | Self::Fixed | Self::Silhouette => 0,
        }
    }

    /// Bottom margins applied when none are configured
    pub fn default_margins(&self) -> Option<Margins> {
        match self {
            Self::Fixed => Some(Margins::RIG),
            _ => None,
        }
    }
}

/// Timing information for a single cropping step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// What became of one image
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Foreground found and the result is smaller than the original
    Cropped { image: DynamicImage, bbox: BoundingBox },
    /// Foreground fills the original extent; cropping changed nothing
    Unchanged { image: DynamicImage, bbox: BoundingBox },
    /// No foreground pixel anywhere
    Empty,
}

/// Result of cropping including timing stats
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub outcome: Outcome,
    /// Dimensions of the input before any step ran
    pub original: (u32, u32),
    /// Total pipeline time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Cropping pipeline that applies steps based on method
pub struct Pipeline {
    method: Method,
    threshold: u8,
    margins: Option<Margins>,
    classifier: Box<dyn ForegroundClassifier>,
}

impl Pipeline {
    pub fn new(method: Method, threshold: u8, margins: Option<Margins>) -> Self {
        Self {
            method,
            threshold,
            margins: margins.filter(|m| !m.is_zero()),
            classifier: classifiers::for_method(method, threshold),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn classifier(&self) -> &dyn ForegroundClassifier {
        self.classifier.as_ref()
    }

    /// Crop an image according to the configured method
    pub fn process(&self, image: DynamicImage) -> Result<PipelineResult, CropError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();
        let original = image.dimensions();

        let mut img = image;

        if let Some(margins) = self.margins {
            img = self.run_step("pretrim", img, &mut steps_timing, |i| {
                steps::pretrim::apply(i, margins)
            })?;
        }

        let classify_start = Instant::now();
        let mask = self.classifier.classify(&img);
        let bbox = find_bbox(&mask);
        steps_timing.push(StepTiming {
            name: self.classifier.name().to_string(),
            time_ms: classify_start.elapsed().as_millis() as u64,
        });

        let Some(bbox) = bbox else {
            tracing::debug!("No foreground under {}", self.classifier.name());
            return Ok(Self::finish(Outcome::Empty, original, start, steps_timing));
        };
        tracing::debug!(
            "Bounding box {} around {} foreground pixels",
            bbox,
            mask.count()
        );

        img = self.run_step("crop", img, &mut steps_timing, |i| {
            steps::crop::apply(&i, bbox)
        })?;

        if self.method == Method::Silhouette {
            let threshold = self.threshold;
            img = self.run_step("silhouette", img, &mut steps_timing, |i| {
                steps::silhouette::apply(i, threshold)
            })?;
        }

        let outcome = if img.dimensions() == original {
            tracing::debug!("Foreground spans the whole {}x{} image", original.0, original.1);
            Outcome::Unchanged { image: img, bbox }
        } else {
            Outcome::Cropped { image: img, bbox }
        };

        Ok(Self::finish(outcome, original, start, steps_timing))
    }

    fn finish(
        outcome: Outcome,
        original: (u32, u32),
        start: Instant,
        steps: Vec<StepTiming>,
    ) -> PipelineResult {
        PipelineResult {
            outcome,
            original,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps,
        }
    }

    fn run_step<F>(
        &self,
        name: &str,
        img: DynamicImage,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<DynamicImage, CropError>
    where
        F: FnOnce(DynamicImage) -> Result<DynamicImage, CropError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms: step_start.elapsed().as_millis() as u64,
        });
        Ok(result)
    }
}

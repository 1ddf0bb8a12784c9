use crate::mask::Mask;
use image::DynamicImage;

/// Trait that all foreground discrimination rules implement
pub trait ForegroundClassifier: Send + Sync {
    /// Returns the classifier identifier (e.g., "threshold", "contour")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the rule
    fn description(&self) -> &'static str;

    /// Classify every pixel of `image`. Never fails; an all-background
    /// image yields an empty mask.
    fn classify(&self, image: &DynamicImage) -> Mask;
}

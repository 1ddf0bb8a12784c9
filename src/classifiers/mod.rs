//! Foreground classifier implementations
//!
//! This module contains implementations of the ForegroundClassifier trait for
//! the discrimination rules a crop method can select.

pub mod alpha;
pub mod column;
pub mod contour;
pub mod threshold;

use crate::classifier::ForegroundClassifier;
use crate::cropping::Method;

use alpha::AlphaClassifier;
use contour::ContourClassifier;
use threshold::{Channels, ThresholdClassifier};

/// Build the bounding-box classifier a crop method uses
pub fn for_method(method: Method, threshold: u8) -> Box<dyn ForegroundClassifier> {
    match method {
        Method::DarkTol => Box::new(ThresholdClassifier::new(threshold, Channels::Any)),
        Method::Grayscale | Method::Silhouette => {
            Box::new(ThresholdClassifier::new(threshold, Channels::Luma))
        }
        Method::Contour => Box::new(ContourClassifier::new(threshold)),
        Method::Fixed => Box::new(AlphaClassifier::new(threshold)),
    }
}

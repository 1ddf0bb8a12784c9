//! Column-first-nonzero (upper silhouette) classifier
//!
//! For each column, everything from the first foreground row downwards is
//! foreground. This shapes a mask that hides whatever lies above the
//! object's upper outline.

use super::threshold::luma_mask;
use crate::classifier::ForegroundClassifier;
use crate::mask::Mask;
use image::DynamicImage;

pub struct ColumnClassifier {
    threshold: u8,
}

impl ColumnClassifier {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl ForegroundClassifier for ColumnClassifier {
    fn name(&self) -> &'static str {
        "column-first-nonzero"
    }

    fn description(&self) -> &'static str {
        "Each column from its first pixel above the threshold to the bottom"
    }

    fn classify(&self, image: &DynamicImage) -> Mask {
        silhouette(&luma_mask(image, self.threshold))
    }
}

/// Extend every column of `mask` from its first foreground row to the bottom
pub fn silhouette(mask: &Mask) -> Mask {
    let (width, height) = mask.dimensions();
    let tops: Vec<Option<u32>> = (0..width).map(|x| mask.first_in_column(x)).collect();

    Mask::from_fn(width, height, |x, y| match tops[x as usize] {
        Some(top) => y >= top,
        None => false,
    })
}

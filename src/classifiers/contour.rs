//! Largest outer contour classifier
//!
//! Binarizes on luma, traces the outer borders of every connected region and
//! keeps only the region whose border encloses the largest area. The returned
//! mask marks that border's pixels, so its bounding box is the bounding
//! rectangle of the dominant object. Smaller specks elsewhere are ignored.

use crate::classifier::ForegroundClassifier;
use crate::mask::Mask;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::point::Point;

pub struct ContourClassifier {
    threshold: u8,
}

impl ContourClassifier {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl ForegroundClassifier for ContourClassifier {
    fn name(&self) -> &'static str {
        "contour"
    }

    fn description(&self) -> &'static str {
        "Border of the largest outer contour after luma thresholding"
    }

    fn classify(&self, image: &DynamicImage) -> Mask {
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();
        let t = self.threshold;

        let binary = GrayImage::from_fn(width, height, |x, y| {
            if gray.get_pixel(x, y).0[0] > t {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });

        let contours = find_contours::<i32>(&binary);
        let mut mask = Mask::new(width, height);

        if let Some(largest) = largest_outer(&contours) {
            for p in &largest.points {
                mask.set(p.x as u32, p.y as u32, true);
            }
        }

        mask
    }
}

/// Outermost contour with the largest enclosed area; first one wins ties
fn largest_outer(contours: &[Contour<i32>]) -> Option<&Contour<i32>> {
    let mut best: Option<(&Contour<i32>, f64)> = None;

    for contour in contours
        .iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
    {
        let area = polygon_area(&contour.points);
        match best {
            Some((_, best_area)) if best_area >= area => {}
            _ => best = Some((contour, area)),
        }
    }

    best.map(|(contour, _)| contour)
}

/// Shoelace area of a closed polygon
fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let twice: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
        .sum();

    twice.abs() as f64 / 2.0
}

//! Intensity threshold classifier
//!
//! A pixel is foreground when its intensity strictly exceeds the threshold.
//! Intensity is either the brightest colour channel or the luma value.

use crate::classifier::ForegroundClassifier;
use crate::mask::Mask;
use image::DynamicImage;

/// Which sample of a pixel is compared against the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Foreground if any of R, G, B exceeds the threshold
    Any,
    /// Foreground if the grayscale value exceeds the threshold
    Luma,
}

pub struct ThresholdClassifier {
    threshold: u8,
    channels: Channels,
}

impl ThresholdClassifier {
    pub fn new(threshold: u8, channels: Channels) -> Self {
        Self {
            threshold,
            channels,
        }
    }
}

impl ForegroundClassifier for ThresholdClassifier {
    fn name(&self) -> &'static str {
        match self.channels {
            Channels::Any => "threshold",
            Channels::Luma => "luma-threshold",
        }
    }

    fn description(&self) -> &'static str {
        match self.channels {
            Channels::Any => "Any colour channel above the threshold",
            Channels::Luma => "Grayscale intensity above the threshold",
        }
    }

    fn classify(&self, image: &DynamicImage) -> Mask {
        let t = self.threshold;
        match self.channels {
            Channels::Any => {
                let rgb = image.to_rgb8();
                Mask::from_fn(rgb.width(), rgb.height(), |x, y| {
                    rgb.get_pixel(x, y).0.iter().any(|&c| c > t)
                })
            }
            Channels::Luma => luma_mask(image, t),
        }
    }
}

/// Mask of pixels whose luma exceeds `threshold`
pub(crate) fn luma_mask(image: &DynamicImage, threshold: u8) -> Mask {
    let gray = image.to_luma8();
    Mask::from_fn(gray.width(), gray.height(), |x, y| {
        gray.get_pixel(x, y).0[0] > threshold
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_any_channel_above_threshold() {
        let mut img = RgbImage::new(4, 4);
        img.put_pixel(1, 1, Rgb([0, 0, 51])); // only blue exceeds 50
        img.put_pixel(2, 2, Rgb([50, 50, 50])); // equal is background

        let mask = ThresholdClassifier::new(50, Channels::Any).classify(&DynamicImage::ImageRgb8(img));
        assert!(mask.get(1, 1));
        assert!(!mask.get(2, 2));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_any_channel_on_grayscale_input() {
        let mut img = GrayImage::new(3, 3);
        img.put_pixel(0, 2, Luma([200]));

        let mask = ThresholdClassifier::new(50, Channels::Any).classify(&DynamicImage::ImageLuma8(img));
        assert!(mask.get(0, 2));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_any_channel_ignores_alpha() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255])); // opaque black
        img.put_pixel(3, 3, Rgba([90, 0, 0, 0])); // transparent red

        let mask = ThresholdClassifier::new(50, Channels::Any).classify(&DynamicImage::ImageRgba8(img));
        assert!(!mask.get(0, 0));
        assert!(mask.get(3, 3));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_luma_zero_threshold_picks_any_nonblack() {
        let mut img = GrayImage::new(5, 5);
        img.put_pixel(4, 0, Luma([1]));

        let mask = ThresholdClassifier::new(0, Channels::Luma).classify(&DynamicImage::ImageLuma8(img));
        assert!(mask.get(4, 0));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_all_background_gives_empty_mask() {
        let img = RgbImage::from_pixel(10, 10, Rgb([10, 10, 10]));
        let mask = ThresholdClassifier::new(10, Channels::Any).classify(&DynamicImage::ImageRgb8(img));
        assert_eq!(mask.count(), 0);
        assert_eq!(mask.dimensions(), (10, 10));
    }
}

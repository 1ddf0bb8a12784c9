use crate::classifier::ForegroundClassifier;
use crate::mask::Mask;
use image::DynamicImage;

/// Non-transparent (or, for opaque formats, non-black) content
///
/// Images with an alpha channel are classified on alpha alone. Images without
/// one are classified on every colour band, so a JPEG keeps any pixel that is
/// not pure background.
pub struct AlphaClassifier {
    threshold: u8,
}

impl AlphaClassifier {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl ForegroundClassifier for AlphaClassifier {
    fn name(&self) -> &'static str {
        "alpha"
    }

    fn description(&self) -> &'static str {
        "Alpha above the threshold, or any band above it for opaque images"
    }

    fn classify(&self, image: &DynamicImage) -> Mask {
        let t = self.threshold;
        if image.color().has_alpha() {
            let rgba = image.to_rgba8();
            Mask::from_fn(rgba.width(), rgba.height(), |x, y| {
                rgba.get_pixel(x, y).0[3] > t
            })
        } else {
            let rgb = image.to_rgb8();
            Mask::from_fn(rgb.width(), rgb.height(), |x, y| {
                rgb.get_pixel(x, y).0.iter().any(|&c| c > t)
            })
        }
    }
}

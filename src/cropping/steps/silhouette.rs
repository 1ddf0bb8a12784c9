use crate::classifier::ForegroundClassifier;
use crate::classifiers::column::ColumnClassifier;
use crate::error::CropError;
use crate::mask::Mask;
use image::{DynamicImage, ImageBuffer, Pixel, Primitive};

/// Black out everything above the object's upper outline
/// Pixels below each column's first foreground row keep their value
pub fn apply(image: DynamicImage, threshold: u8) -> Result<DynamicImage, CropError> {
    let mask = ColumnClassifier::new(threshold).classify(&image);
    let mut image = image;

    macro_rules! zero_variants {
        ($($variant:ident),*) => {
            match &mut image {
                $(DynamicImage::$variant(buf) => {
                    zero_outside(buf, &mask);
                    true
                })*
                _ => false,
            }
        };
    }

    let handled = zero_variants!(
        ImageLuma8,
        ImageLumaA8,
        ImageRgb8,
        ImageRgba8,
        ImageLuma16,
        ImageLumaA16,
        ImageRgb16,
        ImageRgba16,
        ImageRgb32F,
        ImageRgba32F
    );

    if !handled {
        let mut rgba = image.to_rgba8();
        zero_outside(&mut rgba, &mask);
        image = DynamicImage::ImageRgba8(rgba);
    }

    Ok(image)
}

fn zero_outside<P: Pixel>(buf: &mut ImageBuffer<P, Vec<P::Subpixel>>, mask: &Mask) {
    for (x, y, pixel) in buf.enumerate_pixels_mut() {
        if !mask.get(x, y) {
            pixel.apply(|_| <P::Subpixel as Primitive>::DEFAULT_MIN_VALUE);
        }
    }
}

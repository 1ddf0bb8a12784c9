use crate::bbox::BoundingBox;
use crate::error::CropError;
use image::{DynamicImage, GenericImageView};

/// Copy the pixels inside `bbox` into a new image
/// No resampling: output[i, j] = image[y0 + i, x0 + j]
pub fn apply(image: &DynamicImage, bbox: BoundingBox) -> Result<DynamicImage, CropError> {
    let (width, height) = image.dimensions();
    if !bbox.fits_within(width, height) {
        return Err(CropError::OutOfBounds {
            bbox,
            width,
            height,
        });
    }

    Ok(image.crop_imm(bbox.x0, bbox.y0, bbox.width(), bbox.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_crop_copies_exact_pixels() {
        let img = RgbImage::from_fn(20, 10, |x, y| Rgb([x as u8, y as u8, 7]));
        let bbox = BoundingBox::new(3, 2, 9, 8);

        let result = apply(&DynamicImage::ImageRgb8(img), bbox).unwrap().to_rgb8();
        assert_eq!(result.dimensions(), (6, 6));
        for (j, i, pixel) in result.enumerate_pixels() {
            assert_eq!(pixel.0, [3 + j as u8, 2 + i as u8, 7]);
        }
    }

    #[test]
    fn test_full_extent_is_identity() {
        let img = RgbImage::from_fn(5, 4, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 0]));
        let original = DynamicImage::ImageRgb8(img);

        let result = apply(&original, BoundingBox::new(0, 0, 5, 4)).unwrap();
        assert_eq!(result.to_rgb8().as_raw(), original.to_rgb8().as_raw());
    }

    #[test]
    fn test_out_of_bounds_box_is_rejected() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        let result = apply(&img, BoundingBox::new(5, 5, 11, 8));
        assert!(matches!(result, Err(CropError::OutOfBounds { .. })));
    }
}

//! Bounding box of foreground content

use serde::Serialize;
use std::fmt;

use crate::mask::Mask;

/// Half-open rectangle `[x0, x1) x [y0, y1)` in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// True when the box is non-degenerate and fits in a `width` x `height` grid
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x0 < self.x1 && self.y0 < self.y1 && self.x1 <= width && self.y1 <= height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Minimal box covering every foreground cell, or `None` for an empty mask
pub fn find_bbox(mask: &Mask) -> Option<BoundingBox> {
    let (rows, cols) = mask.projections();

    let y0 = rows.iter().position(|&r| r)?;
    let y1 = rows.iter().rposition(|&r| r)? + 1;
    let x0 = cols.iter().position(|&c| c)?;
    let x1 = cols.iter().rposition(|&c| c)? + 1;

    Some(BoundingBox::new(x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Min/max over the coordinates of all foreground cells
    fn brute_force_bbox(mask: &Mask) -> Option<BoundingBox> {
        let (width, height) = mask.dimensions();
        let mut found: Option<BoundingBox> = None;
        for y in 0..height {
            for x in 0..width {
                if !mask.get(x, y) {
                    continue;
                }
                found = Some(match found {
                    None => BoundingBox::new(x, y, x + 1, y + 1),
                    Some(b) => BoundingBox::new(
                        b.x0.min(x),
                        b.y0.min(y),
                        b.x1.max(x + 1),
                        b.y1.max(y + 1),
                    ),
                });
            }
        }
        found
    }

    #[test]
    fn test_block_at_offset() {
        let mask = Mask::from_fn(100, 100, |x, y| (10..40).contains(&x) && (15..45).contains(&y));
        let bbox = find_bbox(&mask).unwrap();
        assert_eq!(bbox, BoundingBox::new(10, 15, 40, 45));
        assert_eq!((bbox.width(), bbox.height()), (30, 30));
    }

    #[test]
    fn test_empty_mask_has_no_bbox() {
        let mask = Mask::new(50, 50);
        assert_eq!(find_bbox(&mask), None);
    }

    #[test]
    fn test_single_pixel_has_unit_box() {
        let mut mask = Mask::new(8, 8);
        mask.set(7, 0, true);
        assert_eq!(find_bbox(&mask), Some(BoundingBox::new(7, 0, 8, 1)));
    }

    #[test]
    fn test_matches_coordinate_min_max() {
        let patterns: Vec<Mask> = vec![
            Mask::from_fn(13, 9, |x, y| (x * 7 + y * 3) % 11 == 0),
            Mask::from_fn(13, 9, |x, y| x == y),
            Mask::from_fn(13, 9, |x, y| x > 10 && y < 2),
            Mask::from_fn(13, 9, |x, _| x == 4),
        ];

        for mask in patterns {
            assert_eq!(find_bbox(&mask), brute_force_bbox(&mask));
        }
    }

    #[test]
    fn test_box_edges_touch_foreground() {
        let mask = Mask::from_fn(20, 20, |x, y| (x == 3 && y == 5) || (x == 12 && y == 17));
        let bbox = find_bbox(&mask).unwrap();

        let row_has = |y: u32| (bbox.x0..bbox.x1).any(|x| mask.get(x, y));
        let col_has = |x: u32| (bbox.y0..bbox.y1).any(|y| mask.get(x, y));
        assert!(row_has(bbox.y0) && row_has(bbox.y1 - 1));
        assert!(col_has(bbox.x0) && col_has(bbox.x1 - 1));
    }

    #[test]
    fn test_fit_checks() {
        let bbox = BoundingBox::new(0, 0, 10, 5);
        assert!(bbox.fits_within(10, 5));
        assert!(!bbox.fits_within(9, 5));
        assert!(!BoundingBox::new(3, 3, 3, 4).fits_within(10, 10));
    }
}

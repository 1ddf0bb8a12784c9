//! Boolean foreground mask over an image grid

/// Row-major boolean grid, `true` where a pixel is foreground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Mask {
    /// All-background mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every cell
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Number of foreground cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Per-row and per-column "any foreground" reductions in one pass
    pub fn projections(&self) -> (Vec<bool>, Vec<bool>) {
        let mut rows = vec![false; self.height as usize];
        let mut cols = vec![false; self.width as usize];

        if self.width == 0 {
            return (rows, cols);
        }

        for (y, row) in self.cells.chunks(self.width as usize).enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell {
                    rows[y] = true;
                    cols[x] = true;
                }
            }
        }

        (rows, cols)
    }

    /// First foreground row in column `x`, if any
    pub fn first_in_column(&self, x: u32) -> Option<u32> {
        (0..self.height).find(|&y| self.get(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mask_is_empty() {
        let mask = Mask::new(4, 3);
        assert_eq!(mask.count(), 0);
        assert_eq!(mask.dimensions(), (4, 3));
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let mask = Mask::from_fn(3, 2, |x, y| x == 2 && y == 1);
        assert!(mask.get(2, 1));
        assert!(!mask.get(1, 1));
        assert!(!mask.get(2, 0));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_projections_mark_occupied_rows_and_columns() {
        let mut mask = Mask::new(5, 4);
        mask.set(1, 2, true);
        mask.set(3, 0, true);

        let (rows, cols) = mask.projections();
        assert_eq!(rows, vec![true, false, true, false]);
        assert_eq!(cols, vec![false, true, false, true, false]);
    }

    #[test]
    fn test_first_in_column() {
        let mut mask = Mask::new(2, 5);
        mask.set(0, 3, true);
        mask.set(0, 4, true);
        assert_eq!(mask.first_in_column(0), Some(3));
        assert_eq!(mask.first_in_column(1), None);
    }

    #[test]
    fn test_zero_width_projections() {
        let mask = Mask::new(0, 3);
        let (rows, cols) = mask.projections();
        assert_eq!(rows, vec![false; 3]);
        assert!(cols.is_empty());
    }
}

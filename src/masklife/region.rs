//! The centered square window that is actually simulated.

use crate::screen::{HEIGHT, WIDTH};

/// A centered `R` x `R` window of the grid. Cells outside it are never
/// evaluated or written by a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveRegion<const R: usize> {
    x0: usize,
    y0: usize,
}

impl<const R: usize> ActiveRegion<R> {
    pub const SIDE: usize = {
        assert!(R > 0, "active region must not be empty");
        assert!(R <= HEIGHT && R <= WIDTH, "active region must fit the grid");
        R
    };

    pub const fn centered() -> Self {
        Self {
            x0: (WIDTH - Self::SIDE) / 2,
            y0: (HEIGHT - Self::SIDE) / 2,
        }
    }

    /// Top-left grid coordinate.
    #[inline]
    pub const fn origin(&self) -> (usize, usize) {
        (self.x0, self.y0)
    }

    #[inline]
    pub const fn side(&self) -> usize {
        R
    }

    /// Grid coordinate of the region's center cell.
    #[inline]
    pub const fn center(&self) -> (usize, usize) {
        (self.x0 + R / 2, self.y0 + R / 2)
    }

    #[inline]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x < self.x0 + R && y >= self.y0 && y < self.y0 + R
    }

    /// Region-local to grid coordinates.
    #[inline(always)]
    pub const fn to_grid(&self, lx: usize, ly: usize) -> (usize, usize) {
        (self.x0 + lx, self.y0 + ly)
    }

    /// Grid to region-local coordinates, `None` outside the region.
    #[inline]
    pub const fn to_local(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        if self.contains(x, y) {
            Some((x - self.x0, y - self.y0))
        } else {
            None
        }
    }

    /// Every grid coordinate in the region, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<R> {
        let (x0, y0) = (self.x0, self.y0);
        (y0..y0 + R).flat_map(move |y| (x0..x0 + R).map(move |x| (x, y)))
    }
}

impl<const R: usize> Default for ActiveRegion<R> {
    fn default() -> Self {
        Self::centered()
    }
}

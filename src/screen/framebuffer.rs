//! Bit-level pixel access over a display surface.

use super::layout::{pixel_address, row_offset};
use super::surface::Surface;
use super::{HEIGHT, ROW_BYTES, SCREEN_SIZE, ScreenBytes, WIDTH};

/// The live bitmap: one cell per pixel, alive = ink bit set.
///
/// Out-of-range coordinates are not an error: `set` ignores them and `get`
/// reports a dead cell. Neighbor lookups rely on this at the grid edges.
#[derive(Clone, Debug)]
pub struct FrameBuffer<S: Surface> {
    surface: S,
}

impl FrameBuffer<ScreenBytes> {
    /// A zeroed RAM-backed buffer.
    pub const fn blank() -> Self {
        Self {
            surface: [0; SCREEN_SIZE],
        }
    }

    /// Raw bytes in display-memory order.
    #[inline]
    pub fn as_bytes(&self) -> &ScreenBytes {
        &self.surface
    }
}

impl<S: Surface> FrameBuffer<S> {
    pub const fn new(surface: S) -> Self {
        Self { surface }
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        let addr = pixel_address(x, y);
        self.surface.read(addr.offset) & addr.mask != 0
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let addr = pixel_address(x, y);
        let byte = self.surface.read(addr.offset);
        let next = if alive {
            byte | addr.mask
        } else {
            byte & !addr.mask
        };
        self.surface.write(addr.offset, next);
    }

    /// Clear every pixel.
    pub fn clear(&mut self) {
        self.surface.fill_zero();
    }

    /// The bytes of raster line `y`, left to right. Out-of-range lines read
    /// as blank.
    pub fn row(&self, y: usize) -> [u8; ROW_BYTES] {
        let mut out = [0u8; ROW_BYTES];
        if y < HEIGHT {
            let base = row_offset(y);
            for (column, byte) in out.iter_mut().enumerate() {
                *byte = self.surface.read(base + column);
            }
        }
        out
    }

    /// Copy the whole bitmap into `dst`.
    #[inline]
    pub fn copy_to(&self, dst: &mut ScreenBytes) {
        self.surface.copy_to(dst);
    }

    /// Number of live cells in the whole grid.
    pub fn population(&self) -> u32 {
        (0..SCREEN_SIZE)
            .map(|offset| self.surface.read(offset).count_ones())
            .sum()
    }

    /// Number of live cells in the `side` x `side` window at `(x0, y0)`.
    pub fn population_in(&self, x0: usize, y0: usize, side: usize) -> u32 {
        let mut total = 0;
        // Cells past the grid read dead, so stop at its edge.
        for y in y0..y0.saturating_add(side).min(HEIGHT) {
            for x in x0..x0.saturating_add(side).min(WIDTH) {
                total += self.get(x, y) as u32;
            }
        }
        total
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl Default for FrameBuffer<ScreenBytes> {
    fn default() -> Self {
        Self::blank()
    }
}

//! Frozen copy of the bitmap as of tick start.

use crate::screen::{FrameBuffer, ScreenBytes, Surface};

/// Moore neighborhood offsets.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Generation N, read while generation N+1 is written into the live buffer.
///
/// Same size and layout as the display bitmap. Overwritten in full by
/// `capture`; never written mid-tick.
#[derive(Clone, Debug)]
pub struct Snapshot {
    frame: FrameBuffer<ScreenBytes>,
}

impl Snapshot {
    pub const fn new() -> Self {
        Self {
            frame: FrameBuffer::blank(),
        }
    }

    /// Overwrite the snapshot with the current content of `live`.
    #[inline]
    pub fn capture<S: Surface>(&mut self, live: &FrameBuffer<S>) {
        live.copy_to(self.frame.surface_mut());
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.frame.get(x, y)
    }

    /// Live cells among the 8 neighbors of `(x, y)`. Coordinates off the
    /// grid (including ones that wrap below zero) count as dead.
    #[inline(always)]
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0u8;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            count += self
                .frame
                .get(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy)) as u8;
        }
        count
    }

    #[inline]
    pub fn as_bytes(&self) -> &ScreenBytes {
        self.frame.as_bytes()
    }

    #[inline]
    pub fn frame(&self) -> &FrameBuffer<ScreenBytes> {
        &self.frame
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

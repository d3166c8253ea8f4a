//! Per-tick dirty mask over the active region.
//!
//! A cell can only change in a tick if it is alive (it may die) or if it is
//! dead with three live neighbors (it may be born), and the latter means one
//! of its neighbors is alive. Flagging the Moore neighborhood of every live
//! cell therefore covers every possible change; unflagged cells keep their
//! state and are skipped entirely.
//!
//! Cells just outside the region still count as neighbors of its edge, so
//! live cells on that one-cell ring flag their in-region neighbors too. Only
//! region cells are ever flagged.

use super::region::ActiveRegion;
use super::rules::next_state;
use super::snapshot::Snapshot;

/// Flag grid in region-local coordinates.
#[derive(Clone, Debug)]
pub struct DirtyMask<const R: usize> {
    flags: [[bool; R]; R],
    flagged: usize,
}

impl<const R: usize> DirtyMask<R> {
    pub const fn new() -> Self {
        Self {
            flags: [[false; R]; R],
            flagged: 0,
        }
    }

    pub fn clear(&mut self) {
        for row in self.flags.iter_mut() {
            row.fill(false);
        }
        self.flagged = 0;
    }

    /// Clear, then flag every live cell of `snapshot` in or next to the
    /// region together with its neighbors inside the region.
    pub fn rebuild(&mut self, snapshot: &Snapshot, region: &ActiveRegion<R>) {
        self.clear();
        for ly in 0..R {
            for lx in 0..R {
                let (x, y) = region.to_grid(lx, ly);
                if snapshot.get(x, y) {
                    self.flag_neighborhood(lx as isize, ly as isize);
                }
            }
        }

        let (x0, y0) = region.origin();
        let edge = R as isize;
        for i in -1..=edge {
            for (lx, ly) in [(i, -1), (i, edge), (-1, i), (edge, i)] {
                // Off-grid ring cells wrap to huge coordinates and read dead.
                let (x, y) = (x0.wrapping_add_signed(lx), y0.wrapping_add_signed(ly));
                if snapshot.get(x, y) {
                    self.flag_neighborhood(lx, ly);
                }
            }
        }
    }

    /// Flag the cells of the 3x3 block around local `(lx, ly)` that lie in
    /// the region. `(lx, ly)` itself may sit on the ring outside it.
    fn flag_neighborhood(&mut self, lx: isize, ly: isize) {
        let last = R as isize - 1;
        let (x_lo, x_hi) = ((lx - 1).max(0), (lx + 1).min(last));
        let (y_lo, y_hi) = ((ly - 1).max(0), (ly + 1).min(last));
        for ny in y_lo..=y_hi {
            for nx in x_lo..=x_hi {
                let flag = &mut self.flags[ny as usize][nx as usize];
                if !*flag {
                    *flag = true;
                    self.flagged += 1;
                }
            }
        }
    }

    #[inline(always)]
    pub fn is_flagged(&self, lx: usize, ly: usize) -> bool {
        lx < R && ly < R && self.flags[ly][lx]
    }

    /// Number of flagged cells.
    #[inline]
    pub fn flagged(&self) -> usize {
        self.flagged
    }

    /// Flagged cells in region-local coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.flags.iter().enumerate().flat_map(|(ly, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &flag)| flag)
                .map(move |(lx, _)| (lx, ly))
        })
    }

    /// Check that every region cell left unflagged would keep its state
    /// when the rule is applied to `snapshot`.
    pub fn covers(&self, snapshot: &Snapshot, region: &ActiveRegion<R>) -> bool {
        for ly in 0..R {
            for lx in 0..R {
                if self.flags[ly][lx] {
                    continue;
                }
                let (x, y) = region.to_grid(lx, ly);
                let alive = snapshot.get(x, y);
                if next_state(alive, snapshot.live_neighbors(x, y)) != alive {
                    return false;
                }
            }
        }
        true
    }
}

impl<const R: usize> Default for DirtyMask<R> {
    fn default() -> Self {
        Self::new()
    }
}

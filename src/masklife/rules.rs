//! B3/S23 transition and the two evaluation passes (masked, full region).

use super::mask::DirtyMask;
use super::region::ActiveRegion;
use super::snapshot::Snapshot;
use crate::screen::{FrameBuffer, Surface};

/// Next state of a cell under B3/S23.
#[inline(always)]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// What one evaluation pass did to the live buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Cells the rule was applied to (each one written exactly once).
    pub evaluated: usize,
    pub births: usize,
    pub deaths: usize,
    pub survivors: usize,
}

impl CellCounts {
    /// Live cells among the evaluated ones after the pass.
    #[inline]
    pub fn alive(&self) -> usize {
        self.births + self.survivors
    }
}

/// Apply the rule to one cell: read from the snapshot, write the result
/// into `live` unconditionally.
#[inline(always)]
fn apply_cell<S: Surface>(
    snapshot: &Snapshot,
    live: &mut FrameBuffer<S>,
    x: usize,
    y: usize,
    counts: &mut CellCounts,
) {
    let alive = snapshot.get(x, y);
    let next = next_state(alive, snapshot.live_neighbors(x, y));
    live.set(x, y, next);
    counts.evaluated += 1;
    match (alive, next) {
        (true, true) => counts.survivors += 1,
        (true, false) => counts.deaths += 1,
        (false, true) => counts.births += 1,
        (false, false) => {}
    }
}

/// Evaluate only the cells flagged in `mask`.
pub fn evaluate_masked<S: Surface, const R: usize>(
    snapshot: &Snapshot,
    mask: &DirtyMask<R>,
    region: &ActiveRegion<R>,
    live: &mut FrameBuffer<S>,
) -> CellCounts {
    let mut counts = CellCounts::default();
    for ly in 0..R {
        for lx in 0..R {
            if !mask.is_flagged(lx, ly) {
                continue;
            }
            let (x, y) = region.to_grid(lx, ly);
            apply_cell(snapshot, live, x, y, &mut counts);
        }
    }
    counts
}

/// Evaluate every cell of the region.
pub fn evaluate_region<S: Surface, const R: usize>(
    snapshot: &Snapshot,
    region: &ActiveRegion<R>,
    live: &mut FrameBuffer<S>,
) -> CellCounts {
    let mut counts = CellCounts::default();
    for (x, y) in region.cells() {
        apply_cell(snapshot, live, x, y, &mut counts);
    }
    counts
}

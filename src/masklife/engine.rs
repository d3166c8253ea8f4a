//! MaskLife engine: snapshot, rebuild mask, evaluate flagged cells.

use super::mask::DirtyMask;
use super::region::ActiveRegion;
use super::rules::{CellCounts, evaluate_masked};
use super::snapshot::Snapshot;
use crate::control::StopCondition;
use crate::screen::{FrameBuffer, Surface};

/// Counters for one completed tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Generation number reached by this tick (first tick = 1).
    pub generation: u64,
    /// Cells flagged by the mask (or evaluated, for a full scan).
    pub flagged: usize,
    pub births: usize,
    pub deaths: usize,
    pub survivors: usize,
}

impl TickReport {
    pub(crate) fn from_counts(generation: u64, counts: CellCounts) -> Self {
        Self {
            generation,
            flagged: counts.evaluated,
            births: counts.births,
            deaths: counts.deaths,
            survivors: counts.survivors,
        }
    }

    /// Live cells in the region after the tick.
    #[inline]
    pub fn population(&self) -> usize {
        self.births + self.survivors
    }

    /// Whether any cell changed state.
    #[inline]
    pub fn changed(&self) -> bool {
        self.births + self.deaths > 0
    }
}

/// Masked Life engine over an `R` x `R` centered region.
///
/// Owns its working buffers (snapshot and mask) inline; they are sized once
/// here and overwritten every tick. The live buffer is borrowed per call.
#[derive(Clone, Debug)]
pub struct MaskLife<const R: usize> {
    region: ActiveRegion<R>,
    snapshot: Snapshot,
    mask: DirtyMask<R>,
    generation: u64,
}

impl<const R: usize> Default for MaskLife<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize> MaskLife<R> {
    pub const fn new() -> Self {
        Self {
            region: ActiveRegion::centered(),
            snapshot: Snapshot::new(),
            mask: DirtyMask::new(),
            generation: 0,
        }
    }

    /// Advance `live` by one generation.
    pub fn tick<S: Surface>(&mut self, live: &mut FrameBuffer<S>) -> TickReport {
        self.snapshot.capture(live);
        self.mask.rebuild(&self.snapshot, &self.region);
        let counts = evaluate_masked(&self.snapshot, &self.mask, &self.region, live);
        debug_assert_eq!(counts.evaluated, self.mask.flagged());
        self.generation += 1;
        TickReport::from_counts(self.generation, counts)
    }

    /// Tick until `stop` says otherwise. Returns the number of ticks run.
    pub fn run<S: Surface, C: StopCondition>(
        &mut self,
        live: &mut FrameBuffer<S>,
        mut stop: C,
    ) -> u64 {
        let mut ticks = 0u64;
        while !stop.should_stop(ticks) {
            self.tick(live);
            ticks += 1;
        }
        ticks
    }

    /// Like `run`, handing every tick's report to `observe`.
    pub fn run_observed<S, C, F>(
        &mut self,
        live: &mut FrameBuffer<S>,
        mut stop: C,
        mut observe: F,
    ) -> u64
    where
        S: Surface,
        C: StopCondition,
        F: FnMut(&TickReport),
    {
        let mut ticks = 0u64;
        while !stop.should_stop(ticks) {
            let report = self.tick(live);
            observe(&report);
            ticks += 1;
        }
        ticks
    }

    /// The production loop. Never returns.
    pub fn run_forever<S: Surface>(&mut self, live: &mut FrameBuffer<S>) -> ! {
        loop {
            self.tick(live);
        }
    }

    /// Number of ticks applied so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn region(&self) -> &ActiveRegion<R> {
        &self.region
    }

    /// The snapshot taken by the last tick.
    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The mask built by the last tick.
    #[inline]
    pub fn mask(&self) -> &DirtyMask<R> {
        &self.mask
    }
}

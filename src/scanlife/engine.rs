//! ScanLife engine core.

use crate::control::StopCondition;
use crate::masklife::{ActiveRegion, Snapshot, TickReport, evaluate_region};
use crate::screen::{FrameBuffer, Surface};

#[derive(Clone, Debug)]
pub struct ScanLife<const R: usize> {
    region: ActiveRegion<R>,
    snapshot: Snapshot,
    generation: u64,
}

impl<const R: usize> Default for ScanLife<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize> ScanLife<R> {
    pub const fn new() -> Self {
        Self {
            region: ActiveRegion::centered(),
            snapshot: Snapshot::new(),
            generation: 0,
        }
    }

    pub fn tick<S: Surface>(&mut self, live: &mut FrameBuffer<S>) -> TickReport {
        self.snapshot.capture(live);
        let counts = evaluate_region(&self.snapshot, &self.region, live);
        self.generation += 1;
        TickReport::from_counts(self.generation, counts)
    }

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

    pub fn run_forever<S: Surface>(&mut self, live: &mut FrameBuffer<S>) -> ! {
        loop {
            self.tick(live);
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn region(&self) -> &ActiveRegion<R> {
        &self.region
    }

    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

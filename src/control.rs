//! Stop conditions for the tick loop.
//!
//! The production loop never stops; harnesses pass a budget or a flag. The
//! condition is polled once before every tick, never mid-tick.

use core::sync::atomic::{AtomicBool, Ordering};

pub trait StopCondition {
    /// Called with the number of ticks completed so far in this run.
    fn should_stop(&mut self, ticks: u64) -> bool;
}

/// Never stop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Forever;

impl StopCondition for Forever {
    #[inline(always)]
    fn should_stop(&mut self, _ticks: u64) -> bool {
        false
    }
}

/// Stop after exactly `n` ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickBudget(pub u64);

impl StopCondition for TickBudget {
    #[inline]
    fn should_stop(&mut self, ticks: u64) -> bool {
        ticks >= self.0
    }
}

/// Stop once the flag is raised, e.g. from an interrupt handler.
#[derive(Clone, Copy, Debug)]
pub struct CancelFlag<'a>(pub &'a AtomicBool);

impl StopCondition for CancelFlag<'_> {
    #[inline]
    fn should_stop(&mut self, _ticks: u64) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Stop when the closure returns true.
#[derive(Clone, Copy, Debug)]
pub struct StopWhen<F>(pub F);

impl<F: FnMut(u64) -> bool> StopCondition for StopWhen<F> {
    #[inline]
    fn should_stop(&mut self, ticks: u64) -> bool {
        (self.0)(ticks)
    }
}

impl<C: StopCondition + ?Sized> StopCondition for &mut C {
    #[inline]
    fn should_stop(&mut self, ticks: u64) -> bool {
        (**self).should_stop(ticks)
    }
}

//! MaskLife: the dirty-mask Life engine.
//!
//! Each tick runs three phases against the live bitmap:
//! snapshot capture, mask rebuild, masked evaluation. Cells outside the
//! active region, and region cells outside the mask, are neither read from
//! nor written to the live buffer.

mod engine;
mod mask;
mod region;
pub(crate) mod rules;
mod snapshot;

pub use engine::{MaskLife, TickReport};
pub use mask::DirtyMask;
pub use region::ActiveRegion;
pub use rules::{CellCounts, evaluate_masked, evaluate_region, next_state};
pub use snapshot::Snapshot;

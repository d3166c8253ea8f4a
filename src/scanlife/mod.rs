//! ScanLife: the unmasked Life engine.
//!
//! Snapshots the bitmap and applies the rule to every cell of the active
//! region each tick. Slower than `MaskLife`, and the reference it is checked
//! against.

mod engine;

pub use engine::ScanLife;

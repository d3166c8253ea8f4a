//! Conway's Game of Life (B3/S23) running in place on a ZX-Spectrum-layout
//! 1bpp display bitmap.
//!
//! No heap and no OS: the engines own fixed-size working buffers and borrow
//! the live bitmap per tick through a `Surface`.

#![cfg_attr(not(test), no_std)]

pub mod control;
pub mod masklife;
pub mod scanlife;
pub mod screen;
pub mod seed;

pub use control::{CancelFlag, Forever, StopCondition, StopWhen, TickBudget};
pub use masklife::{ActiveRegion, DirtyMask, MaskLife, Snapshot, TickReport};
pub use scanlife::ScanLife;
pub use screen::{FrameBuffer, MappedSurface, Surface};
pub use seed::SeedPattern;

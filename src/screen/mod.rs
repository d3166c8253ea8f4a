//! ZX-Spectrum-style 1bpp display memory.
//!
//! The bitmap is 256x192 pixels, one bit per pixel, MSB-first within each
//! byte. Raster lines are not stored linearly: the line number is split into
//! third / character row / pixel line bit-fields (see `layout`).

pub mod framebuffer;
pub mod layout;
pub mod surface;

pub use framebuffer::FrameBuffer;
pub use layout::{PixelAddress, pixel_address, pixel_at, row_offset};
pub use surface::{MappedSurface, Surface};

/// Grid width in pixels.
pub const WIDTH: usize = 256;
/// Grid height in pixels.
pub const HEIGHT: usize = 192;
/// Bytes per raster line.
pub const ROW_BYTES: usize = WIDTH / 8;
/// Size of the bitmap area in bytes.
pub const SCREEN_SIZE: usize = ROW_BYTES * HEIGHT;
/// Address of the bitmap on the reference hardware.
pub const SCREEN_BASE: usize = 0x4000;

/// A RAM-backed bitmap, used for snapshots and for running off-hardware.
pub type ScreenBytes = [u8; SCREEN_SIZE];

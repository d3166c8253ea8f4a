//! Byte stores a `FrameBuffer` can sit on.
//!
//! Off-hardware the bitmap is an ordinary `[u8; SCREEN_SIZE]`. On the target
//! it is memory the video circuitry scans continuously, so every access goes
//! through `read_volatile`/`write_volatile` and is never merged or elided.

use core::ptr::NonNull;

use super::{SCREEN_BASE, SCREEN_SIZE, ScreenBytes};

/// A fixed-size, byte-addressed bitmap store of exactly `SCREEN_SIZE` bytes.
///
/// Offsets passed in are always `< SCREEN_SIZE`; implementations may assume it.
pub trait Surface {
    fn read(&self, offset: usize) -> u8;

    fn write(&mut self, offset: usize, value: u8);

    /// Copy the whole store into `dst`.
    fn copy_to(&self, dst: &mut ScreenBytes) {
        for (offset, byte) in dst.iter_mut().enumerate() {
            *byte = self.read(offset);
        }
    }

    /// Set every byte to zero.
    fn fill_zero(&mut self) {
        for offset in 0..SCREEN_SIZE {
            self.write(offset, 0);
        }
    }
}

impl Surface for ScreenBytes {
    #[inline(always)]
    fn read(&self, offset: usize) -> u8 {
        self[offset]
    }

    #[inline(always)]
    fn write(&mut self, offset: usize, value: u8) {
        self[offset] = value;
    }

    #[inline]
    fn copy_to(&self, dst: &mut ScreenBytes) {
        dst.copy_from_slice(self);
    }

    #[inline]
    fn fill_zero(&mut self) {
        self.fill(0);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline(always)]
    fn read(&self, offset: usize) -> u8 {
        (**self).read(offset)
    }

    #[inline(always)]
    fn write(&mut self, offset: usize, value: u8) {
        (**self).write(offset, value);
    }

    #[inline]
    fn copy_to(&self, dst: &mut ScreenBytes) {
        (**self).copy_to(dst);
    }

    #[inline]
    fn fill_zero(&mut self) {
        (**self).fill_zero();
    }
}

/// Memory-mapped display bitmap accessed with volatile loads and stores.
#[derive(Debug)]
pub struct MappedSurface {
    base: NonNull<u8>,
}

impl MappedSurface {
    /// Wrap the bitmap starting at `base`.
    ///
    /// # Safety
    /// `base` must be valid for volatile reads and writes of `SCREEN_SIZE`
    /// bytes for the lifetime of the returned value, and nothing else in the
    /// program may write that range while it exists. Concurrent reads by
    /// hardware are fine.
    #[inline]
    pub const unsafe fn new(base: NonNull<u8>) -> Self {
        Self { base }
    }

    /// The display bitmap of the reference machine, at `SCREEN_BASE`.
    ///
    /// # Safety
    /// Only meaningful on the target itself; see [`MappedSurface::new`].
    #[inline]
    pub const unsafe fn spectrum() -> Self {
        unsafe { Self::new(NonNull::new_unchecked(SCREEN_BASE as *mut u8)) }
    }

    #[inline]
    pub const fn base(&self) -> NonNull<u8> {
        self.base
    }
}

impl Surface for MappedSurface {
    #[inline(always)]
    fn read(&self, offset: usize) -> u8 {
        debug_assert!(offset < SCREEN_SIZE);
        // SAFETY: the constructor contract covers `base..base + SCREEN_SIZE`.
        unsafe { self.base.as_ptr().add(offset).read_volatile() }
    }

    #[inline(always)]
    fn write(&mut self, offset: usize, value: u8) {
        debug_assert!(offset < SCREEN_SIZE);
        // SAFETY: as in `read`; `&mut self` makes us the only writer.
        unsafe { self.base.as_ptr().add(offset).write_volatile(value) }
    }
}

//! Coordinate <-> byte/bit translation for the interleaved bitmap layout.
//!
//! Bit layout of the 13-bit offset:
//!
//! ```text
//!  12 11 | 10  9  8 |  7  6  5 |  4  3  2  1  0
//!  y7 y6 | y2 y1 y0 |  y5 y4 y3 |  x7 x6 x5 x4 x3
//!  third | pixel line | char row |  byte column
//! ```

use super::{HEIGHT, WIDTH};

/// Location of one pixel: byte offset into the bitmap plus the bit mask
/// inside that byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelAddress {
    pub offset: usize,
    pub mask: u8,
}

impl PixelAddress {
    /// Bit index inside the byte, 7 = leftmost pixel.
    #[inline]
    pub const fn bit(self) -> u32 {
        self.mask.trailing_zeros()
    }
}

/// Byte offset of the first byte of raster line `y`.
///
/// The 32 bytes of a line are contiguous, so `row_offset(y) + (x >> 3)` is
/// the byte holding pixel `(x, y)`.
#[inline(always)]
pub const fn row_offset(y: usize) -> usize {
    ((y & 0xC0) << 5) | ((y & 0x07) << 8) | ((y & 0x38) << 2)
}

/// Translate an in-range `(x, y)` into its byte offset and bit mask.
///
/// Callers must bounds-check first; `FrameBuffer` does.
#[inline(always)]
pub const fn pixel_address(x: usize, y: usize) -> PixelAddress {
    debug_assert!(x < WIDTH && y < HEIGHT);
    PixelAddress {
        offset: row_offset(y) | (x >> 3),
        mask: 0x80 >> (x & 0x7),
    }
}

/// Inverse of `pixel_address`: recover `(x, y)` from a byte offset and a
/// bit index (7 = leftmost). Returns `None` outside the bitmap.
pub const fn pixel_at(offset: usize, bit: u32) -> Option<(usize, usize)> {
    if bit > 7 {
        return None;
    }
    let y = ((offset >> 5) & 0xC0) | ((offset >> 8) & 0x07) | ((offset >> 2) & 0x38);
    if y >= HEIGHT || offset >> 13 != 0 {
        return None;
    }
    let x = ((offset & 0x1F) << 3) | (7 - bit as usize);
    Some((x, y))
}

//! Starting configurations drawn before the tick loop.
//!
//! These only call `FrameBuffer::set`; anything off the grid is dropped.
//! The border is made of ordinary live cells, so it is not protected from
//! the rule: its corners have a single live neighbor and erode tick by tick.

use rand::Rng;

use crate::masklife::ActiveRegion;
use crate::screen::{FrameBuffer, HEIGHT, Surface, WIDTH};

/// Set a signed coordinate, dropping anything left of or above the grid.
#[inline]
fn plot<S: Surface>(fb: &mut FrameBuffer<S>, x: i64, y: i64) {
    if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
        fb.set(x, y, true);
    }
}

/// Draw a one-cell-wide outline along the inside edge of `region`.
pub fn draw_border<S: Surface, const R: usize>(
    fb: &mut FrameBuffer<S>,
    region: &ActiveRegion<R>,
) {
    let (x0, y0) = region.origin();
    let last = R - 1;
    for i in 0..R {
        fb.set(x0 + i, y0, true);
        fb.set(x0 + i, y0 + last, true);
        fb.set(x0, y0 + i, true);
        fb.set(x0 + last, y0 + i, true);
    }
}

/// Draw a midpoint circle outline of `radius` around `(cx, cy)`.
///
/// Circles that cannot reach the grid draw nothing.
pub fn draw_circle<S: Surface>(fb: &mut FrameBuffer<S>, cx: usize, cy: usize, radius: u32) {
    // Plotted points lie within `radius` of the center on each axis and at
    // least `radius - 1` away from it, while no grid cell is further than
    // `reach`.
    let r = radius as usize;
    let reach = cx.saturating_add(cy).saturating_add(WIDTH + HEIGHT + 1);
    if cx > WIDTH.saturating_add(r) || cy > HEIGHT.saturating_add(r) || r > reach {
        return;
    }

    let (cx, cy) = (cx as i64, cy as i64);
    let mut x = i64::from(radius);
    let mut y = 0i64;
    let mut err = 0i64;

    while x >= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx - x, cy + y),
            (cx - x, cy - y),
            (cx - y, cy - x),
            (cx + y, cy - x),
            (cx + x, cy - y),
        ] {
            plot(fb, px, py);
        }

        y += 1;
        err += 1 + 2 * y;
        if 2 * (err - x) + 1 > 0 {
            x -= 1;
            err += 1 - 2 * x;
        }
    }
}

/// Fill `region` with random live cells at the given density (0.0..=1.0).
/// Existing cells are overwritten.
pub fn random_soup<S: Surface, G: Rng + ?Sized, const R: usize>(
    fb: &mut FrameBuffer<S>,
    region: &ActiveRegion<R>,
    rng: &mut G,
    density: f64,
) {
    let threshold = (u64::MAX as f64 * density.clamp(0.0, 1.0)) as u64;
    for (x, y) in region.cells() {
        fb.set(x, y, rng.next_u64() <= threshold && density > 0.0);
    }
}

/// The default starting picture: region border plus a circle at its center.
///
/// Use `SeedPattern::default()` for the reference picture, or adjust it via
/// the builder methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedPattern {
    /// Outline the active region.
    pub border: bool,
    /// Circle radius; `None` draws no circle.
    pub radius: Option<u32>,
}

impl Default for SeedPattern {
    fn default() -> Self {
        Self {
            border: true,
            radius: Some(10),
        }
    }
}

impl SeedPattern {
    /// Nothing at all.
    pub const fn empty() -> Self {
        Self {
            border: false,
            radius: None,
        }
    }

    pub fn border(mut self, on: bool) -> Self {
        self.border = on;
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn no_circle(mut self) -> Self {
        self.radius = None;
        self
    }

    /// Draw the pattern into `fb` for `region`.
    pub fn apply<S: Surface, const R: usize>(
        &self,
        fb: &mut FrameBuffer<S>,
        region: &ActiveRegion<R>,
    ) {
        if self.border {
            draw_border(fb, region);
        }
        if let Some(radius) = self.radius {
            let (cx, cy) = region.center();
            draw_circle(fb, cx, cy, radius);
        }
    }
}

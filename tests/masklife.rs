use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use spectrum_life::control::TickBudget;
use spectrum_life::masklife::{ActiveRegion, DirtyMask, MaskLife, Snapshot, next_state};
use spectrum_life::screen::{FrameBuffer, HEIGHT, ScreenBytes, WIDTH};
use spectrum_life::seed::SeedPattern;

type Fb = FrameBuffer<ScreenBytes>;

/// Place cells relative to the region center.
fn set_cells<const R: usize>(fb: &mut Fb, cells: &[(isize, isize)]) {
    let (cx, cy) = ActiveRegion::<R>::centered().center();
    for &(dx, dy) in cells {
        fb.set(cx.wrapping_add_signed(dx), cy.wrapping_add_signed(dy), true);
    }
}

fn collect_live(fb: &Fb) -> HashSet<(usize, usize)> {
    let mut out = HashSet::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if fb.get(x, y) {
                out.insert((x, y));
            }
        }
    }
    out
}

fn relative<const R: usize>(cells: &[(isize, isize)]) -> HashSet<(usize, usize)> {
    let (cx, cy) = ActiveRegion::<R>::centered().center();
    cells
        .iter()
        .map(|&(dx, dy)| (cx.wrapping_add_signed(dx), cy.wrapping_add_signed(dy)))
        .collect()
}

/// Reference step over a plain cell set: rule applied inside `region` only,
/// everything outside it carried over unchanged.
fn step_naive<const R: usize>(
    cells: &HashSet<(usize, usize)>,
    region: &ActiveRegion<R>,
) -> HashSet<(usize, usize)> {
    let mut next: HashSet<_> = cells
        .iter()
        .copied()
        .filter(|&(x, y)| !region.contains(x, y))
        .collect();
    for (x, y) in region.cells() {
        let mut neighbors = 0;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = (x.wrapping_add_signed(dx), y.wrapping_add_signed(dy));
                if cells.contains(&n) {
                    neighbors += 1;
                }
            }
        }
        let alive = cells.contains(&(x, y));
        let next_alive = if alive {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        };
        if next_alive {
            next.insert((x, y));
        }
    }
    next
}

#[test]
fn isolated_point_dies() {
    let mut engine = MaskLife::<32>::new();
    let mut fb = Fb::blank();
    set_cells::<32>(&mut fb, &[(0, 0)]);

    let report = engine.tick(&mut fb);

    assert_eq!(fb.population(), 0);
    assert_eq!(report.deaths, 1);
    assert_eq!(report.flagged, 9);
}

#[test]
fn block_is_stable() {
    let mut engine = MaskLife::<32>::new();
    let mut fb = Fb::blank();
    let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
    set_cells::<32>(&mut fb, &block);

    for _ in 0..10 {
        let report = engine.tick(&mut fb);
        assert!(!report.changed());
        assert_eq!(collect_live(&fb), relative::<32>(&block));
    }
}

#[test]
fn blinker_oscillates() {
    let mut engine = MaskLife::<32>::new();
    let mut fb = Fb::blank();
    let horizontal = [(-1, 0), (0, 0), (1, 0)];
    let vertical = [(0, -1), (0, 0), (0, 1)];
    set_cells::<32>(&mut fb, &horizontal);

    engine.tick(&mut fb);
    assert_eq!(collect_live(&fb), relative::<32>(&vertical));

    engine.tick(&mut fb);
    assert_eq!(collect_live(&fb), relative::<32>(&horizontal));
}

#[test]
fn glider_moves_down_right_every_four_ticks() {
    let mut engine = MaskLife::<32>::new();
    let mut fb = Fb::blank();
    // y grows downwards on screen.
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    set_cells::<32>(&mut fb, &glider);

    engine.run(&mut fb, TickBudget(4));

    let shifted: Vec<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(collect_live(&fb), relative::<32>(&shifted));
    assert_eq!(engine.generation(), 4);
}

#[test]
fn rule_is_applied_per_neighbor_count() {
    // A cell at the center with `n` neighbors placed on a fixed ring order.
    let ring = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];
    for n in 0..=8 {
        for alive in [false, true] {
            let mut fb = Fb::blank();
            set_cells::<32>(&mut fb, &ring[..n]);
            if alive {
                set_cells::<32>(&mut fb, &[(0, 0)]);
            }
            let mut snapshot = Snapshot::new();
            snapshot.capture(&fb);
            let (cx, cy) = ActiveRegion::<32>::centered().center();
            assert_eq!(snapshot.live_neighbors(cx, cy) as usize, n);

            MaskLife::<32>::new().tick(&mut fb);

            let expected = if alive { n == 2 || n == 3 } else { n == 3 };
            assert_eq!(fb.get(cx, cy), expected, "alive={alive} neighbors={n}");
            assert_eq!(fb.get(cx, cy), next_state(alive, n as u8));
        }
    }
}

#[test]
fn matches_naive_on_random_soups() {
    let region = ActiveRegion::<32>::centered();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xBADC0FFEE);

    for _ in 0..4 {
        let mut engine = MaskLife::<32>::new();
        let mut fb = Fb::blank();
        let mut naive = HashSet::new();
        for (x, y) in region.cells() {
            if rng.random::<f64>() < 0.33 {
                fb.set(x, y, true);
                naive.insert((x, y));
            }
        }

        for _ in 0..12 {
            assert_eq!(collect_live(&fb), naive);
            engine.tick(&mut fb);
            naive = step_naive(&naive, &region);
        }
    }
}

#[test]
fn mask_covers_every_change() {
    let region = ActiveRegion::<48>::centered();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED);

    for density in [0.02, 0.1, 0.3, 0.6, 0.9] {
        let mut fb = Fb::blank();
        for (x, y) in region.cells() {
            fb.set(x, y, rng.random::<f64>() < density);
        }
        let mut snapshot = Snapshot::new();
        let mut mask = DirtyMask::<48>::new();
        for _ in 0..6 {
            snapshot.capture(&fb);
            mask.rebuild(&snapshot, &region);
            assert!(mask.covers(&snapshot, &region), "density={density}");

            let mut engine = MaskLife::<48>::new();
            engine.tick(&mut fb);
            for (x, y) in region.cells() {
                let (lx, ly) = region.to_local(x, y).unwrap();
                if !mask.is_flagged(lx, ly) {
                    assert_eq!(fb.get(x, y), snapshot.get(x, y), "unflagged ({x},{y}) changed");
                }
            }
        }
    }
}

#[test]
fn cells_outside_region_are_never_touched() {
    let region = ActiveRegion::<32>::centered();
    let (x0, y0) = region.origin();
    let mut fb = Fb::blank();
    // A blinker straddling the left edge of the region, plus scattered
    // cells well outside it.
    for y in y0 + 9..y0 + 12 {
        fb.set(x0 - 1, y, true);
        fb.set(x0, y, true);
    }
    fb.set(0, 0, true);
    fb.set(WIDTH - 1, HEIGHT - 1, true);
    let mut outside_before = Vec::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if !region.contains(x, y) {
                outside_before.push(fb.get(x, y));
            }
        }
    }

    MaskLife::<32>::new().run(&mut fb, TickBudget(5));

    let mut outside_after = Vec::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if !region.contains(x, y) {
                outside_after.push(fb.get(x, y));
            }
        }
    }
    assert_eq!(outside_before, outside_after);
}

#[test]
fn full_height_region_treats_grid_edge_as_dead() {
    // A 192-high region touches the top and bottom of the grid, so neighbor
    // lookups there fall off the bitmap.
    let region = ActiveRegion::<192>::centered();
    let (x0, _) = region.origin();
    let mut fb = Fb::blank();
    // Block in the top-left corner of the region: still life.
    for (x, y) in [(x0, 0), (x0 + 1, 0), (x0, 1), (x0 + 1, 1)] {
        fb.set(x, y, true);
    }
    // Horizontal blinker on the bottom row: the cell below its center is off
    // the grid, so only the upper half of the vertical phase appears.
    for x in x0 + 50..x0 + 53 {
        fb.set(x, HEIGHT - 1, true);
    }

    let mut engine = MaskLife::<192>::new();
    engine.tick(&mut fb);

    assert!(fb.get(x0, 0) && fb.get(x0 + 1, 0) && fb.get(x0, 1) && fb.get(x0 + 1, 1));
    assert!(fb.get(x0 + 51, HEIGHT - 2));
    assert!(fb.get(x0 + 51, HEIGHT - 1));
    assert!(!fb.get(x0 + 50, HEIGHT - 1));
    assert!(!fb.get(x0 + 52, HEIGHT - 1));
    assert_eq!(fb.population(), 6);
}

#[test]
fn seeded_border_erodes_at_corners() {
    let region = ActiveRegion::<100>::centered();
    let (x0, y0) = region.origin();
    let last = 99;
    let corners = [(x0, y0), (x0 + last, y0), (x0, y0 + last), (x0 + last, y0 + last)];
    let mut fb = Fb::blank();
    SeedPattern::default().no_circle().apply(&mut fb, &region);
    assert_eq!(fb.population(), 396);

    let mut engine = MaskLife::<100>::new();
    engine.tick(&mut fb);

    // Every border cell has two live neighbors along the outline and
    // survives; the line just inside is born from three cells above it.
    for (x, y) in corners {
        assert!(fb.get(x, y), "corner ({x},{y}) died early");
    }
    assert!(fb.get(x0 + 50, y0));
    assert!(fb.get(x0 + 50, y0 + 1));
    assert!(!fb.get(x0 + 1, y0 + 1), "inner diagonal is overcrowded");
    assert_eq!(fb.population(), 780);

    engine.run(&mut fb, TickBudget(2));
    for (x, y) in corners {
        assert!(!fb.get(x, y), "corner ({x},{y}) survived");
    }
}

#[test]
fn edge_cell_is_born_from_neighbors_outside_region() {
    let region = ActiveRegion::<32>::centered();
    let (x0, y0) = region.origin();
    let mut fb = Fb::blank();
    for y in y0 + 9..y0 + 12 {
        fb.set(x0 - 1, y, true);
    }
    let mut snapshot = Snapshot::new();
    snapshot.capture(&fb);
    let mut mask = DirtyMask::<32>::new();
    mask.rebuild(&snapshot, &region);
    assert!(mask.covers(&snapshot, &region));
    assert_eq!(mask.flagged(), 5);

    let expected = step_naive(&collect_live(&fb), &region);
    let report = MaskLife::<32>::new().tick(&mut fb);

    assert!(fb.get(x0, y0 + 10));
    assert_eq!(report.births, 1);
    assert_eq!(collect_live(&fb), expected);
    // The column itself lies outside the region and is left alone.
    assert!(fb.get(x0 - 1, y0 + 9) && fb.get(x0 - 1, y0 + 11));
}

#[test]
fn circle_crossing_region_edge_matches_naive() {
    let region = ActiveRegion::<32>::centered();
    for radius in 16..=18 {
        let mut engine = MaskLife::<32>::new();
        let mut fb = Fb::blank();
        SeedPattern::default().radius(radius).apply(&mut fb, &region);
        let mut naive = collect_live(&fb);

        for tick in 1..=20 {
            engine.tick(&mut fb);
            naive = step_naive(&naive, &region);
            assert!(
                engine.mask().covers(engine.snapshot(), &region),
                "radius {radius} tick {tick}"
            );
            assert_eq!(collect_live(&fb), naive, "radius {radius} tick {tick}");
        }
    }
}

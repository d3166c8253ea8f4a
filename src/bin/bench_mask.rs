use rand::SeedableRng;
use spectrum_life::control::TickBudget;
use spectrum_life::masklife::{ActiveRegion, MaskLife};
use spectrum_life::scanlife::ScanLife;
use spectrum_life::screen::{FrameBuffer, ScreenBytes};
use spectrum_life::seed::{SeedPattern, random_soup};
use std::time::Instant;

fn time_ticks<F: FnMut()>(mut tick_all: F) -> f64 {
    let start = Instant::now();
    tick_all();
    start.elapsed().as_secs_f64() * 1000.0
}

fn report(label: &str, iterations: u64, masked_ms: f64, scan_ms: f64, pop: u32) {
    println!(
        "{:<30} {:>6} iters  mask {:>8.1} us/tick  scan {:>8.1} us/tick  {:>5.2}x  pop={}",
        label,
        iterations,
        masked_ms * 1000.0 / iterations as f64,
        scan_ms * 1000.0 / iterations as f64,
        scan_ms / masked_ms,
        pop
    );
}

fn bench_seeded<const R: usize>(
    label: &str,
    seed: impl Fn(&mut FrameBuffer<ScreenBytes>),
    iterations: u64,
) {
    let mut masked_fb = FrameBuffer::blank();
    seed(&mut masked_fb);
    let mut scan_fb = masked_fb.clone();

    let mut masked = MaskLife::<R>::new();
    let mut scan = ScanLife::<R>::new();

    // Warm up: 2 ticks to let the first die-off settle
    masked.run(&mut masked_fb, TickBudget(2));
    scan.run(&mut scan_fb, TickBudget(2));

    let masked_ms = time_ticks(|| {
        masked.run(&mut masked_fb, TickBudget(iterations));
    });
    let scan_ms = time_ticks(|| {
        scan.run(&mut scan_fb, TickBudget(iterations));
    });
    assert_eq!(masked_fb.as_bytes(), scan_fb.as_bytes(), "{label}: engines diverged");
    report(label, iterations, masked_ms, scan_ms, masked_fb.population());
}

fn bench_soup<const R: usize>(label: &str, density: f64, iterations: u64) {
    bench_seeded::<R>(
        label,
        |fb| {
            let mut rng = rand::rngs::StdRng::seed_from_u64(0xBEEF_CAFE);
            random_soup(fb, &ActiveRegion::<R>::centered(), &mut rng, density);
        },
        iterations,
    );
}

fn bench_glider<const R: usize>(iterations: u64) {
    bench_seeded::<R>(
        "glider (tiny)",
        |fb| {
            let (cx, cy) = ActiveRegion::<R>::centered().center();
            for (dx, dy) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
                fb.set(cx + dx, cy + dy, true);
            }
        },
        iterations,
    );
}

fn main() {
    println!("=== MaskLife vs ScanLife ===\n");

    bench_glider::<100>(2000);
    bench_seeded::<100>(
        "border + circle r=10",
        |fb| SeedPattern::default().apply(fb, &ActiveRegion::<100>::centered()),
        2000,
    );
    bench_soup::<32>("soup 32x32 d=0.3", 0.3, 2000);
    bench_soup::<100>("soup 100x100 d=0.05", 0.05, 500);
    bench_soup::<100>("soup 100x100 d=0.3", 0.3, 500);
    bench_soup::<100>("soup 100x100 d=0.42", 0.42, 500);
    bench_soup::<192>("soup 192x192 d=0.3", 0.3, 200);
}

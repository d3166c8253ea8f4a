use rand::SeedableRng;
use spectrum_life::control::TickBudget;
use spectrum_life::masklife::{ActiveRegion, MaskLife};
use spectrum_life::scanlife::ScanLife;
use spectrum_life::screen::{FrameBuffer, HEIGHT, ScreenBytes, WIDTH};
use spectrum_life::seed::{SeedPattern, random_soup};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const DEFAULT_REGION: usize = 100;
const DEFAULT_REPORT_EVERY: u64 = 100;
const TICKS_ENV: &str = "SPECTRUM_LIFE_TICKS";

struct MainArgs {
    /// `None` runs the production loop forever.
    ticks: Option<u64>,
    region: usize,
    pattern: SeedPattern,
    soup: Option<f64>,
    seed: u64,
    report_every: u64,
    dump: Option<PathBuf>,
    show: bool,
    checked: bool,
}

fn parse_args() -> MainArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = MainArgs {
        ticks: None,
        region: DEFAULT_REGION,
        pattern: SeedPattern::default(),
        soup: None,
        seed: 0x5EED_1234_ABCD_EF01,
        report_every: DEFAULT_REPORT_EVERY,
        dump: None,
        show: false,
        checked: true,
    };
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                let n: u64 = next_arg(i, "--ticks")
                    .parse()
                    .expect("--ticks requires a non-negative integer");
                parsed.ticks = Some(n);
            }
            "--region" => {
                i += 1;
                parsed.region = next_arg(i, "--region")
                    .parse()
                    .expect("--region requires 32, 64 or 100");
            }
            "--radius" => {
                i += 1;
                let r: u32 = next_arg(i, "--radius")
                    .parse()
                    .expect("--radius requires a non-negative integer");
                parsed.pattern = if r == 0 {
                    parsed.pattern.no_circle()
                } else {
                    parsed.pattern.radius(r)
                };
            }
            "--no-border" => {
                parsed.pattern = parsed.pattern.border(false);
            }
            "--soup" => {
                i += 1;
                let density: f64 = next_arg(i, "--soup")
                    .parse()
                    .expect("--soup requires a density between 0 and 1");
                parsed.soup = Some(density);
            }
            "--seed" => {
                i += 1;
                parsed.seed = next_arg(i, "--seed")
                    .parse()
                    .expect("--seed requires an unsigned integer");
            }
            "--report-every" => {
                i += 1;
                let n: u64 = next_arg(i, "--report-every")
                    .parse()
                    .expect("--report-every requires a positive integer");
                parsed.report_every = n.max(1);
            }
            "--dump" => {
                i += 1;
                parsed.dump = Some(PathBuf::from(next_arg(i, "--dump")));
            }
            "--show" => {
                parsed.show = true;
            }
            "--unchecked" => {
                parsed.checked = false;
            }
            other => panic!(
                "unknown argument: {other}\nusage: spectrum-life [--ticks N] [--region 32|64|100] \
                 [--radius N] [--no-border] [--soup DENSITY] [--seed N] [--report-every N] \
                 [--dump PATH.pbm] [--show] [--unchecked]"
            ),
        }
        i += 1;
    }
    if parsed.ticks.is_none() {
        if let Ok(value) = std::env::var(TICKS_ENV) {
            let n: u64 = value
                .trim()
                .parse()
                .unwrap_or_else(|_| panic!("{TICKS_ENV} must be a non-negative integer"));
            parsed.ticks = Some(n);
        }
    }
    parsed
}

fn seed_world<const R: usize>(fb: &mut FrameBuffer<ScreenBytes>, args: &MainArgs) {
    let region = ActiveRegion::<R>::centered();
    match args.soup {
        Some(density) => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
            random_soup(fb, &region, &mut rng, density);
        }
        None => args.pattern.apply(fb, &region),
    }
}

fn run_checked<const R: usize>(args: &MainArgs, ticks: u64) -> FrameBuffer<ScreenBytes> {
    let mut masked = MaskLife::<R>::new();
    let mut scan = ScanLife::<R>::new();
    let mut masked_fb = FrameBuffer::blank();
    seed_world::<R>(&mut masked_fb, args);
    let mut scan_fb = masked_fb.clone();

    let mut masked_total = Duration::ZERO;
    let mut scan_total = Duration::ZERO;
    let mut flagged_total = 0u64;
    let mut done = 0u64;

    while done < ticks {
        let interval = args.report_every.min(ticks - done);

        let start = Instant::now();
        let mut last = None;
        masked.run_observed(&mut masked_fb, TickBudget(interval), |report| {
            flagged_total += report.flagged as u64;
            last = Some(*report);
        });
        let masked_phase = start.elapsed();
        masked_total += masked_phase;

        let start = Instant::now();
        scan.run(&mut scan_fb, TickBudget(interval));
        let scan_phase = start.elapsed();
        scan_total += scan_phase;

        done += interval;

        let match_status = if masked_fb.as_bytes() == scan_fb.as_bytes() {
            "MATCH"
        } else {
            "MISMATCH"
        };
        let population = last.map_or(0, |report| report.population());
        let flagged = last.map_or(0, |report| report.flagged);
        println!(
            "Tick {done}: population = {population}, flagged = {flagged}/{} [{match_status}]",
            R * R
        );
        println!(
            "  MaskLife: {:.3} ms/tick | ScanLife: {:.3} ms/tick",
            masked_phase.as_secs_f64() * 1000.0 / interval as f64,
            scan_phase.as_secs_f64() * 1000.0 / interval as f64
        );
    }

    if ticks > 0 {
        let masked_ms = masked_total.as_secs_f64() * 1000.0;
        let scan_ms = scan_total.as_secs_f64() * 1000.0;
        let avg_flagged = flagged_total as f64 / ticks as f64;
        println!("\n--- Summary ({ticks} ticks, {R}x{R} region) ---");
        println!("MaskLife: {masked_ms:.3} ms total, avg flagged {avg_flagged:.1} cells/tick");
        println!("ScanLife: {scan_ms:.3} ms total, {} cells/tick", R * R);
        println!("Speedup (ScanLife / MaskLife): {:.2}x", scan_ms / masked_ms);
    }
    masked_fb
}

fn run_unchecked<const R: usize>(args: &MainArgs, ticks: u64) -> FrameBuffer<ScreenBytes> {
    let mut engine = MaskLife::<R>::new();
    let mut fb = FrameBuffer::blank();
    seed_world::<R>(&mut fb, args);

    let mut done = 0u64;
    while done < ticks {
        let interval = args.report_every.min(ticks - done);
        let start = Instant::now();
        let mut last = None;
        engine.run_observed(&mut fb, TickBudget(interval), |report| last = Some(*report));
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        done += interval;
        if let Some(report) = last {
            println!(
                "Tick {}: population = {}, births = {}, deaths = {}, flagged = {} ({:.3} ms/tick)",
                report.generation,
                report.population(),
                report.births,
                report.deaths,
                report.flagged,
                elapsed_ms / interval as f64
            );
        }
    }
    fb
}

fn run_forever<const R: usize>(args: &MainArgs) -> ! {
    let mut engine = MaskLife::<R>::new();
    let mut fb = FrameBuffer::blank();
    seed_world::<R>(&mut fb, args);
    println!("running {R}x{R} region until interrupted (set --ticks or {TICKS_ENV} to bound)");
    engine.run_forever(&mut fb)
}

fn show_region<const R: usize>(fb: &FrameBuffer<ScreenBytes>) {
    let region = ActiveRegion::<R>::centered();
    let (x0, y0) = region.origin();
    for y in y0..y0 + R {
        let line: String = (x0..x0 + R)
            .map(|x| if fb.get(x, y) { '#' } else { '.' })
            .collect();
        println!("{line}");
    }
}

/// Write the bitmap as a binary PBM, one raster line per row.
fn write_pbm(path: &Path, fb: &FrameBuffer<ScreenBytes>) {
    let mut out = format!("P4\n{WIDTH} {HEIGHT}\n").into_bytes();
    for y in 0..HEIGHT {
        out.extend_from_slice(&fb.row(y));
    }
    std::fs::write(path, out)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", path.display()));
    println!("wrote {}", path.display());
}

fn run<const R: usize>(args: MainArgs) {
    let Some(ticks) = args.ticks else {
        run_forever::<R>(&args);
    };
    let fb = if args.checked {
        run_checked::<R>(&args, ticks)
    } else {
        run_unchecked::<R>(&args, ticks)
    };
    if args.show {
        show_region::<R>(&fb);
    }
    if let Some(path) = args.dump.as_deref() {
        write_pbm(path, &fb);
    }
}

fn main() {
    let args = parse_args();
    match args.region {
        32 => run::<32>(args),
        64 => run::<64>(args),
        100 => run::<100>(args),
        other => panic!("unsupported region size: {other} (expected 32, 64 or 100)"),
    }
}

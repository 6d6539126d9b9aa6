use std::env;
use std::time::Instant;

use landscape::engines::{GlobalMaxTwoPass, PeakWalk, TwoPointer};
use landscape::{gen, Height, Profile, WaterEngine};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Landscape Scaling Probe: trapped-water engines");
    eprintln!("{}", "=".repeat(72));
    eprintln!();
    eprintln!("Runs all three engines over generated profiles of growing size:");
    eprintln!(
        "  - Correctness: totals are checked against the brute-force oracle up to {} columns",
        options.verify_limit
    );
    eprintln!("  - All engines must agree pairwise at every size");
    eprintln!(
        "  - peak_walk is skipped on staggered declines beyond {} columns (quadratic)",
        options.peak_walk_cap
    );
    eprintln!();
    eprintln!("Columns: wall_s = wall-clock seconds, rss_delta_kib = resident-set delta");
    eprintln!("{}", "=".repeat(72));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/4] cross profiles (interleaved rising/falling ramps)...");
    measurements.extend(run_shape(&options, &mut sys, "cross", usize::MAX, gen::cross));
    eprintln!();

    eprintln!("[2/4] vee profiles (decline then incline)...");
    measurements.extend(run_shape(&options, &mut sys, "vee", usize::MAX, |n| {
        gen::decline_incline(n, 1)
    }));
    eprintln!();

    eprintln!("[3/4] tiled fixture (turing_complete_example repeated)...");
    measurements.extend(run_shape(&options, &mut sys, "tiled", usize::MAX, |n| {
        let base = Profile::turing_complete_example();
        gen::tile(&base, n / base.len())
    }));
    eprintln!();

    eprintln!("[4/4] staggered declines (peak_walk worst case)...");
    measurements.extend(run_shape(
        &options,
        &mut sys,
        "staggered",
        options.peak_walk_cap,
        |n| gen::staggered_decline(n / 2, (n / 2) as u32 + 1),
    ));
    eprintln!();

    println!(
        "{:<10} {:<22} {:>9} {:>10} {:>14} {:>12}",
        "shape", "engine", "columns", "wall_s", "rss_delta_kib", "status"
    );
    for m in &measurements {
        println!(
            "{:<10} {:<22} {:>9} {:>10.4} {:>14} {:>12}",
            m.shape, m.engine, m.columns, m.wall_s, m.rss_delta_kib, m.status
        );
    }

    if measurements.iter().any(|m| m.status == "FAILED") {
        eprintln!("scale_probe: some measurements FAILED");
        std::process::exit(1);
    }
}

struct Options {
    max_size: usize,
    verify_limit: usize,
    peak_walk_cap: usize,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut opts = Self {
            max_size: 1_000_000,
            verify_limit: 4_096,
            peak_walk_cap: 100_000,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--max-size" => opts.max_size = parse_value(args.next(), "--max-size")?,
                "--verify-limit" => {
                    opts.verify_limit = parse_value(args.next(), "--verify-limit")?
                }
                "--peak-walk-cap" => {
                    opts.peak_walk_cap = parse_value(args.next(), "--peak-walk-cap")?
                }
                "--help" | "-h" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                other => return Err(format!("unrecognized argument `{other}`")),
            }
        }
        if opts.max_size == 0 {
            return Err("--max-size must be positive".into());
        }
        Ok(opts)
    }

    fn print_help() {
        eprintln!("usage: scale_probe [--max-size N] [--verify-limit N] [--peak-walk-cap N]");
        eprintln!();
        eprintln!("  --max-size N       largest profile to generate (default 1000000)");
        eprintln!("  --verify-limit N   verify against the brute-force oracle up to N columns");
        eprintln!("                     (default 4096)");
        eprintln!("  --peak-walk-cap N  skip peak_walk on staggered declines above N columns");
        eprintln!("                     (default 100000)");
    }
}

fn parse_value(arg: Option<String>, flag: &str) -> Result<usize, String> {
    let raw = arg.ok_or_else(|| format!("{flag} expects a value"))?;
    raw.parse()
        .map_err(|_| format!("{flag}: `{raw}` is not a valid size"))
}

struct Measurement {
    shape: &'static str,
    engine: &'static str,
    columns: usize,
    wall_s: f64,
    rss_delta_kib: i64,
    status: &'static str,
}

fn run_shape(
    options: &Options,
    sys: &mut System,
    shape: &'static str,
    peak_walk_cap: usize,
    build: impl Fn(usize) -> Profile<u32>,
) -> Vec<Measurement> {
    let mut out = Vec::new();
    let mut n = 10;
    while n <= options.max_size {
        let profile = build(n);
        let columns = profile.len();
        let expect = if columns <= options.verify_limit {
            Some(brute_force(&profile))
        } else {
            None
        };

        let (two_pointer, m) = measure(
            sys,
            shape,
            "two_pointer",
            columns,
            expect,
            &TwoPointer,
            profile.heights(),
        );
        out.push(m);
        // The linear engines cross-check each other where the oracle is
        // too slow to run.
        let cross_check = expect.or(Some(two_pointer));
        let (_, m) = measure(
            sys,
            shape,
            "global_max_two_pass",
            columns,
            cross_check,
            &GlobalMaxTwoPass,
            profile.heights(),
        );
        out.push(m);
        if columns <= peak_walk_cap {
            let (_, m) = measure(
                sys,
                shape,
                "peak_walk",
                columns,
                cross_check,
                &PeakWalk,
                profile.heights(),
            );
            out.push(m);
        }

        eprintln!("      {shape}: {columns} columns done");
        n *= 10;
    }
    out
}

fn measure<E: WaterEngine>(
    sys: &mut System,
    shape: &'static str,
    engine_name: &'static str,
    columns: usize,
    expect: Option<u64>,
    engine: &E,
    heights: &[u32],
) -> (u64, Measurement) {
    let rss_before = rss_kib(sys);
    let started = Instant::now();
    let water = engine.water(heights);
    let wall_s = started.elapsed().as_secs_f64();
    let rss_after = rss_kib(sys);

    let status = match expect {
        Some(expected) if expected == water => "passed",
        Some(_) => "FAILED",
        None => "not_checked",
    };

    (
        water,
        Measurement {
            shape,
            engine: engine_name,
            columns,
            wall_s,
            rss_delta_kib: rss_after as i64 - rss_before as i64,
            status,
        },
    )
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|p| p.memory() / 1024)
        .unwrap_or(0)
}

/// Brute-force oracle, same shape as the test suites' reference function.
fn brute_force<H: Height>(heights: &[H]) -> u64 {
    let mut total = 0u64;
    for (i, &h) in heights.iter().enumerate() {
        let left = heights[..=i].iter().copied().max().unwrap();
        let right = heights[i..].iter().copied().max().unwrap();
        total += left.min(right).as_volume().saturating_sub(h.as_volume());
    }
    total
}

//! Staggered-decline scaling: the peak walk rescans to the end of the
//! profile for every span here, so its cost grows quadratically in the peak
//! count while the linear engines stay flat per column.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use landscape::engines::{GlobalMaxTwoPass, PeakWalk, TwoPointer};
use landscape::{gen, WaterEngine};

fn bench_staggered_decline(c: &mut Criterion) {
    let mut group = c.benchmark_group("staggered_decline");
    for peaks in [256usize, 1_024, 4_096] {
        let p = gen::staggered_decline(peaks, peaks as u32 + 1);
        group.bench_function(format!("peak_walk_{peaks}_peaks"), |b| {
            b.iter(|| PeakWalk.water(black_box(p.heights())))
        });
        group.bench_function(format!("two_pointer_{peaks}_peaks"), |b| {
            b.iter(|| TwoPointer.water(black_box(p.heights())))
        });
        group.bench_function(format!("global_max_{peaks}_peaks"), |b| {
            b.iter(|| GlobalMaxTwoPass.water(black_box(p.heights())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_staggered_decline);
criterion_main!(benches);

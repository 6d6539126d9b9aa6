use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use landscape::engines::{GlobalMaxTwoPass, PeakWalk, TwoPointer};
use landscape::{gen, Profile, WaterEngine};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn bench_each_engine(c: &mut Criterion, group_name: &str, profile: &Profile<u32>) {
    let mut group = c.benchmark_group(group_name);
    group.bench_function(format!("peak_walk_{}", profile.len()), |b| {
        b.iter(|| PeakWalk.water(black_box(profile.heights())))
    });
    group.bench_function(format!("two_pointer_{}", profile.len()), |b| {
        b.iter(|| TwoPointer.water(black_box(profile.heights())))
    });
    group.bench_function(format!("global_max_{}", profile.len()), |b| {
        b.iter(|| GlobalMaxTwoPass.water(black_box(profile.heights())))
    });
    group.finish();
}

fn bench_tiled_fixture(c: &mut Criterion) {
    let base = Profile::turing_complete_example();
    for copies in [1_000usize, 62_500] {
        let p = gen::tile(&base, copies);
        bench_each_engine(c, "tiled_turing_complete", &p);
    }
}

fn bench_cross(c: &mut Criterion) {
    for n in [1_000usize, 100_000, 1_000_000] {
        let p = gen::cross(n);
        bench_each_engine(c, "cross", &p);
    }
}

fn bench_ramps(c: &mut Criterion) {
    for n in [100_000usize, 1_000_000] {
        bench_each_engine(c, "incline_sparse", &gen::incline(n, 2));
        bench_each_engine(c, "decline_incline", &gen::decline_incline(n, 1));
    }
}

fn bench_shuffled(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [100_000usize, 1_000_000] {
        let mut cols = gen::cross(n).into_heights();
        cols.shuffle(&mut rng);
        bench_each_engine(c, "shuffled_cross", &Profile::from(cols));
    }
}

criterion_group!(
    benches,
    bench_tiled_fixture,
    bench_cross,
    bench_ramps,
    bench_shuffled
);
criterion_main!(benches);

#![cfg(feature = "heavy")]

use landscape::engines::{GlobalMaxTwoPass, PeakWalk, TwoPointer};
use landscape::{gen, Profile, WaterEngine};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const COLUMNS: usize = 1_000_000;

#[test]
fn million_column_cross_engines_agree() {
    let p = gen::cross(COLUMNS);
    let expect = TwoPointer.water(&p);
    assert_eq!(GlobalMaxTwoPass.water(&p), expect);
    assert_eq!(PeakWalk.water(&p), expect);
}

#[test]
fn million_column_tiled_fixture_engines_agree() {
    let base = Profile::turing_complete_example();
    let p = gen::tile(&base, COLUMNS / base.len());
    assert_eq!(p.len(), COLUMNS);
    let expect = TwoPointer.water(&p);
    assert_eq!(GlobalMaxTwoPass.water(&p), expect);
    assert_eq!(PeakWalk.water(&p), expect);
}

#[test]
fn deep_basin_does_not_overflow() {
    // A million columns, each u32::MAX deep: the total exceeds u32 by far
    // and must come out exact in the u64 accumulator.
    let mut cols = vec![0u32; COLUMNS + 2];
    cols[0] = u32::MAX;
    cols[COLUMNS + 1] = u32::MAX;
    let expect = COLUMNS as u64 * u64::from(u32::MAX);
    assert_eq!(TwoPointer.water(&cols), expect);
    assert_eq!(GlobalMaxTwoPass.water(&cols), expect);
    assert_eq!(PeakWalk.water(&cols), expect);
}

#[test]
fn shuffled_million_columns_engines_agree() {
    let mut cols = gen::cross(COLUMNS).into_heights();
    cols.shuffle(&mut StdRng::seed_from_u64(7));
    let expect = TwoPointer.water(&cols);
    assert_eq!(GlobalMaxTwoPass.water(&cols), expect);
    assert_eq!(PeakWalk.water(&cols), expect);
}

#[test]
fn staggered_decline_peak_walk_terminates() {
    // Quadratic territory for the peak walk; kept to tens of thousands of
    // spans so the test finishes while still rescanning heavily.
    let p = gen::staggered_decline(20_000, 30_000);
    assert_eq!(PeakWalk.water(&p), TwoPointer.water(&p));
}

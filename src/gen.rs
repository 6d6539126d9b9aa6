//! Deterministic synthetic profiles for exercising the engines.
//!
//! These shapes feed the tests, the benchmarks and the scaling probe; the
//! engines themselves know nothing about them. Random permutations are left
//! to callers (the test suites shuffle with a seeded `StdRng`), keeping the
//! library free of RNG state.
//!
//! The ramps are sparse: only every `step`-th column carries the ramp
//! value, the columns in between stay at zero. With `step == 1` a ramp is
//! dense and traps nothing; with larger steps the gaps form pockets.

use crate::profile::Profile;
use crate::traits::Height;

/// Rising ramp of `n` columns.
pub fn incline(n: usize, step: usize) -> Profile<u32> {
    let step = step.max(1);
    let mut cols = vec![0u32; n];
    let mut value = 0u32;
    let mut idx = 0;
    while idx < n {
        cols[idx] = value;
        idx += step;
        value += 1;
    }
    Profile::from(cols)
}

/// Falling ramp of `n` columns, the mirror of [`incline`].
///
/// The ramp starts at `n / step` and falls by one per carried column;
/// when `step` does not divide `n`, the last carried column lands on zero.
/// Ramp values saturate there — they are never reflected back positive.
pub fn decline(n: usize, step: usize) -> Profile<u32> {
    let step = step.max(1);
    let mut cols = vec![0u32; n];
    let mut value = (n / step) as u32;
    let mut idx = 0;
    while idx < n {
        cols[idx] = value;
        idx += step;
        value = value.saturating_sub(1);
    }
    Profile::from(cols)
}

/// Tent: a rising ramp over the first half, a falling ramp over the second.
pub fn incline_decline(n: usize, step: usize) -> Profile<u32> {
    let step = step.max(1);
    let mid = n / 2;
    let mut cols = vec![0u32; n];
    let mut value = 0u32;
    let mut idx = 0;
    while idx < mid {
        cols[idx] = value;
        idx += step;
        value += 1;
    }
    let mut value = (n / step) as u32;
    let mut idx = mid;
    while idx < n {
        cols[idx] = value;
        idx += step;
        value = value.saturating_sub(1);
    }
    Profile::from(cols)
}

/// Vee: a falling ramp over the first half, a rising ramp over the second.
pub fn decline_incline(n: usize, step: usize) -> Profile<u32> {
    let step = step.max(1);
    let mid = n / 2;
    let mut cols = vec![0u32; n];
    let mut value = (n / step) as u32;
    let mut idx = 0;
    while idx < mid {
        cols[idx] = value;
        idx += step;
        value = value.saturating_sub(1);
    }
    let mut value = 0u32;
    let mut idx = mid;
    while idx < n {
        cols[idx] = value;
        idx += step;
        value += 1;
    }
    Profile::from(cols)
}

/// Interleaves a rising and a falling ramp column by column, so the profile
/// oscillates and almost every column sits in a pocket.
pub fn cross(n: usize) -> Profile<u32> {
    let mut cols = vec![0u32; n];
    let mut rising = 0u32;
    let mut falling = (n / 2) as u32;
    let mut idx = 0;
    while idx < n {
        cols[idx] = rising;
        if idx + 1 < n {
            cols[idx + 1] = falling;
        }
        idx += 2;
        rising += 1;
        falling = falling.saturating_sub(1);
    }
    Profile::from(cols)
}

/// Repeats `base` end to end `copies` times.
pub fn tile<H: Height>(base: &[H], copies: usize) -> Profile<H> {
    let mut cols = Vec::with_capacity(base.len().saturating_mul(copies));
    for _ in 0..copies {
        cols.extend_from_slice(base);
    }
    Profile::from(cols)
}

/// One tall initial peak of height `top`, then `peaks` declining peaks
/// separated by zero-height valleys; peak heights fall by one per peak and
/// floor at 1.
///
/// Densely staggered declining peaks are the adversarial shape for the
/// peak-walk engine, which rescans to the end of the profile for every span.
pub fn staggered_decline(peaks: usize, top: u32) -> Profile<u32> {
    let mut cols = Vec::with_capacity(2 * peaks + 1);
    cols.push(top);
    for k in 1..=peaks {
        cols.push(0);
        cols.push(top.saturating_sub(k as u32).max(1));
    }
    Profile::from(cols)
}

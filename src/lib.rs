//! Trapped water over one-dimensional elevation profiles.
//!
//! Given a [`Profile`] — non-negative integer heights, one per unit-width
//! column — this crate computes the total volume of water the landscape can
//! trap between its peaks. Three interchangeable engines implement the same
//! operation with different complexity trade-offs:
//!
//! - [`engines::PeakWalk`]: segments the profile into peak-to-peak spans
//!   with a three-state scanner that tolerates staggered declining runs.
//!   O(n) typical, O(n²) on adversarial staggered-decline profiles.
//! - [`engines::TwoPointer`]: two cursors closing inward, one running
//!   maximum per side. O(n) time, O(1) space; the default engine.
//! - [`engines::GlobalMaxTwoPass`]: one pass toward the global maximum from
//!   each end. O(n) time, O(1) space.
//!
//! All three are pure functions over a borrowed profile and reproduce,
//! integer-exact, the ground-truth summation
//! Σᵢ max(0, min(leftMax(i), rightMax(i)) − height(i)). Totals accumulate
//! in `u64` regardless of the element width, so million-column profiles of
//! large heights cannot overflow.
//!
//! ## Quick start
//! ```
//! use landscape::engines::{GlobalMaxTwoPass, PeakWalk, TwoPointer};
//! use landscape::{Profile, WaterEngine};
//!
//! let profile = Profile::turing_complete_example();
//! assert_eq!(profile.water(), 28);
//! assert_eq!(PeakWalk.water(&profile), 28);
//! assert_eq!(TwoPointer.water(&profile), 28);
//! assert_eq!(GlobalMaxTwoPass.water(&profile), 28);
//! ```
//!
//! ## Synthetic profiles
//! The [`gen`] module provides the deterministic shapes (ramps, tents,
//! crosses, tilings, staggered declines) used by the test suite, the
//! benchmarks and the `scale_probe` binary.

pub mod engines;
pub mod gen;
pub mod profile;
pub mod traits;

pub use crate::profile::Profile;
pub use crate::traits::{Height, WaterEngine};

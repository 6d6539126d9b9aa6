//! The three interchangeable trapped-water engines.
//!
//! Each implements [`WaterEngine`](crate::traits::WaterEngine) and returns
//! integer-identical totals; they differ only in complexity:
//!
//! - [`peak_walk`]   : span-by-span walk with a three-state peak finder.
//!   O(n) typical, O(n²) on densely staggered declining peaks.
//! - [`two_pointer`] : two cursors closing inward. O(n) time, O(1) space.
//! - [`global_max`]  : two passes meeting at the global maximum. O(n) time,
//!   O(1) space.

pub mod global_max;
pub mod peak_walk;
pub mod two_pointer;

pub use global_max::GlobalMaxTwoPass;
pub use peak_walk::PeakWalk;
pub use two_pointer::TwoPointer;

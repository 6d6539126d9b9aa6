//! The profile data model and the named example landscapes.

use std::ops::Deref;

use crate::engines::TwoPointer;
use crate::traits::{Height, WaterEngine};

/// An elevation profile: one non-negative integer height per unit-width
/// column, indexed left to right.
///
/// A `Profile` is plain data. Engines borrow it (it derefs to `[H]`) for the
/// duration of one computation and never mutate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile<H: Height>(Vec<H>);

impl<H: Height> Profile<H> {
    /// Wrap an owned sequence of heights.
    pub fn new(heights: Vec<H>) -> Self {
        Self(heights)
    }

    /// The column heights, leftmost first.
    pub fn heights(&self) -> &[H] {
        &self.0
    }

    /// Unwrap into the owned heights.
    pub fn into_heights(self) -> Vec<H> {
        self.0
    }

    /// Total trapped water, computed with the default engine.
    ///
    /// The default is [`TwoPointer`]: linear time, constant space, and no
    /// adversarial worst case. The other engines stay available through
    /// [`WaterEngine`] when the trade-off matters.
    pub fn water(&self) -> u64 {
        TwoPointer.water(&self.0)
    }
}

impl<H: Height> Deref for Profile<H> {
    type Target = [H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<H: Height> From<Vec<H>> for Profile<H> {
    fn from(heights: Vec<H>) -> Self {
        Self(heights)
    }
}

impl<H: Height> FromIterator<H> for Profile<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Profile<u32> {
    /// A landscape with a rising and falling peak; traps a volume of 28.
    pub fn turing_complete_example() -> Self {
        Self(vec![4, 6, 1, 4, 6, 5, 1, 4, 1, 2, 6, 5, 6, 1, 4, 2])
        //        0  0  5  2  0  1  5  2  5  4  0  1  0  3  0  0   = 28
    }

    /// A rising peak followed by staggered declining peaks; also traps 28.
    pub fn staggered_declining_peaks() -> Self {
        Self(vec![4, 6, 1, 4, 6, 5, 1, 4, 1, 2, 6, 4, 5, 1, 4, 2])
        //        0  0  5  2  0  1  5  2  5  4  0  1  0  3  0  0   = 28
    }
}

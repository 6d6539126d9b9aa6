//! Linear two-cursor trapped-water computation.

use crate::traits::{Height, WaterEngine};

/// Closes two cursors inward from the ends of the profile, tracking one
/// running maximum per side. O(n) time, O(1) extra space, no adversarial
/// worst case — this is the default engine.
///
/// At every step the side with the lower current column is settled: the
/// opposite side is known to hold a wall at least that high, so the settled
/// column's binding wall is exactly its own side's running maximum.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoPointer;

impl WaterEngine for TwoPointer {
    fn water<H: Height>(&self, heights: &[H]) -> u64 {
        if heights.len() < 2 {
            return 0;
        }

        let mut left = 0;
        let mut right = heights.len() - 1;
        let mut left_max = heights[left];
        let mut right_max = heights[right];
        let mut total = 0u64;

        while left < right {
            if heights[left] < heights[right] {
                if heights[left] > left_max {
                    left_max = heights[left];
                } else {
                    total += left_max.as_volume() - heights[left].as_volume();
                }
                left += 1;
            } else {
                if heights[right] > right_max {
                    right_max = heights[right];
                } else {
                    total += right_max.as_volume() - heights[right].as_volume();
                }
                right -= 1;
            }
        }

        total
    }
}

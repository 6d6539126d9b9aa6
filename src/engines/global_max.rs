//! Trapped-water computation via two passes meeting at the global maximum.

use crate::traits::{Height, WaterEngine};

/// Locates the highest column (first occurrence on ties), then sweeps
/// toward it from each end with a running maximum. O(n) time, O(1) extra
/// space.
///
/// The global maximum is a valid wall for both sides: no column on either
/// side can out-tower it, so each sweep's running maximum is the binding
/// bound for every column it passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalMaxTwoPass;

impl WaterEngine for GlobalMaxTwoPass {
    fn water<H: Height>(&self, heights: &[H]) -> u64 {
        if heights.is_empty() {
            return 0;
        }

        // Strict comparison keeps the first occurrence on ties; the columns
        // between tied maxima are then settled by the right sweep.
        let mut highest = 0;
        for (idx, &h) in heights.iter().enumerate() {
            if h > heights[highest] {
                highest = idx;
            }
        }

        let mut total = 0u64;

        let mut left_max = 0u64;
        for &h in &heights[..highest] {
            let h = h.as_volume();
            if h > left_max {
                left_max = h;
            } else {
                total += left_max - h;
            }
        }

        let mut right_max = 0u64;
        for &h in heights[highest + 1..].iter().rev() {
            let h = h.as_volume();
            if h > right_max {
                right_max = h;
            } else {
                total += right_max - h;
            }
        }

        total
    }
}

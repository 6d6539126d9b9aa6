//! Span-by-span trapped-water computation.
//!
//! The profile is segmented into peak-to-peak spans: starting from column 0,
//! a scanner walks right until it finds the next column that bounds a
//! water-holding span, the water between the two boundaries is summed, and
//! the found boundary becomes the start of the next span. The subtlety is a
//! profile that never climbs back to the current start height — staggered
//! declining peaks — where the best available right boundary is a lower
//! local high that still closes a partial pocket.

use crate::traits::{Height, WaterEngine};

/// Walks the profile left to right in peak-delimited spans and sums the
/// water held in each span.
///
/// Typical cost is O(n). Profiles made of densely staggered declining peaks
/// force a fresh scan per span and degrade to O(n²); that trade-off is
/// inherent to the walk and deliberately kept — the sibling engines are the
/// linear alternatives.
// TODO: the O(n²) staggered-decline worst case could be bounded by walking
// from both ends of the profile at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct PeakWalk;

/// Scanner state while searching for the next bounding peak.
///
/// `Valley` carries the best right boundary seen so far: the highest local
/// high since the last local minimum. Keeping the index inside the variant
/// means "we remember a candidate peak" and "we are past a valley" cannot
/// disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Walker {
    /// Still on the level or climbing away from the span start.
    LevelOrInclining,
    /// Descending from a local high; no valley floor passed yet.
    Declined,
    /// Past a local minimum; `best` is the candidate right boundary.
    Valley { best: usize },
}

impl WaterEngine for PeakWalk {
    fn water<H: Height>(&self, heights: &[H]) -> u64 {
        let mut total = 0u64;
        let mut start = 0;
        loop {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("next_peak", start);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            match next_peak(heights, start) {
                Some(peak) => {
                    total += water_between(heights, start, peak);
                    start = peak;
                }
                None => return total,
            }
        }
    }
}

/// Index of the next peak bounding a span that starts at `start`, or `None`
/// when no water can be trapped from `start` onward.
///
/// A column at or above the start height closes the span immediately, in
/// any state. Otherwise the walker transitions: a drop below the previous
/// column starts the decline, a rise above the previous column marks a
/// passed valley, and from then on strictly-higher-or-equal local highs
/// supersede the remembered candidate. A scan that exhausts the profile
/// mid-`Valley` returns the candidate — the remaining pocket is bounded by
/// a peak lower than the start.
fn next_peak<H: Height>(heights: &[H], start: usize) -> Option<usize> {
    let mut walker = Walker::LevelOrInclining;
    for idx in start + 1..heights.len() {
        if heights[idx] >= heights[start] {
            return Some(idx);
        }
        match walker {
            Walker::Valley { best } if heights[idx] >= heights[best] => {
                walker = Walker::Valley { best: idx };
            }
            Walker::Declined if heights[idx] > heights[idx - 1] => {
                walker = Walker::Valley { best: idx };
            }
            Walker::LevelOrInclining if heights[idx] < heights[idx - 1] => {
                walker = Walker::Declined;
            }
            _ => {}
        }
    }
    match walker {
        Walker::Valley { best } => Some(best),
        _ => None,
    }
}

/// Water held strictly between two bounding columns.
///
/// The water line is the lower of the two boundary heights; interior
/// columns above it (possible when the right boundary is a remembered
/// valley candidate) contribute nothing.
fn water_between<H: Height>(heights: &[H], start: usize, end: usize) -> u64 {
    let bound = heights[start].min(heights[end]).as_volume();
    heights[start + 1..end]
        .iter()
        .map(|&h| bound.saturating_sub(h.as_volume()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{next_peak, water_between, PeakWalk};
    use crate::profile::Profile;
    use crate::traits::WaterEngine;

    #[test]
    fn fixtures_trap_28() {
        assert_eq!(PeakWalk.water(&Profile::turing_complete_example()), 28);
        assert_eq!(PeakWalk.water(&Profile::staggered_declining_peaks()), 28);
    }

    #[test]
    fn empty_and_single_trap_nothing() {
        assert_eq!(PeakWalk.water::<u32>(&[]), 0);
        assert_eq!(PeakWalk.water(&[9u32]), 0);
    }

    #[test]
    fn monotonic_profiles_trap_nothing() {
        assert_eq!(PeakWalk.water(&[1u32, 2, 3, 4, 5]), 0);
        assert_eq!(PeakWalk.water(&[5u32, 4, 3, 2, 1]), 0);
    }

    #[test]
    fn partial_pocket_when_profile_never_recovers() {
        // Start at 10, decline, then a valley bounded by a lower peak of 5:
        // only the column of height 1 sits below the 5-high water line.
        assert_eq!(PeakWalk.water(&[10u32, 7, 1, 5]), 4);
    }

    #[test]
    fn next_peak_closes_on_equal_height() {
        assert_eq!(next_peak(&[3u32, 3, 0], 0), Some(1));
    }

    #[test]
    fn next_peak_returns_valley_candidate_at_end_of_scan() {
        // Never returns to 10; the highest post-valley local high is index 3.
        assert_eq!(next_peak(&[10u32, 7, 1, 5], 0), Some(3));
        // Later, equal-or-higher local highs supersede earlier candidates.
        assert_eq!(next_peak(&[10u32, 7, 1, 5, 0, 5], 0), Some(5));
    }

    #[test]
    fn next_peak_none_on_pure_decline() {
        assert_eq!(next_peak(&[9u32, 6, 3, 1], 0), None);
        assert_eq!(next_peak::<u32>(&[], 0), None);
        assert_eq!(next_peak(&[4u32], 0), None);
    }

    #[test]
    fn water_between_ignores_interior_above_the_line() {
        // Bound is min(10, 5) = 5; the interior 7 stays dry.
        assert_eq!(water_between(&[10u32, 7, 1, 5], 0, 3), 4);
    }

    #[test]
    fn plateau_holds_a_single_basin() {
        assert_eq!(PeakWalk.water(&[5u32, 5, 5, 0, 5, 5, 5]), 5);
        assert_eq!(PeakWalk.water(&[5u32, 5, 5, 0, 0, 0, 5, 5, 5]), 15);
    }
}

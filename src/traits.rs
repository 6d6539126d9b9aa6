//! Core trait definitions shared by the water engines.
//!
//! Two seams are defined here:
//! - [`Height`]: the element type of a profile, an ordered non-negative
//!   integer of any width.
//! - [`WaterEngine`]: the single operation every engine implements.
//!
//! Engines are interchangeable values behind [`WaterEngine`]; picking one is
//! a complexity trade-off, never a semantic one.

/// A column height: an ordered non-negative integer.
///
/// Implemented only for the unsigned integer widths, so the "all heights
/// are ≥ 0" precondition is a property of the type rather than a runtime
/// check. Engines never subtract in `Self` — every shortfall is computed
/// after widening with [`as_volume`](Height::as_volume) — so the only
/// requirements are copyability and total order.
pub trait Height: Copy + Ord {
    /// Widen to the accumulator type.
    ///
    /// Totals are always summed in `u64` regardless of the element width,
    /// so profiles with millions of large columns cannot overflow.
    fn as_volume(self) -> u64;
}

macro_rules! impl_height {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Height for $ty {
                #[inline]
                fn as_volume(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_height!(u8, u16, u32, u64, usize);

/// A strategy for computing the total trapped water of a profile.
///
/// Semantics, shared by every implementation:
/// - The heights are borrowed for the duration of one call and never
///   mutated; no state survives between calls, so one engine value may be
///   used concurrently on different profiles.
/// - The result is exactly the ground-truth summation
///   Σᵢ max(0, min(leftMax(i), rightMax(i)) − height(i)),
///   where `leftMax(i)` / `rightMax(i)` are the maxima over `[0, i]` and
///   `[i, n-1]`. Implementations differ only in how they recover those
///   bounds without materializing them per column.
pub trait WaterEngine {
    /// Total volume of water trapped between the peaks of `heights`.
    ///
    /// Profiles of length 0 or 1 trap nothing.
    fn water<H: Height>(&self, heights: &[H]) -> u64;
}

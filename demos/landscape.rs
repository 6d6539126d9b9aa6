//! Prints the example landscapes and their trapped-water totals.
//!
//! Run with:
//! `cargo run --example landscape`

use landscape::engines::{GlobalMaxTwoPass, PeakWalk, TwoPointer};
use landscape::{Profile, WaterEngine};

fn main() {
    let examples = [
        ("turing_complete_example", Profile::turing_complete_example()),
        (
            "staggered_declining_peaks",
            Profile::staggered_declining_peaks(),
        ),
    ];

    for (name, profile) in examples {
        println!("{name}: {:?}", profile.heights());
        println!("  peak_walk           -> {}", PeakWalk.water(&profile));
        println!("  two_pointer         -> {}", TwoPointer.water(&profile));
        println!(
            "  global_max_two_pass -> {}",
            GlobalMaxTwoPass.water(&profile)
        );
    }
}

//! Test vector detection

use log::debug;

use crate::models::{PatternAnalysis, PatternHit, RomImage, TestPattern};
use crate::utils::pattern::count_non_overlapping;

/// Count fixed fill patterns and ascending byte windows
pub fn find_test_vectors(rom: &RomImage) -> PatternAnalysis {
    let data = rom.bytes();

    let hits = TestPattern::ALL
        .iter()
        .filter_map(|&pattern| {
            let count = count_non_overlapping(data, &pattern.bytes());
            debug!("Pattern {}: {} occurrences", pattern.hex(), count);
            (count > 0).then_some(PatternHit { pattern, count })
        })
        .collect();

    PatternAnalysis {
        hits,
        sequential_windows: count_sequential_windows(data),
    }
}

/// Count windows `[b, b+1, b+2, b+3]` starting at each `i` in `[0, len-4)`
///
/// Windows overlap: `00 01 02 03 04` contains two. The window starting at
/// `len - 4` is not examined.
pub fn count_sequential_windows(data: &[u8]) -> usize {
    (0..data.len().saturating_sub(4))
        .filter(|&i| {
            let b = data[i];
            b <= 0xFC
                && data[i + 1] == b + 1
                && data[i + 2] == b + 2
                && data[i + 3] == b + 3
        })
        .count()
}

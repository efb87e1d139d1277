//! Pattern matching utilities

/// Count non-overlapping occurrences of `pattern`, scanning left to right
///
/// After a match the scan resumes just past it, so `[0; 8]` holds two
/// `[0; 4]` matches, not five.
pub fn count_non_overlapping(data: &[u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() || pattern.len() > data.len() {
        return 0;
    }

    let mut count = 0;
    let mut i = 0;
    while i + pattern.len() <= data.len() {
        if &data[i..i + pattern.len()] == pattern {
            count += 1;
            i += pattern.len();
        } else {
            i += 1;
        }
    }

    count
}

/// Whether a byte is printable ASCII (0x20..=0x7E)
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

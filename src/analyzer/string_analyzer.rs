//! Printable ASCII string extraction

use log::debug;
use std::collections::HashSet;

use crate::models::{RomImage, StringRecord};
use crate::utils::pattern::is_printable;

/// Extract every printable run of at least `min_length` bytes
///
/// Returns all runs in offset order, duplicates included.
pub fn extract_strings(data: &[u8], min_length: usize) -> Vec<StringRecord> {
    let mut strings = Vec::new();
    let mut start = 0;
    let mut current_string = String::new();

    for (i, &byte) in data.iter().enumerate() {
        if is_printable(byte) {
            if current_string.is_empty() {
                start = i;
            }
            current_string.push(byte as char);
        } else {
            flush(&mut strings, &mut current_string, start, min_length);
        }
    }

    // A run can end at the end of the buffer
    flush(&mut strings, &mut current_string, start, min_length);

    strings
}

fn flush(strings: &mut Vec<StringRecord>, current: &mut String, start: usize, min_length: usize) {
    if !current.is_empty() && current.len() >= min_length {
        strings.push(StringRecord {
            offset: start,
            text: std::mem::take(current),
        });
    } else {
        current.clear();
    }
}

/// Keep only the first occurrence of each distinct text
pub fn unique_strings(strings: Vec<StringRecord>) -> Vec<StringRecord> {
    let mut seen = HashSet::new();
    strings
        .into_iter()
        .filter(|record| seen.insert(record.text.clone()))
        .collect()
}

/// Unique strings of the image, in offset order
pub fn analyze_strings(rom: &RomImage, min_length: usize) -> Vec<StringRecord> {
    let all = extract_strings(rom.bytes(), min_length);
    let total = all.len();
    let unique = unique_strings(all);
    debug!("Found {} strings ({} unique) with min length {}", total, unique.len(), min_length);
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_string_surrounded_by_binary() {
        let mut data = vec![0x00u8; 100];
        data[50..54].copy_from_slice(b"TEST");

        let strings = analyze_strings(&RomImage::new(data), 4);
        assert_eq!(
            strings,
            vec![StringRecord { offset: 50, text: "TEST".to_string() }]
        );
    }

    #[test]
    fn test_short_runs_are_dropped() {
        let data = b"\x00ABC\x00ABCD\x01";
        let strings = extract_strings(data, 4);
        assert_eq!(strings.len(), 1);
        assert_eq!(strings[0].offset, 5);
        assert_eq!(strings[0].text, "ABCD");
    }

    #[test]
    fn test_run_at_end_of_buffer() {
        let data = b"\xFFHELLO";
        let strings = extract_strings(data, 4);
        assert_eq!(strings, vec![StringRecord { offset: 1, text: "HELLO".to_string() }]);
    }

    #[test]
    fn test_duplicates_keep_first_offset() {
        let data = b"WORD\x00OTHER\x00WORD\x00";
        let strings = unique_strings(extract_strings(data, 4));
        assert_eq!(
            strings,
            vec![
                StringRecord { offset: 0, text: "WORD".to_string() },
                StringRecord { offset: 5, text: "OTHER".to_string() },
            ]
        );
    }

    #[test]
    fn test_space_and_tilde_are_printable() {
        let data = b"\x7F ~ ~\x7F";
        let strings = extract_strings(data, 4);
        assert_eq!(strings, vec![StringRecord { offset: 1, text: " ~ ~".to_string() }]);
    }
}

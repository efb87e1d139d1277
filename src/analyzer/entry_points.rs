//! Entry point discovery

use log::debug;

use crate::constants::header::header;
use crate::constants::opcodes::opcodes;
use crate::models::{EntryPointCandidate, EntryPointOrigin, RomImage};

/// Collect entry point candidates in priority order
///
/// The reset vector comes first when the image is large enough to hold a
/// header, then every `JMP abs` byte, then every `JSR abs` byte. Any data
/// byte equal to one of those opcodes is reported too; see
/// [`crate::analyzer::heuristics`]. The list is neither deduplicated nor
/// capped.
pub fn find_entry_points(rom: &RomImage) -> Vec<EntryPointCandidate> {
    let mut entry_points = Vec::new();

    if rom.len() >= header::HEADER_END {
        if let Some(target) = rom.read_u16_le(header::RESET_VECTOR) {
            entry_points.push(EntryPointCandidate {
                origin: EntryPointOrigin::ResetVector,
                target,
            });
        }
    }

    entry_points.extend(scan_absolute(rom, opcodes::JMP_ABS, |offset| {
        EntryPointOrigin::Jump { offset }
    }));
    entry_points.extend(scan_absolute(rom, opcodes::JSR_ABS, |offset| {
        EntryPointOrigin::Call { offset }
    }));

    debug!("Found {} entry point candidates", entry_points.len());
    entry_points
}

/// Every `opcode` byte followed by a two-byte little-endian operand
///
/// A match in the last two bytes has no complete operand and is skipped.
fn scan_absolute<F>(rom: &RomImage, opcode: u8, origin: F) -> Vec<EntryPointCandidate>
where
    F: Fn(usize) -> EntryPointOrigin,
{
    rom.bytes()
        .iter()
        .enumerate()
        .filter(|&(_, &byte)| byte == opcode)
        .filter_map(|(offset, _)| {
            rom.read_u16_le(offset + 1).map(|target| EntryPointCandidate {
                origin: origin(offset),
                target,
            })
        })
        .collect()
}

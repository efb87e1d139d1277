//! Opcode frequency sampling

use log::debug;

use crate::constants::opcodes::opcodes;
use crate::models::{OpcodeCount, RomImage};

/// Rank opcode bytes sampled at even offsets by frequency
///
/// Only offsets `0, 2, 4, ...` below `len - 1` are sampled; operand widths
/// are never decoded, so this is a coarse fingerprint of the image rather
/// than a disassembly. Ties keep the order in which opcodes were first
/// seen.
pub fn opcode_histogram(rom: &RomImage) -> Vec<OpcodeCount> {
    let data = rom.bytes();
    let mut counts = [0usize; 256];
    let mut first_seen: Vec<u8> = Vec::new();

    for i in (0..data.len().saturating_sub(1)).step_by(2) {
        let opcode = data[i];
        if counts[opcode as usize] == 0 {
            first_seen.push(opcode);
        }
        counts[opcode as usize] += 1;
    }

    // Stable sort keeps first-seen order among equal counts
    first_seen.sort_by(|a, b| counts[*b as usize].cmp(&counts[*a as usize]));

    debug!("Sampled {} distinct opcode bytes", first_seen.len());

    first_seen
        .into_iter()
        .map(|opcode| OpcodeCount {
            opcode,
            mnemonic: opcodes::mnemonic(opcode).to_string(),
            count: counts[opcode as usize],
        })
        .collect()
}

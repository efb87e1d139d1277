//! Block-level memory map classification

use log::debug;

use crate::models::{MemoryRegion, RegionKind, RomImage};
use crate::utils::pattern::is_printable;

/// Classify one block by its byte statistics
///
/// First match wins: more than 90% zero bytes, then more than 90% 0xFF
/// bytes, then more than 70% printable ASCII. Everything else is
/// [`RegionKind::Code`].
pub fn classify_block(block: &[u8]) -> RegionKind {
    let len = block.len();
    let zero_count = block.iter().filter(|&&b| b == 0x00).count();
    let ff_count = block.iter().filter(|&&b| b == 0xFF).count();
    let printable_count = block.iter().filter(|&&b| is_printable(b)).count();

    // Integer form of count > len * ratio
    if zero_count * 10 > len * 9 {
        RegionKind::ZeroFilled
    } else if ff_count * 10 > len * 9 {
        RegionKind::FFFilled
    } else if printable_count * 10 > len * 7 {
        RegionKind::TextData
    } else {
        RegionKind::Code
    }
}

/// Split the image into `block_size` blocks and merge equal neighbours
///
/// The returned regions are sorted, never overlap, and cover
/// `[0, rom.len())` exactly. An empty image has no regions.
pub fn analyze_memory_map(rom: &RomImage, block_size: usize) -> Vec<MemoryRegion> {
    let block_size = block_size.max(1);
    let mut regions: Vec<MemoryRegion> = Vec::new();

    for (index, block) in rom.bytes().chunks(block_size).enumerate() {
        let start = index * block_size;
        let end = start + block.len();
        let kind = classify_block(block);

        if let Some(last) = regions.last_mut() {
            if last.kind == kind {
                last.end = end;
                continue;
            }
        }
        regions.push(MemoryRegion { start, end, kind });
    }

    debug!("Memory map has {} regions", regions.len());
    regions
}

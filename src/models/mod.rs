//! Data models for ROM analysis

pub mod rom;
pub mod header;
pub mod analysis;
#[cfg(test)]
mod tests;

pub use self::rom::RomImage;
pub use self::header::RomHeader;
pub use self::analysis::{
    EntryPointCandidate, EntryPointOrigin, MemoryRegion, OpcodeCount, PatternAnalysis,
    PatternHit, RegionKind, RomAnalysis, StringRecord, TestPattern,
};

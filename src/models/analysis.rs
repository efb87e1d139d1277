//! Records produced by the analysis passes

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::config::AnalyzerConfig;
use crate::models::header::RomHeader;

/// Frequency of one sampled opcode byte
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpcodeCount {
    /// Opcode byte
    pub opcode: u8,
    /// Mnemonic, or "Unknown"
    pub mnemonic: String,
    /// Number of sampled occurrences
    pub count: usize,
}

/// A printable ASCII run and the offset of its first occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub offset: usize,
    pub text: String,
}

/// Fixed 4-byte fill patterns that often mark test data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestPattern {
    AllZero,
    AllOne,
    AlternatingAA,
    Alternating55,
}

impl TestPattern {
    /// Every pattern, in report order
    pub const ALL: [TestPattern; 4] = [
        TestPattern::AllZero,
        TestPattern::AllOne,
        TestPattern::AlternatingAA,
        TestPattern::Alternating55,
    ];

    pub fn bytes(self) -> [u8; 4] {
        match self {
            TestPattern::AllZero => [0x00; 4],
            TestPattern::AllOne => [0xFF; 4],
            TestPattern::AlternatingAA => [0xAA; 4],
            TestPattern::Alternating55 => [0x55; 4],
        }
    }

    /// Lowercase hex spelling, e.g. "aaaaaaaa"
    pub fn hex(self) -> String {
        self.bytes().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// Non-overlapping occurrence count of a [`TestPattern`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternHit {
    pub pattern: TestPattern,
    pub count: usize,
}

/// Results of the test vector scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// Patterns seen at least once
    pub hits: Vec<PatternHit>,
    /// Overlapping windows of the form [b, b+1, b+2, b+3]
    pub sequential_windows: usize,
}

/// Coarse content class of a memory block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKind {
    ZeroFilled,
    FFFilled,
    TextData,
    /// Fallback when no filler or text rule matches
    Code,
}

impl RegionKind {
    pub fn label(self) -> &'static str {
        match self {
            RegionKind::ZeroFilled => "Zero-filled",
            RegionKind::FFFilled => "FF-filled",
            RegionKind::TextData => "Text/Data",
            RegionKind::Code => "Code",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Half-open byte range `[start, end)` sharing one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRegion {
    pub start: usize,
    pub end: usize,
    pub kind: RegionKind,
}

/// Where an entry point candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryPointOrigin {
    /// Header reset vector
    ResetVector,
    /// `JMP abs` at the given offset
    Jump { offset: usize },
    /// `JSR abs` at the given offset
    Call { offset: usize },
}

impl fmt::Display for EntryPointOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryPointOrigin::ResetVector => write!(f, "Reset Vector"),
            EntryPointOrigin::Jump { offset } => write!(f, "JMP at 0x{:06X}", offset),
            EntryPointOrigin::Call { offset } => write!(f, "JSR at 0x{:06X}", offset),
        }
    }
}

/// A possible code entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPointCandidate {
    pub origin: EntryPointOrigin,
    pub target: u16,
}

/// Everything learned about one ROM image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomAnalysis {
    /// Path or name the image was loaded from
    pub source: String,
    /// Image length in bytes
    pub size: usize,
    /// SHA-256 of the image, lowercase hex
    pub sha256: String,
    /// Decoded header, absent for images shorter than 0x8000 bytes
    pub header: Option<RomHeader>,
    /// Why the header is absent
    pub header_diagnostic: Option<String>,
    /// All sampled opcodes, most frequent first
    pub opcodes: Vec<OpcodeCount>,
    /// Unique strings in offset order
    pub strings: Vec<StringRecord>,
    /// Test pattern counts
    pub patterns: PatternAnalysis,
    /// Memory map covering the whole image
    pub regions: Vec<MemoryRegion>,
    /// Entry point candidates, uncapped
    pub entry_points: Vec<EntryPointCandidate>,
    /// Settings used for this run
    pub config: AnalyzerConfig,
}

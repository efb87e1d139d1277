//! Core analysis engine for SNES ROM images

pub mod loader;
pub mod header;
pub mod opcodes;
pub mod string_analyzer;
pub mod pattern;
pub mod memory_map;
pub mod entry_points;
pub mod heuristics;

use log::{info, warn};
use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::errors::AnalyzerResult;
use crate::models::{RomAnalysis, RomImage};
use crate::utils::hash::sha256_hex;

pub use self::entry_points::find_entry_points;
pub use self::header::decode_header;
pub use self::loader::load_rom;
pub use self::memory_map::{analyze_memory_map, classify_block};
pub use self::opcodes::opcode_histogram;
pub use self::pattern::find_test_vectors;
pub use self::string_analyzer::analyze_strings;

/// Main analyzer that runs every pass over one image
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create a new analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Load a ROM file and analyze it
    pub fn analyze_file(&self, path: &Path) -> AnalyzerResult<RomAnalysis> {
        let rom = loader::load_rom(path)?;
        Ok(self.analyze(&path.display().to_string(), &rom))
    }

    /// Analyze an already loaded image
    ///
    /// Never fails: a missing header becomes `header_diagnostic` and every
    /// other pass still runs over the full image.
    pub fn analyze(&self, source: &str, rom: &RomImage) -> RomAnalysis {
        info!("Analyzing ROM: {} ({} bytes)", source, rom.len());

        let (header, header_diagnostic) = match header::decode_header(rom) {
            Ok(header) => (Some(header), None),
            Err(e) => {
                warn!("Skipping header analysis: {}", e);
                (None, Some(e.to_string()))
            }
        };

        let analysis = RomAnalysis {
            source: source.to_string(),
            size: rom.len(),
            sha256: sha256_hex(rom.bytes()),
            header,
            header_diagnostic,
            opcodes: opcodes::opcode_histogram(rom),
            strings: string_analyzer::analyze_strings(rom, self.config.min_string_length),
            patterns: pattern::find_test_vectors(rom),
            regions: memory_map::analyze_memory_map(rom, self.config.block_size),
            entry_points: entry_points::find_entry_points(rom),
            config: self.config.clone(),
        };

        info!(
            "Analysis complete: {} opcodes, {} strings, {} regions, {} entry points",
            analysis.opcodes.len(),
            analysis.strings.len(),
            analysis.regions.len(),
            analysis.entry_points.len()
        );

        analysis
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

//! A library for static analysis of SNES ROM images
//!
//! This crate loads a cartridge image and reports its header fields,
//! opcode frequency, embedded strings, test patterns, a coarse memory map
//! and candidate entry points. Nothing is executed or emulated.

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod models;
pub mod utils;

use std::path::Path;

pub use config::AnalyzerConfig;
pub use errors::{AnalyzerError, AnalyzerResult};
pub use models::{RomAnalysis, RomImage};

/// Main entry point for analyzing a ROM file
pub fn analyze_rom(path: &Path, config: &AnalyzerConfig) -> AnalyzerResult<RomAnalysis> {
    analyzer::Analyzer::new(config.clone()).analyze_file(path)
}

/// Analyze an in-memory image
pub fn analyze_bytes(source: &str, data: Vec<u8>, config: &AnalyzerConfig) -> RomAnalysis {
    analyzer::Analyzer::new(config.clone()).analyze(source, &RomImage::new(data))
}

/// Version of the ROM analyzer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

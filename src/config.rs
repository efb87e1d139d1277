//! Analyzer tunables

use serde::{Deserialize, Serialize};

/// Tunables shared by every analysis pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Shortest printable run reported as a string
    pub min_string_length: usize,
    /// Number of opcodes shown in the frequency ranking
    pub top_opcodes: usize,
    /// Number of entry point candidates shown in the report
    pub max_entry_points: usize,
    /// Size of the blocks used by the memory map classifier
    pub block_size: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_string_length: 4,
            top_opcodes: 20,
            max_entry_points: 20,
            block_size: 0x1000,
        }
    }
}

impl AnalyzerConfig {
    /// Create a config with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the minimum string length
    pub fn with_min_string_length(mut self, min_string_length: usize) -> Self {
        self.min_string_length = min_string_length;
        self
    }
}

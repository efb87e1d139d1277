//! Constants used throughout the analyzer

pub mod header;
pub mod opcodes;

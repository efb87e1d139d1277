//! Utility functions and helpers

pub mod hash;
pub mod pattern;

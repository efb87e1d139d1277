//! Error handling for the ROM analyzer.
//!
//! Only loading failures are fatal. A ROM that is too small to carry a
//! header produces [`AnalyzerError::HeaderTooSmall`], which the analyzer
//! downgrades to a diagnostic so every other pass still runs.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ROM analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The ROM file does not exist.
    #[error("ROM file not found: {}", .path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The ROM file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image is shorter than the end of the header block.
    #[error("ROM too small for SNES header ({len} bytes, need at least 0x8000)")]
    HeaderTooSmall {
        /// Length of the image in bytes
        len: usize,
    },

    /// Bad command line.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The analysis could not be serialized for export.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for the ROM analyzer.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Context information for errors.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// ROM path being analyzed, if applicable.
    pub path: Option<PathBuf>,

    /// Component where the error occurred (e.g., "loader").
    pub component: String,

    /// Operation being performed when the error occurred (e.g., "read_rom").
    pub operation: String,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "In {} while {}", self.component, self.operation)?;
        if let Some(path) = &self.path {
            write!(f, " for {}", path.display())?;
        }
        Ok(())
    }
}

/// Extension trait for attaching context to I/O results.
pub trait ErrorExt<T> {
    /// Attach full context to an error.
    ///
    /// A missing file becomes [`AnalyzerError::NotFound`]; any other I/O
    /// failure keeps its kind and gains the context in its message.
    fn with_context(self, context: ErrorContext) -> AnalyzerResult<T>;
}

impl<T> ErrorExt<T> for Result<T, std::io::Error> {
    fn with_context(self, context: ErrorContext) -> AnalyzerResult<T> {
        self.map_err(|e| match (e.kind(), &context.path) {
            (std::io::ErrorKind::NotFound, Some(path)) => AnalyzerError::NotFound { path: path.clone() },
            _ => AnalyzerError::Io(std::io::Error::new(e.kind(), format!("{}: {}", context, e))),
        })
    }
}

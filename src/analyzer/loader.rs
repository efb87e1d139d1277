//! ROM image loading

use log::{debug, info};
use std::path::Path;

use crate::errors::{AnalyzerResult, ErrorContext, ErrorExt};
use crate::models::RomImage;

/// Read the whole file at `path` into memory
///
/// A missing file yields [`crate::errors::AnalyzerError::NotFound`]; any
/// other read failure yields [`crate::errors::AnalyzerError::Io`].
pub fn load_rom(path: &Path) -> AnalyzerResult<RomImage> {
    debug!("Reading ROM image from {}", path.display());

    let data = std::fs::read(path).with_context(ErrorContext {
        path: Some(path.to_path_buf()),
        component: "loader".to_string(),
        operation: "read_rom".to_string(),
    })?;

    info!("Loaded ROM: {} ({} bytes)", path.display(), data.len());
    Ok(RomImage::new(data))
}

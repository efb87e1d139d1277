//! Report generation for ROM analyses

mod text;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use anyhow::{Context, Result};
use log::{error, info};

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::RomAnalysis;

/// Render the human-readable report
pub fn render_report(analysis: &RomAnalysis) -> String {
    text::generate(analysis)
}

/// Serialize the analysis to pretty JSON
pub fn to_json(analysis: &RomAnalysis) -> AnalyzerResult<String> {
    serde_json::to_string_pretty(analysis).map_err(|e| AnalyzerError::Serialization(e.to_string()))
}

/// Save the analysis as JSON to a file
pub fn save_report(analysis: &RomAnalysis, path: &Path) -> Result<()> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    info!("Saving report to absolute path: {}", absolute_path.display());

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        if !parent.exists() {
            info!("Creating directory: {}", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let json = to_json(analysis).with_context(|| "Failed to serialize analysis to JSON")?;

    info!("Serialized analysis to JSON ({} bytes)", json.len());

    let mut file = match File::create(&absolute_path) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to create file: {} - Error: {}", absolute_path.display(), e);
            return Err(anyhow::anyhow!("Failed to create file: {} - Error: {}", absolute_path.display(), e));
        }
    };

    if let Err(e) = file.write_all(json.as_bytes()) {
        error!("Failed to write to file: {} - Error: {}", absolute_path.display(), e);
        return Err(anyhow::anyhow!("Failed to write to file: {} - Error: {}", absolute_path.display(), e));
    }

    info!("Report saved successfully to: {}", absolute_path.display());

    Ok(())
}

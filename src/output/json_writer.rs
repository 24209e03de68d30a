//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analysis::AnalysisResult;
use crate::error::Result;

/// Writes the full analysis as pretty-printed JSON.
///
/// Timestamps are local and written without an offset
/// (`2024-01-01T09:00:00`).
pub fn write_json(result: &AnalysisResult, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(result)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

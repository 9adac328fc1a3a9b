//! JSON output writer for message tables and analysis reports.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::core::models::{OutputConfig, records};
use crate::error::Result;
use crate::stats::AnalysisReport;

/// Writes messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"date": "2023-02-01", "time": "10:00", "sender": "Alice", "body": "Hello"},
///   {"date": "2023-02-01", "time": "10:05", "sender": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same as [`write_json`], returned as a string.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records(messages, config))?)
}

/// Writes an [`AnalysisReport`] as pretty-printed JSON.
pub fn write_report_json(report: &AnalysisReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Serializes an [`AnalysisReport`] as pretty-printed JSON.
pub fn report_to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

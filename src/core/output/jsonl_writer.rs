//! JSON Lines (JSONL) output writer.
//!
//! One JSON object per line, which suits line-oriented tools (`jq -c`,
//! `grep`) and loading into dataframes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Message;
use crate::core::models::{MessageRecord, OutputConfig};
use crate::error::Result;

/// Writes messages to JSONL (JSON Lines) format.
///
/// # Format
/// ```text
/// {"date":"2023-02-01","time":"10:00","sender":"Alice","body":"Hello"}
/// {"date":"2023-02-01","time":"10:05","sender":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Same as [`write_jsonl`], returned as a string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[Message], writer: &mut W, config: &OutputConfig) -> Result<()> {
    for msg in messages.iter().filter(|m| config.keeps(m)) {
        serde_json::to_writer(&mut *writer, &MessageRecord::from_message(msg, config))?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

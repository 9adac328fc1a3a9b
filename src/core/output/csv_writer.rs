//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::core::models::{MessageRecord, OutputConfig};
use crate::error::{ChatlensError, Result};

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `date`, `time`, `sender`, `body`, then with
///   [`OutputConfig::include_calendar`] `year`, `month`, `month_name`,
///   `day`, `day_name`, `hour`, `minute`, `hour_range`
/// - Encoding: UTF-8
pub fn write_csv(
    messages: &[Message],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file, config)
}

/// Same as [`write_csv`], returned as a string.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(build_header(config))?;
    for msg in messages.iter().filter(|m| config.keeps(m)) {
        writer.write_record(build_record(&MessageRecord::from_message(msg, config)))?;
    }

    writer.flush().map_err(ChatlensError::from)
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["date", "time", "sender", "body"];
    if config.include_calendar {
        header.extend([
            "year",
            "month",
            "month_name",
            "day",
            "day_name",
            "hour",
            "minute",
            "hour_range",
        ]);
    }
    header
}

fn build_record(record: &MessageRecord<'_>) -> Vec<String> {
    let mut row = vec![
        record.date.clone(),
        record.time.clone(),
        record.sender.to_string(),
        record.body.to_string(),
    ];

    if let Some(cal) = &record.calendar {
        row.extend([
            cal.year.to_string(),
            cal.month.to_string(),
            cal.month_name.to_string(),
            cal.day.to_string(),
            cal.day_name.to_string(),
            cal.hour.to_string(),
            cal.minute.to_string(),
            cal.hour_range.clone(),
        ]);
    }

    row
}

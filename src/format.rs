//! Record table formats and format dispatch.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::core::models::OutputConfig;
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::normalize::normalize;
//! use chatlens::parser::ExportParser;
//!
//! let chat = normalize(ExportParser::new().parse_str("01/02/23, 10:00 - Alice: Hi")?, true);
//!
//! let format = OutputFormat::from_path("messages.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(chat.messages(), format, &OutputConfig::new())?;
//! assert!(jsonl.contains("\"sender\":\"Alice\""));
//! # Ok(())
//! # }
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # example().unwrap();
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::{ChatlensError, Result};

/// File format of an exported message table.
///
/// ```rust
/// use chatlens::format::OutputFormat;
///
/// let format: OutputFormat = "ndjson".parse().unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with `;` delimiter.
    #[default]
    Csv,
    /// One JSON array.
    Json,
    /// One JSON object per line (NDJSON).
    Jsonl,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Accepted names, for help texts and error messages.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Cargo feature that provides the writer for this format.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidFormat`] for a missing or unknown
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse().map_err(|_| {
            ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_disabled(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}

/// Writes a message table to `path` in `format`.
///
/// # Errors
///
/// Fails if the writer's feature is disabled or the file cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[Message],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders a message table as a string in `format`.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[Message],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

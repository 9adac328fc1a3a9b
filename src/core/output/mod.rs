//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`]: CSV with semicolon delimiter (`csv-output` feature)
//! - [`write_json`] / [`to_json`]: JSON array of records (`json-output` feature)
//! - [`write_jsonl`] / [`to_jsonl`]: JSON Lines, one record per line (`json-output` feature)
//! - [`write_report_json`] / [`report_to_json`]: a full
//!   [`AnalysisReport`](crate::stats::AnalysisReport) (`json-output` feature)
//!
//! | Format | Use Case |
//! |--------|----------|
//! | CSV | spreadsheets, pandas `read_csv(sep=";")` |
//! | JSON | structured data, APIs |
//! | JSONL | line-oriented tools, large chats |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::models::OutputConfig;
//! use chatlens::core::output::{to_csv, write_csv, write_jsonl};
//! use chatlens::normalize::normalize;
//! use chatlens::parser::ExportParser;
//!
//! let raw = ExportParser::new().parse("chat.txt".as_ref())?;
//! let chat = normalize(raw, true);
//!
//! let config = OutputConfig::new().with_calendar();
//! write_csv(chat.messages(), "messages.csv", &config)?;
//! write_jsonl(chat.messages(), "messages.jsonl", &config)?;
//!
//! let csv_string = to_csv(chat.messages(), &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json, write_report_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

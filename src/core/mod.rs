//! Post-parse processing for chatlens.
//!
//! - [`filter`]: date-range and sender filtering
//! - [`models`]: flat record shape and output options
//! - [`output`]: format writers (CSV, JSON, JSONL, report JSON)

pub mod filter;
pub mod models;
pub mod output;

pub use filter::{FilterConfig, apply_filters};
pub use models::{MessageRecord, OutputConfig};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl, write_report_json};

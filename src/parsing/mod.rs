//! Shared parsing utilities.
//!
//! - [`layout`]: message-start patterns and layout auto-detection, used by
//!   the line parser
//! - [`timestamp`]: date/time parsing under a day/month order, used by the
//!   normalizer

pub mod layout;
pub mod timestamp;

pub use layout::{DETECTION_SAMPLE, ExportLayout, MessageStart, detect_layout};
pub use timestamp::parse_timestamp;

//! Record types produced by the parser and the normalizer.
//!
//! - [`RawMessage`] is what the line parser emits: the timestamp still as
//!   text, an optional sender, and the (possibly multi-line) body.
//! - [`Message`] is the normalized record: a parsed timestamp plus every
//!   calendar field the aggregators group by.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let msg = Message::new("Alice", ts, "Hello there");
//!
//! assert_eq!(msg.month_name, "February");
//! assert_eq!(msg.day_name, "Wednesday");
//! assert_eq!(msg.hour_range(), "10-11");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Sender assigned to system lines that carry no author
/// ("Messages and calls are end-to-end encrypted", "X added Y", ...).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Pseudo-user meaning "no sender filter".
pub const EVERYONE: &str = "Everyone";

/// One logical message as it appears in the export, before normalization.
///
/// A logical message may span several physical lines; continuation lines are
/// already folded into `body` (joined with `\n`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// The `DATE, TIME` stamp exactly as exported, e.g. `01/02/23, 10:00`.
    pub timestamp_text: String,

    /// Author name, or `None` for system/notification lines.
    pub sender: Option<String>,

    /// Message text. May contain newlines.
    pub body: String,
}

impl RawMessage {
    /// Creates a raw message.
    pub fn new(
        timestamp_text: impl Into<String>,
        sender: Option<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_text: timestamp_text.into(),
            sender,
            body: body.into(),
        }
    }

    /// Returns `true` for lines without an identifiable author.
    pub fn is_system(&self) -> bool {
        self.sender.is_none()
    }
}

/// A normalized chat message with derived calendar fields.
///
/// | Field | Derived from |
/// |-------|--------------|
/// | `date`, `year`, `month`, `day` | calendar date of `timestamp` |
/// | `month_name` | English month name (`"January"`) |
/// | `day_name` | English weekday name (`"Monday"`) |
/// | `hour`, `minute` | time of day of `timestamp` |
///
/// Build it with [`Message::new`] so the derived fields always agree with
/// the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author name, or [`GROUP_NOTIFICATION`] for system lines.
    pub sender: String,
    /// Local wall-clock time as exported (exports carry no timezone).
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub year: i32,
    /// 1–12
    pub month: u32,
    pub month_name: String,
    /// 1–31
    pub day: u32,
    pub day_name: String,
    /// 0–23
    pub hour: u32,
    /// 0–59
    pub minute: u32,
    /// Message text. May contain newlines.
    pub body: String,
}

impl Message {
    /// Creates a message and derives every calendar field from `timestamp`.
    pub fn new(sender: impl Into<String>, timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        let date = timestamp.date();
        Self {
            sender: sender.into(),
            timestamp,
            date,
            year: date.year(),
            month: date.month(),
            month_name: timestamp.format("%B").to_string(),
            day: date.day(),
            day_name: timestamp.format("%A").to_string(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            body: body.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the weekday of the message.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// One-hour bucket label used by the activity heatmap, e.g. `"23-00"`.
    pub fn hour_range(&self) -> String {
        hour_range_label(self.hour)
    }

    /// Returns `true` if this message came from a system line.
    pub fn is_group_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }
}

/// Formats the `HH-HH` label of the bucket starting at `hour`.
pub fn hour_range_label(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

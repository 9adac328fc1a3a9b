//! Flat record shape shared by the CSV, JSON and JSONL writers.

use serde::Serialize;

use crate::Message;

/// Which columns the record writers emit.
///
/// The base columns are always `date`, `time`, `sender` and `body`.
///
/// # Example
///
/// ```
/// use chatlens::core::models::OutputConfig;
///
/// let config = OutputConfig::new().with_calendar().without_system();
/// assert!(config.include_calendar);
/// assert!(!config.include_system);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Add the derived calendar columns: `year`, `month`, `month_name`,
    /// `day`, `day_name`, `hour`, `minute`, `hour_range`.
    pub include_calendar: bool,
    /// Keep `group_notification` lines.
    pub include_system: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_calendar: false,
            include_system: true,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }

    #[must_use]
    pub fn without_system(mut self) -> Self {
        self.include_system = false;
        self
    }

    /// Returns `true` if `msg` should be written.
    pub fn keeps(&self, msg: &Message) -> bool {
        self.include_system || !msg.is_group_notification()
    }
}

/// Calendar columns of a [`MessageRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFields<'a> {
    pub year: i32,
    pub month: u32,
    pub month_name: &'a str,
    pub day: u32,
    pub day_name: &'a str,
    pub hour: u32,
    pub minute: u32,
    pub hour_range: String,
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord<'a> {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub sender: &'a str,
    pub body: &'a str,
    #[serde(flatten)]
    pub calendar: Option<CalendarFields<'a>>,
}

impl<'a> MessageRecord<'a> {
    pub fn from_message(msg: &'a Message, config: &OutputConfig) -> Self {
        let calendar = config.include_calendar.then(|| CalendarFields {
            year: msg.year,
            month: msg.month,
            month_name: &msg.month_name,
            day: msg.day,
            day_name: &msg.day_name,
            hour: msg.hour,
            minute: msg.minute,
            hour_range: msg.hour_range(),
        });

        Self {
            date: msg.date.format("%Y-%m-%d").to_string(),
            time: msg.timestamp.format("%H:%M").to_string(),
            sender: &msg.sender,
            body: &msg.body,
            calendar,
        }
    }
}

/// Records for every message `config` keeps, in chat order.
pub fn records<'a>(messages: &'a [Message], config: &OutputConfig) -> Vec<MessageRecord<'a>> {
    messages
        .iter()
        .filter(|m| config.keeps(m))
        .map(|m| MessageRecord::from_message(m, config))
        .collect()
}

//! Time-bucketed message counts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use crate::chat::Chat;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// `"{month_name}-{year}"`, e.g. `"February-2023"`.
    pub time: String,
    pub year: i32,
    pub month: u32,
    pub message_count: usize,
}

/// Messages on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub message_count: usize,
}

/// Message counts per month, oldest first. Months without messages are
/// absent.
///
/// ```rust
/// use chatlens::{Chat, Message};
/// use chatlens::stats::monthly_timeline;
/// use chrono::NaiveDate;
///
/// let at = |m| NaiveDate::from_ymd_opt(2023, m, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let chat = Chat::new(vec![
///     Message::new("A", at(3), "late"),
///     Message::new("A", at(1), "early"),
///     Message::new("B", at(3), "late again"),
/// ]);
///
/// let timeline = monthly_timeline(&chat);
/// assert_eq!(timeline[0].time, "January-2023");
/// assert_eq!(timeline[1].time, "March-2023");
/// assert_eq!(timeline[1].message_count, 2);
/// ```
pub fn monthly_timeline(chat: &Chat) -> Vec<TimelinePoint> {
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();
    for msg in chat {
        months
            .entry((msg.year, msg.month))
            .or_insert((msg.month_name.as_str(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (name, message_count))| TimelinePoint {
            time: format!("{name}-{year}"),
            year,
            month,
            message_count,
        })
        .collect()
}

/// Message counts per day, oldest first. Days without messages are absent.
pub fn daily_timeline(chat: &Chat) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in chat {
        *days.entry(msg.date).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, message_count)| DailyPoint {
            date,
            message_count,
        })
        .collect()
}

/// Message counts per weekday name (`"Monday"`, ...), busiest first.
pub fn busiest_days(chat: &Chat) -> FrequencyTable {
    FrequencyTable::from_tokens(chat.iter().map(|m| m.day_name.as_str()))
}

/// Message counts per month name (`"January"`, ...), busiest first.
///
/// Months from different years are pooled.
pub fn busiest_months(chat: &Chat) -> FrequencyTable {
    FrequencyTable::from_tokens(chat.iter().map(|m| m.month_name.as_str()))
}

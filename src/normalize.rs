//! Record normalizer: [`RawMessage`]s → [`Chat`].
//!
//! Each raw timestamp is parsed under the caller's day/month order. Records
//! whose timestamp does not parse are dropped; that is never an error, even
//! when it drops everything.

use tracing::{debug, warn};

use crate::chat::Chat;
use crate::message::{GROUP_NOTIFICATION, Message, RawMessage};
use crate::parsing::parse_timestamp;

/// Outcome counters of one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub kept: usize,
    pub dropped: usize,
}

/// Normalizes raw messages, dropping records with unparseable timestamps.
///
/// # Example
///
/// ```rust
/// use chatlens::RawMessage;
/// use chatlens::normalize::normalize;
///
/// let raw = vec![
///     RawMessage::new("01/02/23, 10:00", Some("Alice".into()), "Hello there"),
///     RawMessage::new("31/02/23, 10:00", Some("Alice".into()), "no such day"),
/// ];
/// let chat = normalize(raw, true);
///
/// assert_eq!(chat.len(), 1);
/// assert_eq!(chat.messages()[0].month_name, "February");
/// ```
pub fn normalize(raw: Vec<RawMessage>, day_first: bool) -> Chat {
    normalize_with_summary(raw, day_first).0
}

/// Like [`normalize`], also returning how many records were kept and dropped.
pub fn normalize_with_summary(raw: Vec<RawMessage>, day_first: bool) -> (Chat, NormalizeSummary) {
    let mut summary = NormalizeSummary::default();
    let mut messages = Vec::with_capacity(raw.len());

    for record in raw {
        if let Some(message) = normalize_one(record, day_first, &mut summary) {
            messages.push(message);
        }
    }

    if summary.dropped > 0 {
        warn!(
            kept = summary.kept,
            dropped = summary.dropped,
            day_first,
            "dropped records with unparseable timestamps"
        );
    }
    (Chat::new(messages), summary)
}

fn normalize_one(
    record: RawMessage,
    day_first: bool,
    summary: &mut NormalizeSummary,
) -> Option<Message> {
    let Some(timestamp) = parse_timestamp(&record.timestamp_text, day_first) else {
        debug!(timestamp = %record.timestamp_text, day_first, "timestamp does not parse");
        summary.dropped += 1;
        return None;
    };
    summary.kept += 1;

    let sender = record
        .sender
        .unwrap_or_else(|| GROUP_NOTIFICATION.to_string());
    Some(Message::new(sender, timestamp, record.body))
}

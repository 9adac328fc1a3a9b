//! Per-sender share of the conversation.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use crate::chat::Chat;

/// One sender's message count and share of the chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub user: String,
    pub message_count: usize,
    /// Share of all messages, in percent, rounded to two decimals.
    pub percentage: f64,
}

/// Message count and share per sender, most active first.
///
/// System lines are listed under `"group_notification"` like any other
/// sender, so the percentages add up to roughly 100.
pub fn user_activity(chat: &Chat) -> Vec<UserShare> {
    let total = chat.len();
    FrequencyTable::from_tokens(chat.iter().map(|m| m.sender.as_str()))
        .iter()
        .map(|entry| UserShare {
            user: entry.token.clone(),
            message_count: entry.count,
            percentage: percentage(entry.count, total),
        })
        .collect()
}

/// The `n` most active senders.
pub fn top_users(chat: &Chat, n: usize) -> Vec<UserShare> {
    let mut shares = user_activity(chat);
    shares.truncate(n);
    shares
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

//! Scalar counts over a chat.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::chat::Chat;
use crate::config::{AnalyzerConfig, BodyKind};

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s/$.?#][^\s]*").expect("link pattern is valid"));

/// Headline numbers for one selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Every message in scope, system lines included.
    pub message_count: usize,
    /// Whitespace-separated tokens over non-media bodies.
    pub word_count: usize,
    pub media_count: usize,
    pub deleted_message_count: usize,
    /// `http://` / `https://` URLs across all bodies.
    pub link_count: usize,
}

impl ChatStats {
    /// Messages that are neither media nor deleted placeholders.
    pub fn text_message_count(&self) -> usize {
        self.message_count - self.media_count - self.deleted_message_count
    }
}

/// Computes [`ChatStats`] for `chat`.
///
/// A body matching a media placeholder is never also counted as deleted.
///
/// # Example
///
/// ```rust
/// use chatlens::{AnalyzerConfig, Chat, Message};
/// use chatlens::stats::compute_stats;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let chat = Chat::new(vec![
///     Message::new("Bob", ts, "Hi"),
///     Message::new("Bob", ts, "<Media omitted>"),
/// ]);
///
/// let stats = compute_stats(&chat, &AnalyzerConfig::default());
/// assert_eq!(stats.message_count, 2);
/// assert_eq!(stats.media_count, 1);
/// assert_eq!(stats.word_count, 1);
/// ```
pub fn compute_stats(chat: &Chat, config: &AnalyzerConfig) -> ChatStats {
    let mut stats = ChatStats {
        message_count: chat.len(),
        ..ChatStats::default()
    };

    for msg in chat {
        stats.link_count += count_links(&msg.body);
        match config.classify(&msg.body) {
            BodyKind::Media => {
                stats.media_count += 1;
                continue;
            }
            BodyKind::Deleted => stats.deleted_message_count += 1,
            BodyKind::Text => {}
        }
        stats.word_count += msg.body.split_whitespace().count();
    }

    stats
}

/// Counts URLs in `text`.
pub fn count_links(text: &str) -> usize {
    LINK.find_iter(text).count()
}

//! Analyzer configuration.
//!
//! Export wording differs by app version and locale, so every literal the
//! analysis depends on lives here as overridable configuration instead of
//! being hard-coded in the aggregators:
//!
//! | Setting | Default | Used by |
//! |---------|---------|---------|
//! | `day_first` | `true` (DD-MM-YY) | normalizer |
//! | `media_placeholders` | [`MEDIA_OMITTED`]: Android `<Media omitted>`, iOS `image omitted` and friends | stats, common words |
//! | `deleted_placeholders` | [`MESSAGE_DELETED`]: both wordings, with and without the iOS full stop | stats, common words |
//! | `stop_words` | English + Hinglish list (`data/stop_words.txt`) | common words |
//! | `top_words` | 20 | common words |
//! | `top_users` | 5 | user activity |
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_day_first(false)
//!     .with_media_placeholders(["<Media omitted>", "image omitted"])
//!     .with_top_words(10);
//!
//! assert!(config.is_media("image omitted"));
//! assert!(config.is_stop_word("The"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

const DEFAULT_STOP_WORDS: &str = include_str!("../data/stop_words.txt");

/// Placeholders the export writes instead of an attachment. Android uses a
/// single token; iOS names the attachment kind.
pub const MEDIA_OMITTED: &[&str] = &[
    "<Media omitted>",
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "GIF omitted",
    "document omitted",
];

/// Placeholders the export writes for deleted messages.
pub const MESSAGE_DELETED: &[&str] = &[
    "This message was deleted",
    "You deleted this message",
    "This message was deleted.",
    "You deleted this message.",
];

/// How a message body relates to the export's placeholder tokens.
///
/// The categories are mutually exclusive; a body matching both tables is
/// classified as [`Media`](BodyKind::Media).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Media,
    Deleted,
    Text,
}

/// Configuration for normalization and analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Interpret ambiguous dates as DD-MM-YY (`true`) or MM-DD-YY (`false`).
    pub day_first: bool,

    /// Bodies equal to one of these are counted as media.
    pub media_placeholders: Vec<String>,

    /// Bodies equal to one of these are counted as deleted messages.
    pub deleted_placeholders: Vec<String>,

    /// Lower-cased words excluded from the common-words table.
    pub stop_words: HashSet<String>,

    /// Length of the common-words table (default: 20).
    pub top_words: usize,

    /// Length of the top-users list (default: 5).
    pub top_users: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            day_first: true,
            media_placeholders: MEDIA_OMITTED.iter().map(|s| (*s).to_string()).collect(),
            deleted_placeholders: MESSAGE_DELETED.iter().map(|s| (*s).to_string()).collect(),
            stop_words: parse_stop_words(DEFAULT_STOP_WORDS),
            top_words: 20,
            top_users: 5,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON document.
    ///
    /// Missing keys fall back to their defaults.
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ChatlensError::invalid_config(e.to_string()))?;
        config.validate()
    }

    /// Loads a configuration from a JSON file.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Checks that the configuration can drive an analysis.
    pub fn validate(mut self) -> Result<Self> {
        if self.top_words == 0 {
            return Err(ChatlensError::invalid_config("top_words must be at least 1"));
        }
        if self.top_users == 0 {
            return Err(ChatlensError::invalid_config("top_users must be at least 1"));
        }
        if self
            .media_placeholders
            .iter()
            .chain(&self.deleted_placeholders)
            .any(|p| p.trim().is_empty())
        {
            return Err(ChatlensError::invalid_config("placeholders must not be blank"));
        }
        // Stop words from JSON may not be lower-cased yet.
        self.stop_words = self.stop_words.iter().map(|w| w.to_lowercase()).collect();
        Ok(self)
    }

    /// Sets the date order.
    #[must_use]
    pub fn with_day_first(mut self, day_first: bool) -> Self {
        self.day_first = day_first;
        self
    }

    /// Replaces the media placeholder table.
    #[must_use]
    pub fn with_media_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_placeholders = placeholders.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the deleted-message placeholder table.
    #[must_use]
    pub fn with_deleted_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deleted_placeholders = placeholders.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the stop-word table.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    /// Adds words to the stop-word table.
    #[must_use]
    pub fn extend_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Replaces the stop-word table with the contents of a file.
    ///
    /// The file holds one word per line; blank lines and lines starting
    /// with `#` are ignored.
    pub fn with_stop_words_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        self.stop_words = parse_stop_words(&content);
        Ok(self)
    }

    /// Sets the length of the common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the length of the top-users list.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Returns `true` if `body` is exactly a media placeholder.
    pub fn is_media(&self, body: &str) -> bool {
        self.media_placeholders.iter().any(|p| p == body)
    }

    /// Returns `true` if `body` is exactly a deleted-message placeholder.
    pub fn is_deleted(&self, body: &str) -> bool {
        self.deleted_placeholders.iter().any(|p| p == body)
    }

    /// Classifies a body against the placeholder tables.
    pub fn classify(&self, body: &str) -> BodyKind {
        if self.is_media(body) {
            BodyKind::Media
        } else if self.is_deleted(body) {
            BodyKind::Deleted
        } else {
            BodyKind::Text
        }
    }

    /// Returns `true` if `word` (any case) is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }
}

fn parse_stop_words(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

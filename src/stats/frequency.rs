//! Token frequency tables: emoji usage and common words.
//!
//! Tables are ordered by count, highest first. Equal counts keep the order
//! in which the tokens first appeared in the chat.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::chat::Chat;
use crate::config::{AnalyzerConfig, BodyKind};

/// One row of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub token: String,
    pub count: usize,
}

/// Ordered `(token, count)` pairs without duplicate tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Counts `tokens` and orders the result.
    ///
    /// ```rust
    /// use chatlens::stats::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_tokens(["b", "a", "a", "c", "b", "a"]);
    /// let tokens: Vec<&str> = table.iter().map(|e| e.token.as_str()).collect();
    /// assert_eq!(tokens, ["a", "b", "c"]);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in tokens {
            let token = token.as_ref();
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                }
            }
        }

        let mut entries: Vec<FrequencyEntry> = counts
            .into_iter()
            .map(|(token, count)| FrequencyEntry { token, count })
            .collect();
        // Stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `token`, or 0.
    pub fn count_of(&self, token: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.token == token)
            .map_or(0, |e| e.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The most frequent entry.
    pub fn top_entry(&self) -> Option<&FrequencyEntry> {
        self.entries.first()
    }

    /// Keeps only the first `n` entries.
    #[must_use]
    pub fn top(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Emoji usage over every body in `chat`, system lines included.
///
/// Multi-code-point emoji (ZWJ sequences, skin tones, flags, keycaps) count
/// as one token.
pub fn emoji_frequency(chat: &Chat) -> FrequencyTable {
    FrequencyTable::from_tokens(chat.iter().flat_map(|m| find_emojis(&m.body)))
}

/// Returns the emoji in `text`, in order of appearance.
///
/// Each emoji is returned in its fully-qualified form, so a bare `❤` and
/// `❤️` yield the same token.
///
/// ```rust
/// use chatlens::stats::find_emojis;
///
/// assert_eq!(find_emojis("ok 👍 see you ❤️ 👨‍👩‍👧"), ["👍", "❤️", "👨‍👩‍👧"]);
/// assert_eq!(find_emojis("I \u{2764} you"), ["❤️"]);
/// assert!(find_emojis("plain text: 1, 2, 3").is_empty());
/// ```
pub fn find_emojis(text: &str) -> Vec<&'static str> {
    let mut found = Vec::new();
    for grapheme in text.graphemes(true) {
        if let Some(emoji) = canonical_emoji(grapheme) {
            found.push(emoji);
            continue;
        }
        // An emoji can share a cluster with a combining mark
        if grapheme.chars().nth(1).is_some() {
            for (i, c) in grapheme.char_indices() {
                if let Some(emoji) = canonical_emoji(&grapheme[i..i + c.len_utf8()]) {
                    found.push(emoji);
                }
            }
        }
    }
    found
}

/// The database form of `grapheme`, if it is an emoji.
fn canonical_emoji(grapheme: &str) -> Option<&'static str> {
    if grapheme.is_ascii() {
        return None;
    }
    if let Some(emoji) = emojis::get(grapheme) {
        return Some(emoji.as_str());
    }

    let base: String = grapheme.chars().filter(|c| !is_modifier(*c)).collect();
    if !base.is_empty() && base != grapheme {
        if let Some(emoji) = emojis::get(&base) {
            return Some(emoji.as_str());
        }
    }
    emojis::get(&format!("{grapheme}\u{fe0f}")).map(emojis::Emoji::as_str)
}

fn is_modifier(c: char) -> bool {
    matches!(c, '\u{fe0f}' | '\u{1f3fb}'..='\u{1f3ff}')
}

/// Most frequent words, excluding system lines, placeholders and stop words.
///
/// Words are whitespace-separated and lower-cased; punctuation is kept.
/// The table holds at most [`AnalyzerConfig::top_words`] entries.
pub fn common_words(chat: &Chat, config: &AnalyzerConfig) -> FrequencyTable {
    let words = chat
        .iter()
        .filter(|m| !m.is_group_notification())
        .filter(|m| config.classify(&m.body) == BodyKind::Text)
        .flat_map(|m| m.body.split_whitespace())
        .map(str::to_lowercase)
        .filter(|w| !config.stop_words.contains(w));

    FrequencyTable::from_tokens(words).top(config.top_words)
}

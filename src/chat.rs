//! The normalized, immutable message sequence and sender selection.
//!
//! # Example
//!
//! ```rust
//! use chatlens::{Chat, Message, UserSelection};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let chat: Chat = vec![
//!     Message::new("Bob", ts, "hi"),
//!     Message::new("Alice", ts, "hello"),
//!     Message::new("Bob", ts, "how are you"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(chat.users(), ["Everyone", "Alice", "Bob", "group_notification"]);
//!
//! let bob = chat.select(&UserSelection::sender("Bob"));
//! assert_eq!(bob.len(), 2);
//! assert_eq!(chat.len(), 3);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::message::{EVERYONE, GROUP_NOTIFICATION, Message};

/// An ordered sequence of normalized messages, in export order.
///
/// A `Chat` is never mutated in place; [`select`](Self::select) and
/// [`retain`](Self::retain) return new chats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chat {
    messages: Vec<Message>,
}

impl Chat {
    /// Wraps already-normalized messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Distinct real sender names, sorted.
    pub fn senders(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .messages
            .iter()
            .filter(|m| !m.is_group_notification())
            .map(|m| m.sender.as_str())
            .collect();
        names.into_iter().collect()
    }

    /// Choices for a user-selection control: `"Everyone"`, the sorted real
    /// senders, then `"group_notification"`.
    pub fn users(&self) -> Vec<String> {
        std::iter::once(EVERYONE)
            .chain(self.senders())
            .chain(std::iter::once(GROUP_NOTIFICATION))
            .map(str::to_string)
            .collect()
    }

    /// Returns the sub-chat for a selection. `Everyone` returns a copy.
    pub fn select(&self, selection: &UserSelection) -> Chat {
        match selection {
            UserSelection::Everyone => self.clone(),
            UserSelection::Sender(name) => self.retain(|m| m.sender == *name),
        }
    }

    /// Returns the sub-chat of messages matching `predicate`.
    pub fn retain<F>(&self, mut predicate: F) -> Chat
    where
        F: FnMut(&Message) -> bool,
    {
        self.messages
            .iter()
            .filter(|m| predicate(m))
            .cloned()
            .collect()
    }

    /// First and last message dates, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.messages.iter().map(|m| m.date).min()?;
        let last = self.messages.iter().map(|m| m.date).max()?;
        Some((first, last))
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl FromIterator<Message> for Chat {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Chat {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// Which messages an analysis covers.
///
/// Conversions from text (`From<&str>`, [`FromStr`], serde) map the name
/// `"Everyone"` to [`UserSelection::Everyone`]. A sender whose display name
/// is literally `Everyone` can only be selected with
/// [`UserSelection::sender`], and such a selection serializes to the same
/// string as the pseudo-user.
///
/// ```rust
/// use chatlens::UserSelection;
///
/// assert!(UserSelection::from("Everyone").is_everyone());
/// assert!(!UserSelection::sender("Everyone").is_everyone());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum UserSelection {
    /// No sender filter.
    #[default]
    Everyone,
    /// Only messages from this sender (exact match). Use
    /// `"group_notification"` to select system lines.
    Sender(String),
}

impl UserSelection {
    /// Selects one sender, taking `name` literally.
    pub fn sender(name: impl Into<String>) -> Self {
        UserSelection::Sender(name.into())
    }

    pub fn is_everyone(&self) -> bool {
        matches!(self, UserSelection::Everyone)
    }
}

impl fmt::Display for UserSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSelection::Everyone => write!(f, "{EVERYONE}"),
            UserSelection::Sender(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for UserSelection {
    fn from(name: &str) -> Self {
        if name == EVERYONE {
            UserSelection::Everyone
        } else {
            UserSelection::Sender(name.to_string())
        }
    }
}

impl From<String> for UserSelection {
    fn from(name: String) -> Self {
        if name == EVERYONE {
            UserSelection::Everyone
        } else {
            UserSelection::Sender(name)
        }
    }
}

impl From<UserSelection> for String {
    fn from(selection: UserSelection) -> Self {
        selection.to_string()
    }
}

impl FromStr for UserSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserSelection::from(s))
    }
}

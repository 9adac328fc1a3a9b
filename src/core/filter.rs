//! Narrow a chat by date range and sender.
//!
//! | Filter | Method | Keeps |
//! |--------|--------|-------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | messages on or after the date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | messages on or before the date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | messages from one sender |
//!
//! Filters combine with AND. Sender matching is exact, the same rule
//! [`Chat::select`] uses.
//!
//! # Example
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::{Chat, Message};
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatlens::Result<()> {
//! let on = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let chat = Chat::new(vec![
//!     Message::new("Alice", on(1, 1), "Old"),
//!     Message::new("Alice", on(6, 15), "New"),
//!     Message::new("Bob", on(6, 20), "Also new"),
//! ]);
//!
//! let config = FilterConfig::new()
//!     .with_sender("Alice")
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(&chat, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.messages()[0].body, "New");
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;

use crate::chat::{Chat, UserSelection};
use crate::error::{ChatlensError, Result};

/// Date range and sender criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Keep messages on or before this date.
    pub before: Option<NaiveDate>,

    /// Keep messages matching this selection.
    pub selection: UserSelection,
}

impl FilterConfig {
    /// Creates a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first included date, formatted `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the last included date, formatted `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Keeps only messages from `sender`. `"Everyone"` clears the filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.selection = UserSelection::from(sender.into());
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: UserSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the first included date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the last included date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_user_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if a sender filter is active.
    pub fn has_user_filter(&self) -> bool {
        !self.selection.is_everyone()
    }

    /// Returns `true` if the range is empty (`after` later than `before`).
    pub fn is_empty_range(&self) -> bool {
        matches!((self.after, self.before), (Some(a), Some(b)) if a > b)
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Returns the messages of `chat` that pass every active filter.
pub fn apply_filters(chat: &Chat, config: &FilterConfig) -> Chat {
    if !config.is_active() {
        return chat.clone();
    }

    let scoped = chat.select(&config.selection);
    if !config.has_date_filter() {
        return scoped;
    }

    scoped.retain(|msg| {
        if config.after.is_some_and(|after| msg.date < after) {
            return false;
        }
        if config.before.is_some_and(|before| msg.date > before) {
            return false;
        }
        true
    })
}

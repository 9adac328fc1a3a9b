//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports ("Export chat" →
//! "Without media") and computing descriptive statistics over them.
//!
//! ## Overview
//!
//! ```text
//! export text ─▶ parser ─▶ RawMessage* ─▶ normalize ─▶ Chat ─▶ stats::*
//! ```
//!
//! - The **line parser** splits the export into logical messages, folding
//!   multi-line bodies and recognising system lines.
//! - The **normalizer** parses each timestamp under a caller-chosen
//!   day/month order and derives calendar fields.
//! - The **aggregators** compute counts, emoji and word frequency tables,
//!   monthly and daily timelines, busiest weekday and month, and a weekday ×
//!   hour heatmap for everyone or a single sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\
//! 01/02/23, 09:59 - Messages and calls are end-to-end encrypted.
//! 01/02/23, 10:00 - Alice: Hello there 👋
//! 01/02/23, 10:01 - Bob: <Media omitted>
//! 01/02/23, 10:02 - Bob: check https://example.com";
//!
//!     let config = AnalyzerConfig::default().with_day_first(true);
//!     let raw = ExportParser::new().parse_str(export)?;
//!     let chat = normalize(raw, config.day_first);
//!
//!     assert_eq!(chat.users(), ["Everyone", "Alice", "Bob", "group_notification"]);
//!
//!     let report = AnalysisReport::build(&chat, &UserSelection::Everyone, &config);
//!     assert_eq!(report.stats.message_count, 4);
//!     assert_eq!(report.stats.media_count, 1);
//!     assert_eq!(report.stats.link_count, 1);
//!     assert_eq!(report.emojis.count_of("👋"), 1);
//!     assert_eq!(report.monthly_timeline[0].time, "February-2023");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`ExportParser`](parser::ExportParser), export text → [`RawMessage`]s
//! - [`parsing`]: message-start layouts and timestamp parsing
//! - [`normalize`]: [`RawMessage`]s → [`Chat`]
//! - [`chat`]: [`Chat`], [`UserSelection`]
//! - [`stats`]: counts, frequency tables, timelines, heatmap, user shares,
//!   [`AnalysisReport`](stats::AnalysisReport)
//! - [`config`]: [`AnalyzerConfig`]
//! - [`core`]: date/sender filtering and record writers (CSV, JSON, JSONL)
//! - [`format`]: record table [`OutputFormat`](format::OutputFormat)
//! - [`cli`]: CLI types (`cli` feature)
//! - [`error`]: [`ChatlensError`], [`Result`]
//! - [`prelude`]: convenient re-exports

pub mod chat;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod normalize;
pub mod parser;
pub mod parsing;
pub mod stats;

pub use chat::{Chat, UserSelection};
pub use config::AnalyzerConfig;
pub use error::{ChatlensError, Result};
pub use message::{Message, RawMessage};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, RawMessage};

    pub use crate::error::{ChatlensError, Result};

    pub use crate::chat::{Chat, UserSelection};
    pub use crate::config::AnalyzerConfig;
    pub use crate::message::{EVERYONE, GROUP_NOTIFICATION};

    pub use crate::normalize::normalize;
    pub use crate::parser::ExportParser;
    pub use crate::parsing::ExportLayout;

    pub use crate::stats::{
        ActivityHeatmap, AnalysisReport, ChatStats, FrequencyTable, UserShare, common_words,
        compute_stats, emoji_frequency, monthly_timeline, user_activity,
    };

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}

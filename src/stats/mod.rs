//! Aggregators over a [`Chat`](crate::Chat).
//!
//! Every function here is a pure function of its inputs. An empty chat
//! yields zero counts and empty tables, never an error.
//!
//! | Module | Produces |
//! |--------|----------|
//! | [`counts`] | [`ChatStats`]: messages, words, media, deleted, links |
//! | [`frequency`] | emoji and common-word [`FrequencyTable`]s |
//! | [`timeline`] | monthly / daily timelines, busiest weekday and month |
//! | [`heatmap`] | weekday × hour [`ActivityHeatmap`] |
//! | [`users`] | per-sender [`UserShare`] |
//! | [`report`] | [`AnalysisReport`] bundling all of the above |

pub mod counts;
pub mod frequency;
pub mod heatmap;
pub mod report;
pub mod timeline;
pub mod users;

pub use counts::{ChatStats, compute_stats, count_links};
pub use frequency::{FrequencyEntry, FrequencyTable, common_words, emoji_frequency, find_emojis};
pub use heatmap::{ActivityHeatmap, DAY_NAMES, activity_heatmap};
pub use report::AnalysisReport;
pub use timeline::{
    DailyPoint, TimelinePoint, busiest_days, busiest_months, daily_timeline, monthly_timeline,
};
pub use users::{UserShare, top_users, user_activity};

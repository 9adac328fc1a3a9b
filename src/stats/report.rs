//! Every aggregate for one user selection, bundled for display or export.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::counts::{ChatStats, compute_stats};
use super::frequency::{FrequencyTable, common_words, emoji_frequency};
use super::heatmap::{ActivityHeatmap, activity_heatmap};
use super::timeline::{
    DailyPoint, TimelinePoint, busiest_days, busiest_months, daily_timeline, monthly_timeline,
};
use super::users::{UserShare, user_activity};
use crate::chat::{Chat, UserSelection};
use crate::config::AnalyzerConfig;

/// The full analysis of one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub selection: UserSelection,
    pub stats: ChatStats,
    /// Share of every sender, most active first; only for
    /// [`UserSelection::Everyone`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserShare>>,
    /// The first [`AnalyzerConfig::top_users`] rows of `users`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_users: Option<Vec<UserShare>>,
    pub emojis: FrequencyTable,
    pub common_words: FrequencyTable,
    pub monthly_timeline: Vec<TimelinePoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub busiest_days: FrequencyTable,
    pub busiest_months: FrequencyTable,
    pub heatmap: ActivityHeatmap,
}

impl AnalysisReport {
    /// Applies `selection` to `chat` and runs every aggregator on the result.
    ///
    /// ```rust
    /// use chatlens::{AnalyzerConfig, UserSelection};
    /// use chatlens::normalize::normalize;
    /// use chatlens::parser::ExportParser;
    /// use chatlens::stats::AnalysisReport;
    ///
    /// let raw = ExportParser::new().parse_str(
    ///     "01/02/23, 10:00 - Alice: Hello 👋\n01/02/23, 10:05 - Bob: hi https://x.io",
    /// )?;
    /// let chat = normalize(raw, true);
    ///
    /// let report = AnalysisReport::build(&chat, &UserSelection::Everyone, &AnalyzerConfig::default());
    /// assert_eq!(report.stats.message_count, 2);
    /// assert_eq!(report.stats.link_count, 1);
    /// assert_eq!(report.users.as_ref().map(Vec::len), Some(2));
    /// assert_eq!(report.top_users.as_ref().map(Vec::len), Some(2));
    ///
    /// let bob = AnalysisReport::build(&chat, &UserSelection::sender("Bob"), &AnalyzerConfig::default());
    /// assert_eq!(bob.stats.message_count, 1);
    /// assert!(bob.users.is_none());
    /// assert!(bob.top_users.is_none());
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    pub fn build(chat: &Chat, selection: &UserSelection, config: &AnalyzerConfig) -> Self {
        let scoped = chat.select(selection);
        debug!(%selection, messages = scoped.len(), "building report");

        let users = selection.is_everyone().then(|| user_activity(&scoped));
        let top_users = users
            .as_ref()
            .map(|users| users.iter().take(config.top_users).cloned().collect());

        Self {
            selection: selection.clone(),
            stats: compute_stats(&scoped, config),
            users,
            top_users,
            emojis: emoji_frequency(&scoped),
            common_words: common_words(&scoped, config),
            monthly_timeline: monthly_timeline(&scoped),
            daily_timeline: daily_timeline(&scoped),
            busiest_days: busiest_days(&scoped),
            busiest_months: busiest_months(&scoped),
            heatmap: activity_heatmap(&scoped),
        }
    }

    /// Returns `true` if the selection matched no messages.
    pub fn is_empty(&self) -> bool {
        self.stats.message_count == 0
    }
}

//! Weekday × hour activity matrix.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::chat::Chat;
use crate::message::hour_range_label;

/// Row labels, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Dense 7 × 24 message counts. Rows are weekdays from Monday; columns
/// are the hour ranges `"00-01"` through `"23-00"`. Empty cells hold 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    pub days: Vec<String>,
    pub hour_ranges: Vec<String>,
    pub counts: [[usize; 24]; 7],
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self {
            days: DAY_NAMES.iter().map(|d| (*d).to_string()).collect(),
            hour_ranges: (0..24).map(hour_range_label).collect(),
            counts: [[0; 24]; 7],
        }
    }
}

impl ActivityHeatmap {
    /// Counts every message of `chat` into its `(weekday, hour)` cell.
    pub fn from_chat(chat: &Chat) -> Self {
        let mut heatmap = Self::default();
        for msg in chat {
            let row = msg.weekday().num_days_from_monday() as usize;
            heatmap.counts[row][msg.hour as usize] += 1;
        }
        heatmap
    }

    /// Count for one cell. Hours outside 0–23 read as 0.
    pub fn get(&self, day: Weekday, hour: u32) -> usize {
        self.row(day).get(hour as usize).copied().unwrap_or(0)
    }

    pub fn row(&self, day: Weekday) -> &[usize; 24] {
        &self.counts[day.num_days_from_monday() as usize]
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// The busiest cell as `(weekday, hour, count)`; the earliest one wins
    /// ties. `None` when every cell is zero.
    pub fn peak(&self) -> Option<(Weekday, u32, usize)> {
        let mut best: Option<(Weekday, u32, usize)> = None;
        let mut day = Weekday::Mon;
        for row in &self.counts {
            for (hour, &count) in row.iter().enumerate() {
                if count > best.map_or(0, |(_, _, c)| c) {
                    best = Some((day, hour as u32, count));
                }
            }
            day = day.succ();
        }
        best
    }
}

/// Builds the [`ActivityHeatmap`] of `chat`.
pub fn activity_heatmap(chat: &Chat) -> ActivityHeatmap {
    ActivityHeatmap::from_chat(chat)
}

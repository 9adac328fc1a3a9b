//! Command-line interface definition using clap.
//!
//! - [`Args`]: CLI argument structure
//! - [`DateOrder`]: how to read ambiguous `01/02/23` dates
//! - [`ReportFormat`]: how the analysis is printed

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::chat::UserSelection;

/// Analyze a WhatsApp chat export: message counts, words, emoji and
/// activity over time.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --date-order mm-dd-yy --user Alice
    chatlens chat.txt --after 2024-01-01 --format json -o report.json
    chatlens chat.txt --records messages.csv
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Order of day and month in the export's dates [default: dd-mm-yy]
    #[arg(long, value_enum)]
    pub date_order: Option<DateOrder>,

    /// Analyze only this sender ("Everyone" for all)
    #[arg(short, long, value_name = "NAME", default_value = "Everyone")]
    pub user: String,

    /// Treat --user as a sender name even when it is "Everyone"
    #[arg(long)]
    pub exact_user: bool,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Length of the common-words table
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Analyzer configuration (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop-word list, one word per line
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also export the filtered message table (.csv, .json or .jsonl)
    #[arg(long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The sender selection requested with `--user`.
    pub fn selection(&self) -> UserSelection {
        if self.exact_user {
            UserSelection::sender(self.user.as_str())
        } else {
            UserSelection::from(self.user.as_str())
        }
    }

    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Field order of ambiguous export dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
pub enum DateOrder {
    /// 01/02/23 is 1 February 2023
    #[default]
    #[value(name = "dd-mm-yy", alias = "day-first")]
    #[serde(rename = "dd-mm-yy")]
    DayFirst,

    /// 01/02/23 is 2 January 2023
    #[value(name = "mm-dd-yy", alias = "month-first")]
    #[serde(rename = "mm-dd-yy")]
    MonthFirst,
}

impl DateOrder {
    pub fn is_day_first(self) -> bool {
        self == DateOrder::DayFirst
    }
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "DD-MM-YY"),
            DateOrder::MonthFirst => write!(f, "MM-DD-YY"),
        }
    }
}

/// How the analysis is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// The full report as pretty JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

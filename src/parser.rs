//! Line parser: export text → [`RawMessage`] sequence.
//!
//! Segmentation is a small automaton over physical lines:
//!
//! ```text
//! AwaitingMessageStart --continuation line--> InContinuation
//! InContinuation       --continuation line--> InContinuation
//! (any state)          --message start------> AwaitingMessageStart
//! ```
//!
//! A message-start line closes the open message and opens a new one. Any
//! other line is appended to the open message's body with its line break
//! preserved. Lines before the first message start have no message to
//! belong to and are discarded.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ExportParser;
//!
//! let text = "01/02/23, 10:00 - Alice: Shopping list:\nmilk\neggs\n01/02/23, 10:05 - Bob: ok";
//! let raw = ExportParser::new().parse_str(text)?;
//!
//! assert_eq!(raw.len(), 2);
//! assert_eq!(raw[0].body, "Shopping list:\nmilk\neggs");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::RawMessage;
use crate::error::{ChatlensError, Result};
use crate::parsing::{DETECTION_SAMPLE, ExportLayout, detect_layout};

/// Segmentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// The previous line opened a message (or nothing is open yet).
    AwaitingMessageStart,
    /// The previous line was appended to the open message.
    InContinuation,
}

/// Counters collected while segmenting, reported through `tracing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    /// Lines that opened a message.
    pub message_starts: usize,
    /// Lines appended to an open message.
    pub continuation_lines: usize,
    /// Messages spanning more than one physical line.
    pub multiline_messages: usize,
    /// Lines before the first message start.
    pub orphan_lines: usize,
}

/// Turns physical lines into logical messages.
struct Segmenter {
    layout: ExportLayout,
    state: LineState,
    open: Option<RawMessage>,
    done: Vec<RawMessage>,
    stats: SegmentStats,
}

impl Segmenter {
    fn new(layout: ExportLayout) -> Self {
        Self {
            layout,
            state: LineState::AwaitingMessageStart,
            open: None,
            done: Vec::new(),
            stats: SegmentStats::default(),
        }
    }

    fn feed(&mut self, line: &str) {
        if let Some(start) = self.layout.match_start(line) {
            self.close();
            self.open = Some(RawMessage::new(
                start.timestamp_text,
                start.sender.map(str::to_string),
                start.body,
            ));
            self.stats.message_starts += 1;
            self.state = LineState::AwaitingMessageStart;
            return;
        }

        match self.open.as_mut() {
            Some(msg) => {
                if self.state == LineState::AwaitingMessageStart {
                    self.stats.multiline_messages += 1;
                }
                msg.body.push('\n');
                msg.body.push_str(line);
                self.stats.continuation_lines += 1;
                self.state = LineState::InContinuation;
            }
            None => self.stats.orphan_lines += 1,
        }
    }

    fn close(&mut self) {
        if let Some(mut msg) = self.open.take() {
            // Blank continuation lines at the end of a message are export padding.
            let trimmed_len = msg.body.trim_end().len();
            msg.body.truncate(trimmed_len);
            self.done.push(msg);
        }
    }

    fn finish(mut self) -> (Vec<RawMessage>, SegmentStats) {
        self.close();
        (self.done, self.stats)
    }
}

/// Parser for plain-text chat exports.
///
/// The layout (Android dashed or iOS bracketed) is auto-detected from the
/// first [`DETECTION_SAMPLE`] non-blank lines, falling back to the whole file,
/// unless fixed with [`with_layout`](Self::with_layout).
#[derive(Debug, Clone, Default)]
pub struct ExportParser {
    layout: Option<ExportLayout>,
}

impl ExportParser {
    /// Creates a parser that auto-detects the export layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser for a fixed layout.
    pub fn with_layout(layout: ExportLayout) -> Self {
        Self {
            layout: Some(layout),
        }
    }

    /// Returns the fixed layout, if any.
    pub fn layout(&self) -> Option<ExportLayout> {
        self.layout
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Vec<RawMessage>> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content).map_err(|e| e.with_path(path))
    }

    /// Parses export text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::UnparseableFile`] if the text is not blank but
    /// contains no message-start line at all.
    pub fn parse_str(&self, content: &str) -> Result<Vec<RawMessage>> {
        self.segment(content).map(|(messages, _)| messages)
    }

    /// Parses export text and also returns segmentation counters.
    pub fn segment(&self, content: &str) -> Result<(Vec<RawMessage>, SegmentStats)> {
        let content = content.trim_start_matches('\u{feff}');
        if content.trim().is_empty() {
            return Ok((Vec::new(), SegmentStats::default()));
        }

        let layout = match self.layout {
            Some(layout) => layout,
            None => detect(content)?,
        };
        debug!(%layout, "segmenting export");

        let mut segmenter = Segmenter::new(layout);
        for line in content.lines() {
            segmenter.feed(line);
        }
        let (messages, stats) = segmenter.finish();

        if stats.message_starts == 0 {
            return Err(unparseable());
        }

        debug!(
            messages = stats.message_starts,
            continuation_lines = stats.continuation_lines,
            multiline_messages = stats.multiline_messages,
            orphan_lines = stats.orphan_lines,
            "segmented export"
        );
        Ok((messages, stats))
    }
}

fn detect(content: &str) -> Result<ExportLayout> {
    let non_blank = || content.lines().filter(|l| !l.trim().is_empty());
    detect_layout(non_blank().take(DETECTION_SAMPLE))
        .or_else(|| detect_layout(non_blank()))
        .ok_or_else(unparseable)
}

fn unparseable() -> ChatlensError {
    ChatlensError::unparseable(
        "no line starts with a 'DATE, TIME - ' message stamp. \
         Make sure the file is a chat export made with \"Export chat\" → \"Without media\".",
        None,
    )
}

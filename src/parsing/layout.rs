//! Message-start patterns of the supported export layouts.
//!
//! Exports differ by platform:
//! - Android: `01/02/23, 10:00 - Alice: Hello`
//! - iOS: `[01/02/23, 10:00:15] Alice: Hello`
//!
//! Both share the date token (`D/M/Y`, separators `/`, `.` or `-`, two- or
//! four-digit year) and the time token (`H:MM`, optional seconds, optional
//! AM/PM). Whether the date is day-first or month-first cannot be told from
//! the text; that is decided later by the normalizer.

use std::sync::LazyLock;

use regex::Regex;

/// `D/M/Y` with `/`, `.` or `-` separators.
const DATE: &str = r"\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}";

/// `H:MM[:SS][ AM|PM]`. `\s` also covers the narrow no-break space newer
/// exports put before the meridiem; Spanish exports write `p. m.`.
const TIME: &str = r"\d{1,2}:\d{2}(?::\d{2})?(?:\s?[APap]\.?\s?[Mm]\.?)?";

static DASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^({DATE}),\s?({TIME})\s-\s(.*)$")).expect("dashed layout pattern is valid")
});

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\[({DATE}),\s?({TIME})\]\s(.*)$"))
        .expect("bracketed layout pattern is valid")
});

/// `Sender: body`, split at the first `": "` so bodies containing colons or
/// starting with a dash are kept whole.
static SENDER_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?):\s(.*)$").expect("sender pattern is valid"));

/// Number of lines inspected when auto-detecting the layout.
pub const DETECTION_SAMPLE: usize = 20;

/// Export layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportLayout {
    /// Android: `DATE, TIME - SENDER: BODY`
    Dashed,
    /// iOS: `[DATE, TIME] SENDER: BODY`
    Bracketed,
}

/// The pieces of a line that starts a new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStart<'a> {
    /// `DATE, TIME` normalized to a single `", "` separator.
    pub timestamp_text: String,
    pub sender: Option<&'a str>,
    pub body: &'a str,
}

impl ExportLayout {
    /// Returns all layout variants, in detection priority order.
    pub fn all() -> &'static [ExportLayout] {
        &[ExportLayout::Dashed, ExportLayout::Bracketed]
    }

    fn regex(self) -> &'static Regex {
        match self {
            ExportLayout::Dashed => &DASHED,
            ExportLayout::Bracketed => &BRACKETED,
        }
    }

    /// Returns `true` if `line` starts a new message in this layout.
    pub fn is_message_start(self, line: &str) -> bool {
        self.regex().is_match(strip_marks(line))
    }

    /// Splits a message-start line into timestamp, sender and body.
    ///
    /// Returns `None` for continuation lines.
    pub fn match_start(self, line: &str) -> Option<MessageStart<'_>> {
        let caps = self.regex().captures(strip_marks(line))?;
        let date = caps.get(1)?.as_str();
        let time = caps.get(2)?.as_str();
        let rest = caps.get(3).map_or("", |m| m.as_str());

        let (sender, body) = split_sender(rest);
        Some(MessageStart {
            timestamp_text: format!("{date}, {time}"),
            sender,
            body,
        })
    }
}

impl std::fmt::Display for ExportLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportLayout::Dashed => write!(f, "dashed (Android)"),
            ExportLayout::Bracketed => write!(f, "bracketed (iOS)"),
        }
    }
}

/// Splits `Sender: body`; lines without `": "` are system lines.
///
/// iOS puts a left-to-right mark before attachment and deletion notices;
/// it is removed from the body.
fn split_sender(rest: &str) -> (Option<&str>, &str) {
    match SENDER_SPLIT.captures(rest) {
        Some(caps) => {
            let sender = caps.get(1).map_or("", |m| m.as_str()).trim();
            let body = caps
                .get(2)
                .map_or("", |m| m.as_str().trim_start_matches('\u{200e}'));
            if sender.is_empty() {
                (None, rest)
            } else {
                (Some(sender), body)
            }
        }
        None => (None, rest),
    }
}

/// iOS exports prefix some lines with a left-to-right mark; files may
/// start with a byte-order mark.
fn strip_marks(line: &str) -> &str {
    line.trim_start_matches(['\u{200e}', '\u{feff}'])
}

/// Picks the layout matching the most lines.
///
/// Returns `None` if no line matches any layout. Ties go to the layout
/// listed first in [`ExportLayout::all`].
pub fn detect_layout<'a, I>(lines: I) -> Option<ExportLayout>
where
    I: IntoIterator<Item = &'a str>,
{
    let layouts = ExportLayout::all();
    let mut scores = vec![0usize; layouts.len()];

    for line in lines {
        for (i, layout) in layouts.iter().enumerate() {
            if layout.is_message_start(line) {
                scores[i] += 1;
            }
        }
    }

    let max_score = *scores.iter().max()?;
    if max_score == 0 {
        return None;
    }

    let winner_idx = scores.iter().position(|&s| s == max_score)?;
    Some(layouts[winner_idx])
}

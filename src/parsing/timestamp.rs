//! Timestamp parsing under a caller-chosen day/month order.
//!
//! Exports carry no locale marker, so `01/02/23` is either 1 February or
//! 2 January. The caller decides with `day_first`. Two-digit years always
//! land in 2000–2099.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

static STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{2,4}),\s*(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*([APap])\.?\s?[Mm]\.?)?$",
    )
    .expect("timestamp pattern is valid")
});

/// Parses a `DATE, TIME` stamp such as `01/02/23, 10:00` or
/// `1/15/24, 10:30:45 PM`.
///
/// Returns `None` when the text does not form a valid date and time under
/// the requested order (e.g. month 13, February 30, hour 25, `13:00 PM`).
pub fn parse_timestamp(text: &str, day_first: bool) -> Option<NaiveDateTime> {
    let caps = STAMP.captures(text.trim())?;
    let num = |i: usize| -> Option<u32> { caps.get(i)?.as_str().parse().ok() };

    let (first, second) = (num(1)?, num(2)?);
    let (day, month) = if day_first {
        (first, second)
    } else {
        (second, first)
    };

    let year_token = caps.get(3)?.as_str();
    let year: i32 = year_token.parse().ok()?;
    let year = match year_token.len() {
        2 => 2000 + year,
        4 => year,
        _ => return None,
    };

    let mut hour = num(4)?;
    let minute = num(5)?;
    let second = caps.get(6).map_or(Some(0), |m| m.as_str().parse().ok())?;

    if let Some(meridiem) = caps.get(7) {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let pm = meridiem.as_str().eq_ignore_ascii_case("p");
        hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_day_first() {
        let ts = parse_timestamp("01/02/23, 10:00", true).unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 2, 1));
        assert_eq!((ts.hour(), ts.minute()), (10, 0));
    }

    #[test]
    fn test_month_first() {
        let ts = parse_timestamp("01/02/23, 10:00", false).unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 1, 2));
    }

    #[test]
    fn test_invalid_under_chosen_order() {
        // 1/15 is fine month-first, but there is no 15th month
        assert!(parse_timestamp("1/15/24, 10:30", false).is_some());
        assert!(parse_timestamp("1/15/24, 10:30", true).is_none());
    }

    #[test]
    fn test_two_digit_years_are_2000s() {
        assert_eq!(parse_timestamp("1/1/99, 00:00", true).unwrap().year(), 2099);
        assert_eq!(parse_timestamp("1/1/00, 00:00", true).unwrap().year(), 2000);
        assert_eq!(parse_timestamp("1/1/69, 00:00", true).unwrap().year(), 2069);
    }

    #[test]
    fn test_four_digit_year() {
        let ts = parse_timestamp("26.10.2025, 20:40", true).unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 10, 26));
    }

    #[test]
    fn test_three_digit_year_rejected() {
        assert!(parse_timestamp("1/1/202, 10:00", true).is_none());
    }

    #[test]
    fn test_twelve_hour_clock() {
        let pm = parse_timestamp("1/15/24, 10:30 PM", false).unwrap();
        assert_eq!(pm.hour(), 22);

        let midnight = parse_timestamp("1/15/24, 12:05 am", false).unwrap();
        assert_eq!(midnight.hour(), 0);

        let noon = parse_timestamp("1/15/24, 12:05 pm", false).unwrap();
        assert_eq!(noon.hour(), 12);

        let narrow = parse_timestamp("1/15/24, 9:05\u{202f}p.m.", false).unwrap();
        assert_eq!(narrow.hour(), 21);

        let spaced = parse_timestamp("15/01/24, 9:05 p. m.", true).unwrap();
        assert_eq!(spaced.hour(), 21);
        assert_eq!(parse_timestamp("15/01/24, 12:10 a. m.", true).unwrap().hour(), 0);
    }

    #[test]
    fn test_seconds() {
        let ts = parse_timestamp("15.01.24, 10:30:45", true).unwrap();
        assert_eq!(ts.second(), 45);
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(parse_timestamp("30/02/23, 10:00", true).is_none());
        assert!(parse_timestamp("01/02/23, 25:00", true).is_none());
        assert!(parse_timestamp("01/02/23, 10:61", true).is_none());
        assert!(parse_timestamp("01/02/23, 13:00 PM", true).is_none());
        assert!(parse_timestamp("01/02/23, 0:00 AM", true).is_none());
    }

    #[test]
    fn test_garbage() {
        assert!(parse_timestamp("", true).is_none());
        assert!(parse_timestamp("yesterday, noon", true).is_none());
    }
}

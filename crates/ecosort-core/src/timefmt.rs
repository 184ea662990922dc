//! Wall-clock reminder-time parsing.

use std::sync::OnceLock;

use regex::Regex;

static TIME_RE: OnceLock<Regex> = OnceLock::new();

fn time_re() -> &'static Regex {
    TIME_RE.get_or_init(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$").unwrap())
}

/// Parse an `HH:MM` time-of-day string.
///
/// Accepts `0 <= HH < 24` and `0 <= MM < 60`, with optional surrounding
/// whitespace. Malformed or out-of-range input yields `None`; this is
/// ordinary control flow, not an error.
pub fn parse_reminder_time(text: &str) -> Option<(u8, u8)> {
    let caps = time_re().captures(text)?;
    let hour: u8 = caps[1].parse().ok()?;
    let minute: u8 = caps[2].parse().ok()?;
    if hour < 24 && minute < 60 {
        Some((hour, minute))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_times() {
        assert_eq!(parse_reminder_time("08:30"), Some((8, 30)));
        assert_eq!(parse_reminder_time("0:00"), Some((0, 0)));
        assert_eq!(parse_reminder_time("23:59"), Some((23, 59)));
        assert_eq!(parse_reminder_time("  9:05  "), Some((9, 5)));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_reminder_time("24:00"), None);
        assert_eq!(parse_reminder_time("25:99"), None);
        assert_eq!(parse_reminder_time("12:60"), None);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_reminder_time("восемь тридцать"), None);
        assert_eq!(parse_reminder_time("8.30"), None);
        assert_eq!(parse_reminder_time("8:3"), None);
        assert_eq!(parse_reminder_time("12:345"), None);
        assert_eq!(parse_reminder_time(""), None);
        assert_eq!(parse_reminder_time("10:15 завтра"), None);
    }
}

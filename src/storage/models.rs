//! Journal data models
//!
//! These are the records exactly as they are persisted: the field names
//! below are the JSON keys of `commits.json` and `lifemojis.json`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date-time layouts accepted for a commit date, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Layout used when a commit date is shown in the log.
const DISPLAY_FORMAT: &str = "%Y/%-m/%-d";

/// A single dated journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Generated at creation, never changed afterwards
    pub id: String,

    /// Emoji glyph chosen from the lifemoji vocabulary
    pub lifemoji: String,

    /// Short headline
    pub title: String,

    /// Free-text body
    pub message: String,

    /// Timestamp as entered by the user
    pub date: String,
}

impl Commit {
    /// First six characters of the id, as shown in the log.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(6) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// The commit date as a UTC timestamp, if it parses.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_commit_date(&self.date)
    }

    /// The commit date in `yyyy/M/d` form.
    pub fn display_date(&self) -> String {
        format_commit_date(&self.date)
    }
}

/// An entry of the lifemoji vocabulary. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifemoji {
    pub emoji: String,
    pub code: String,
    pub description: String,
}

/// Parses a user supplied commit date.
///
/// Accepts RFC 3339 timestamps and the local `YYYY-MM-DD[ HH:MM[:SS]]`
/// layouts. Values without an offset are taken as UTC.
pub fn parse_commit_date(input: &str) -> Option<DateTime<Utc>> {
    parse_with_offset(input).map(|dt| dt.with_timezone(&Utc))
}

/// Parses a commit date keeping the offset it was written with.
fn parse_with_offset(input: &str) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }

    let naive = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(naive.and_utc().into())
}

/// Renders a stored date for display. Unparseable dates are shown verbatim.
///
/// The calendar day is the one in the date's own offset, so
/// `2024-03-05T01:00:00+09:00` shows as `2024/3/5`.
pub fn format_commit_date(input: &str) -> String {
    match parse_with_offset(input) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn commit_with(id: &str, date: &str) -> Commit {
        Commit {
            id: id.to_string(),
            lifemoji: "😀".to_string(),
            title: "title".to_string(),
            message: "message".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_commit_date("2024-01-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 1));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_commit_date("2024-03-05T23:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-05T21:30:00+00:00");
    }

    #[test]
    fn test_parse_javascript_iso_string() {
        let dt = parse_commit_date("2018-06-02T08:15:00.000Z").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 15);
    }

    #[test]
    fn test_parse_local_layouts() {
        assert!(parse_commit_date("2024-01-01 10:00").is_some());
        assert!(parse_commit_date("2024-01-01 10:00:30").is_some());
        assert!(parse_commit_date("2024-01-01T10:00").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_commit_date("").is_none());
        assert!(parse_commit_date("yesterday").is_none());
        assert!(parse_commit_date("2024-13-01").is_none());
    }

    #[test]
    fn test_format_drops_leading_zeros() {
        assert_eq!(format_commit_date("2024-01-01"), "2024/1/1");
        assert_eq!(format_commit_date("2023-11-25T12:00:00Z"), "2023/11/25");
    }

    #[test]
    fn test_format_uses_written_offset() {
        assert_eq!(format_commit_date("2024-03-05T01:00:00+09:00"), "2024/3/5");
        assert_eq!(format_commit_date("2024-03-05T23:30:00-05:00"), "2024/3/5");
    }

    #[test]
    fn test_format_keeps_unparseable_verbatim() {
        assert_eq!(format_commit_date("someday"), "someday");
    }

    #[test]
    fn test_short_id_truncates_to_six_chars() {
        let commit = commit_with("0123456789abcdef", "2024-01-01");
        assert_eq!(commit.short_id(), "012345");

        let short = commit_with("abc", "2024-01-01");
        assert_eq!(short.short_id(), "abc");
    }

    #[test]
    fn test_commit_json_field_names() {
        let commit = commit_with("id-1", "2024-01-01");
        let value = serde_json::to_value(&commit).unwrap();

        for key in ["id", "lifemoji", "title", "message", "date"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }
}

//! Tolerant parsing and canonical formatting of feed timestamps.
//!
//! Real-world feeds deviate from strict RFC3339 in a few recurring ways,
//! all of which this parser accepts:
//!
//! - the date/time separator may be `T`, `t`, or a space;
//! - fractional seconds are optional (exactly three digits when present);
//! - the zone offset may be `Z`, `±HH:MM`, or `±HHMM`.
//!
//! Everything else is rejected. Parsing is pure and locale-independent:
//! no cached formatter, no process state, results normalized to UTC.
//! Encoding always emits the canonical `2020-01-02T03:04:05Z` form.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, Timelike, Utc};
use serde::Serializer;

/// Parses a feed timestamp, returning `None` for anything outside the
/// accepted grammar or outside chrono's calendar range (e.g. day 32).
///
/// The character at offset 10 must be `T`, `t`, or a space; a `.` anywhere
/// in the input commits the string to carrying exactly three fractional
/// digits after the seconds.
pub fn parse_flexible(text: &str) -> Option<DateTime<Utc>> {
    let separator = *text.as_bytes().get(10)?;
    if separator != b'T' && separator != b't' && separator != b' ' {
        return None;
    }

    // Slicing via `get` so a multi-byte character in a garbage input
    // fails the parse instead of panicking on a char boundary.
    let date = NaiveDate::parse_from_str(text.get(..10)?, "%Y-%m-%d").ok()?;
    let rest = text.get(11..)?;
    let time = NaiveTime::parse_from_str(rest.get(..8)?, "%H:%M:%S").ok()?;
    let mut rest = rest.get(8..)?;

    let mut millis: u32 = 0;
    if text.contains('.') {
        let fraction = rest.strip_prefix('.')?;
        let digits = fraction.get(..3)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        millis = digits.parse().ok()?;
        rest = fraction.get(3..)?;
    }

    let offset = parse_offset(rest)?;
    let time = time.with_nanosecond(millis * 1_000_000)?;
    date.and_time(time)
        .and_local_timezone(offset)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses the trailing zone offset: `Z`/`z`, `±HH:MM`, or `±HHMM`.
fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text == "Z" || text == "z" {
        return FixedOffset::east_opt(0);
    }

    let sign = match text.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = text.get(1..)?;
    let (hours, minutes) = match digits.len() {
        5 if digits.as_bytes()[2] == b':' => (digits.get(..2)?, digits.get(3..)?),
        4 => (digits.get(..2)?, digits.get(2..)?),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Formats a timestamp in the canonical fixed-offset form the encoder
/// emits: whole seconds, `Z` suffix.
pub fn format_rfc3339(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serde adapter for the model's optional date fields. The fields carry
/// `skip_serializing_if = "Option::is_none"`, so this only ever sees `Some`.
pub(crate) fn serialize_opt<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(datetime) => serializer.serialize_str(&format_rfc3339(datetime)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(text: &str) -> String {
        format_rfc3339(&parse_flexible(text).unwrap())
    }

    #[test]
    fn test_uppercase_t_separator() {
        assert_eq!(utc("2020-01-02T03:04:05Z"), "2020-01-02T03:04:05Z");
    }

    #[test]
    fn test_lowercase_t_separator() {
        assert_eq!(utc("2020-01-02t03:04:05Z"), "2020-01-02T03:04:05Z");
    }

    #[test]
    fn test_space_separator() {
        assert_eq!(utc("2020-01-02 03:04:05Z"), "2020-01-02T03:04:05Z");
    }

    #[test]
    fn test_invalid_separator_rejected() {
        assert!(parse_flexible("2020-01-02X03:04:05Z").is_none());
        assert!(parse_flexible("2020-01-02_03:04:05Z").is_none());
    }

    #[test]
    fn test_colon_offset_normalized_to_utc() {
        assert_eq!(utc("2020-01-02t03:04:05.123+05:00"), "2020-01-01T22:04:05Z");
    }

    #[test]
    fn test_compact_offset_normalized_to_utc() {
        assert_eq!(utc("2020-01-02 03:04:05-0500"), "2020-01-02T08:04:05Z");
    }

    #[test]
    fn test_fractional_seconds_parsed_as_millis() {
        let parsed = parse_flexible("2020-01-02T03:04:05.987Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 987);
    }

    #[test]
    fn test_dot_without_three_digits_rejected() {
        assert!(parse_flexible("2020-01-02T03:04:05.9Z").is_none());
        assert!(parse_flexible("2020-01-02T03:04:05.Z").is_none());
    }

    #[test]
    fn test_invalid_offset_rejected() {
        assert!(parse_flexible("2020-01-02T03:04:05").is_none());
        assert!(parse_flexible("2020-01-02T03:04:05Q").is_none());
        assert!(parse_flexible("2020-01-02T03:04:05+5:00").is_none());
        assert!(parse_flexible("2020-01-02T03:04:05+25:00").is_none());
        assert!(parse_flexible("2020-01-02T03:04:05+05:60").is_none());
        assert!(parse_flexible("2020-01-02T03:04:05+0500junk").is_none());
    }

    #[test]
    fn test_offset_with_non_digits_rejected() {
        // i32::from_str would accept a leading `+` inside the hour field
        assert!(parse_flexible("2020-01-02T03:04:05++500").is_none());
    }

    #[test]
    fn test_calendar_range_enforced() {
        assert!(parse_flexible("2020-01-32T03:04:05Z").is_none());
        assert!(parse_flexible("2020-13-02T03:04:05Z").is_none());
        assert!(parse_flexible("2020-01-02T24:04:05Z").is_none());
    }

    #[test]
    fn test_short_and_multibyte_inputs_do_not_panic() {
        assert!(parse_flexible("").is_none());
        assert!(parse_flexible("2020-01-02").is_none());
        assert!(parse_flexible("2020-01-02T03:04").is_none());
        assert!(parse_flexible("2020-01-0é03:04:05Z").is_none());
        assert!(parse_flexible("2020-01-02Té3:04:05Z").is_none());
    }
}

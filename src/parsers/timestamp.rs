//! Timestamp normalization and the local day window.
//!
//! Claude Code writes two timestamp encodings: `history.jsonl` stores epoch
//! milliseconds, agent files store ISO-8601 strings (usually `Z`-suffixed).
//! Both are normalized to a naive local wall-clock value. For zone-aware
//! strings the offset is dropped rather than converted, so the wall clock as
//! written is what gets compared against local midnight.

use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp out of range: {0} ms")]
    OutOfRange(i64),
    #[error("invalid ISO-8601 timestamp: {0:?}")]
    InvalidIso8601(String),
}

/// A timestamp as it appears on a log line, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl RawTimestamp {
    /// Normalize to naive local time
    pub fn to_local_naive(&self) -> Result<NaiveDateTime, TimestampError> {
        match self {
            RawTimestamp::Millis(ms) => parse_millis(*ms),
            RawTimestamp::Text(s) => parse_iso8601(s),
        }
    }
}

/// Convert epoch milliseconds to local wall-clock time
pub fn parse_millis(ms: i64) -> Result<NaiveDateTime, TimestampError> {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.naive_local())
        .ok_or(TimestampError::OutOfRange(ms))
}

/// Parse an ISO-8601 string and strip any zone information
///
/// A trailing `Z` is treated as `+00:00`. Strings without an offset and bare
/// dates are accepted as already-naive values.
///
/// # Examples
///
/// ```
/// use claude_daylog::parsers::timestamp::parse_iso8601;
///
/// let ts = parse_iso8601("2024-05-01T09:00:00Z").unwrap();
/// assert_eq!(ts.to_string(), "2024-05-01 09:00:00");
/// ```
pub fn parse_iso8601(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = raw.trim();
    let normalized = match trimmed.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Ok(dt.naive_local());
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::default()));
    }

    Err(TimestampError::InvalidIso8601(raw.to_string()))
}

/// Half-open local day interval `[midnight(d), midnight(d) + 24h)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
    start: NaiveDateTime,
    end: NaiveDateTime,
    start_ms: i64,
    end_ms: i64,
}

impl DayWindow {
    pub fn new(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::default());
        let end = date
            .succ_opt()
            .map(|next| next.and_time(NaiveTime::default()))
            .unwrap_or(NaiveDateTime::MAX);

        Self {
            date,
            start,
            end,
            start_ms: local_epoch_millis(start).unwrap_or(i64::MIN),
            end_ms: local_epoch_millis(end).unwrap_or(i64::MAX),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Membership test on a naive (zone-stripped) timestamp
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts < self.end
    }

    /// Membership test on raw epoch milliseconds, against the epoch values
    /// of the two local midnights
    pub fn contains_millis(&self, ms: i64) -> bool {
        self.start_ms <= ms && ms < self.end_ms
    }
}

/// Epoch milliseconds of a local wall-clock time.
/// An ambiguous time (DST fall-back) resolves to the earlier instant; a time
/// inside a DST gap resolves to the first instant after the gap.
fn local_epoch_millis(naive: NaiveDateTime) -> Option<i64> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.timestamp_millis()),
        LocalResult::None => naive
            .checked_add_signed(TimeDelta::hours(1))
            .and_then(|later| Local.from_local_datetime(&later).earliest())
            .map(|dt| dt.timestamp_millis()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    fn local_ms(s: &str) -> i64 {
        Local.from_local_datetime(&naive(s)).earliest().unwrap().timestamp_millis()
    }

    #[test]
    fn test_parse_iso8601_with_z_suffix() {
        let ts = parse_iso8601("2024-05-01T09:00:00.123Z").unwrap();
        assert_eq!(ts, naive("2024-05-01 09:00:00.123"));
    }

    #[test]
    fn test_parse_iso8601_strips_offset_without_converting() {
        let ts = parse_iso8601("2024-05-01T23:30:00+09:00").unwrap();
        assert_eq!(ts, naive("2024-05-01 23:30:00"));
    }

    #[test]
    fn test_parse_iso8601_compact_offset() {
        let ts = parse_iso8601("2024-05-01T10:15:00-0500").unwrap();
        assert_eq!(ts, naive("2024-05-01 10:15:00"));
    }

    #[test]
    fn test_parse_iso8601_naive_and_date_only() {
        assert_eq!(parse_iso8601("2024-05-01T08:00:00").unwrap(), naive("2024-05-01 08:00:00"));
        assert_eq!(parse_iso8601("2024-05-01 08:00:00.5").unwrap(), naive("2024-05-01 08:00:00.5"));
        assert_eq!(parse_iso8601("2024-05-01").unwrap(), naive("2024-05-01 00:00:00"));
    }

    #[test]
    fn test_parse_iso8601_rejects_garbage() {
        let err = parse_iso8601("yesterday-ish").unwrap_err();
        assert_eq!(err, TimestampError::InvalidIso8601("yesterday-ish".to_string()));
        assert!(parse_iso8601("").is_err());
        assert!(parse_iso8601("2024-13-45T00:00:00Z").is_err());
    }

    #[test]
    fn test_parse_millis_matches_local_time() {
        let ms = local_ms("2024-05-01 09:00:00");
        assert_eq!(parse_millis(ms).unwrap(), naive("2024-05-01 09:00:00"));
    }

    #[test]
    fn test_parse_millis_out_of_range() {
        assert_eq!(parse_millis(i64::MAX), Err(TimestampError::OutOfRange(i64::MAX)));
    }

    #[test]
    fn test_raw_timestamp_deserializes_both_encodings() {
        let millis: RawTimestamp = serde_json::from_str("1714554000000").unwrap();
        assert_eq!(millis, RawTimestamp::Millis(1714554000000));

        let text: RawTimestamp = serde_json::from_str(r#""2024-05-01T09:00:00Z""#).unwrap();
        assert_eq!(text.to_local_naive().unwrap(), naive("2024-05-01 09:00:00"));
    }

    #[test]
    fn test_day_window_is_half_open() {
        let window = DayWindow::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        assert!(window.contains(naive("2024-05-01 00:00:00")));
        assert!(window.contains(naive("2024-05-01 23:59:59.999")));
        assert!(!window.contains(naive("2024-05-02 00:00:00")));
        assert!(!window.contains(naive("2024-04-30 23:59:59.999")));
    }

    #[test]
    fn test_day_window_contains_millis() {
        let window = DayWindow::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        assert!(window.contains_millis(local_ms("2024-05-01 00:00:00")));
        assert!(window.contains_millis(local_ms("2024-05-01 12:00:00")));
        assert!(!window.contains_millis(local_ms("2024-05-02 00:00:00")));
        assert!(!window.contains_millis(local_ms("2024-04-30 23:59:59.999")));
    }
}

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Canonical human-readable timestamp layout, interpreted as UTC.
pub const DATE_TIME_LAYOUT: &str = "%d-%m-%Y %H:%M:%S";

/// Wire encoding of series timestamp keys.
///
/// `DateTime` is the canonical encoding (`"DD-MM-YYYY HH:MM:SS"`).
/// `EpochMillis` covers feeds that ship raw millisecond epochs instead.
/// A series must use exactly one encoding; mixing them is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimestampFormat {
    #[default]
    DateTime,
    EpochMillis,
}

/// Parses one timestamp key into unix seconds under the selected encoding.
///
/// A pure-numeric key in a `DateTime` series (or vice versa) means the feed
/// mixed encodings, which is an error rather than a silent fallback.
pub fn parse_timestamp(raw: &str, format: TimestampFormat) -> ChartResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ChartError::InvalidTimestamp("empty timestamp".to_owned()));
    }

    match format {
        TimestampFormat::DateTime => {
            if is_numeric_key(raw) {
                return Err(ChartError::InvalidTimestamp(format!(
                    "numeric epoch `{raw}` in a date-time encoded series"
                )));
            }
            let parsed = NaiveDateTime::parse_from_str(raw, DATE_TIME_LAYOUT).map_err(|err| {
                ChartError::InvalidTimestamp(format!(
                    "`{raw}` does not match `DD-MM-YYYY HH:MM:SS`: {err}"
                ))
            })?;
            Ok(parsed.and_utc().timestamp() as f64)
        }
        TimestampFormat::EpochMillis => {
            let millis: i64 = raw.parse().map_err(|_| {
                ChartError::InvalidTimestamp(format!(
                    "`{raw}` is not a millisecond epoch in an epoch encoded series"
                ))
            })?;
            Ok(millis as f64 / 1000.0)
        }
    }
}

/// Renders unix seconds in the canonical layout, for tooltip labels.
#[must_use]
pub fn format_timestamp(unix_seconds: f64) -> String {
    match DateTime::<Utc>::from_timestamp(unix_seconds as i64, 0) {
        Some(dt) => dt.format(DATE_TIME_LAYOUT).to_string(),
        None => format!("{unix_seconds}"),
    }
}

fn is_numeric_key(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_layout_round_trips() {
        let seconds =
            parse_timestamp("01-01-2024 00:00:10", TimestampFormat::DateTime).expect("parse");
        assert_eq!(format_timestamp(seconds), "01-01-2024 00:00:10");
    }

    #[test]
    fn epoch_millis_converts_to_seconds() {
        let seconds =
            parse_timestamp("1704067200500", TimestampFormat::EpochMillis).expect("parse");
        assert_eq!(seconds, 1_704_067_200.5);
    }

    #[test]
    fn mixed_encodings_are_rejected() {
        assert!(matches!(
            parse_timestamp("1704067200500", TimestampFormat::DateTime),
            Err(ChartError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            parse_timestamp("01-01-2024 00:00:10", TimestampFormat::EpochMillis),
            Err(ChartError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(matches!(
            parse_timestamp("yesterday", TimestampFormat::DateTime),
            Err(ChartError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            parse_timestamp("", TimestampFormat::DateTime),
            Err(ChartError::InvalidTimestamp(_))
        ));
    }
}

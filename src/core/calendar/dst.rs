//! Civil UTC offset for Italian local time
//!
//! The offset comes from the Europe/Rome entry of the timezone database
//! when the `tzdb` feature is enabled. Without it, or for local instants
//! the database cannot resolve (the skipped hour in March), the EU rule
//! is applied:
//!
//! - from the last Sunday of March (inclusive)
//! - to the last Sunday of October (exclusive)
//!
//! local time is CEST (`+02:00`), otherwise CET (`+01:00`). The rule works
//! on whole days: both transition Sundays take their post-switch offset
//! from midnight, which agrees with the database at any lesson hour.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Central European Time, UTC+1
    pub static ref CET: FixedOffset = FixedOffset::east_opt(3600).unwrap();
    /// Central European Summer Time, UTC+2
    pub static ref CEST: FixedOffset = FixedOffset::east_opt(2 * 3600).unwrap();

    /// Trailing `Z` or numeric offset of an ISO-8601 timestamp
    static ref OFFSET_SUFFIX: Regex = Regex::new(r"(?:[Zz]|[+-]\d{2}:?\d{2})$").unwrap();
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Where civil offsets come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimezonePolicy {
    /// Europe/Rome from the timezone database, rule as fallback
    #[default]
    Database,
    /// Last-Sunday rule only
    FallbackRule,
}

/// Last Sunday of `month` in `year`, searched among days 25..=31
pub fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    (25..=31)
        .rev()
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .find(|d| d.weekday() == Weekday::Sun)
}

/// Offset the last-Sunday rule gives a local instant
pub fn rule_offset(local: NaiveDateTime) -> FixedOffset {
    let year = local.year();
    match (last_sunday(year, 3), last_sunday(year, 10)) {
        (Some(summer), Some(winter))
            if summer.and_time(NaiveTime::MIN) <= local && local < winter.and_time(NaiveTime::MIN) =>
        {
            *CEST
        }
        _ => *CET,
    }
}

/// Offset of a whole civil date under the last-Sunday rule
pub fn dst_offset(date: NaiveDate) -> FixedOffset {
    rule_offset(date.and_time(NaiveTime::MIN))
}

/// Offset of a local instant from the Europe/Rome database entry
#[cfg(feature = "tzdb")]
pub fn database_offset(local: NaiveDateTime) -> Option<FixedOffset> {
    use chrono::{LocalResult, Offset, TimeZone};

    match chrono_tz::Europe::Rome.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.offset().fix()),
        // Repeated hour in October: keep summer time, as the rule does
        LocalResult::Ambiguous(earliest, _) => Some(earliest.offset().fix()),
        LocalResult::None => None,
    }
}

/// Offset of a local instant from the Europe/Rome database entry
#[cfg(not(feature = "tzdb"))]
pub fn database_offset(_local: NaiveDateTime) -> Option<FixedOffset> {
    None
}

/// Civil offset of a local instant under the given policy
pub fn civil_offset(local: NaiveDateTime, policy: TimezonePolicy) -> FixedOffset {
    match policy {
        TimezonePolicy::Database => database_offset(local).unwrap_or_else(|| rule_offset(local)),
        TimezonePolicy::FallbackRule => rule_offset(local),
    }
}

/// Attach the civil offset to a local instant
pub fn attach_offset(local: NaiveDateTime, policy: TimezonePolicy) -> DateTime<FixedOffset> {
    let offset = civil_offset(local, policy);
    let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Format a zoned instant as `YYYY-MM-DDTHH:MM:SS±HH:MM`
pub fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Replace the offset of an ISO-8601 timestamp with the civil one.
///
/// The wall-clock part is kept as written; any existing `Z` or numeric
/// suffix is dropped. Timestamps that do not parse are logged and passed
/// through unchanged.
pub fn reattach_offset(timestamp: &str, policy: TimezonePolicy) -> String {
    let trimmed = timestamp.trim();
    let local_part = OFFSET_SUFFIX.replace(trimmed, "");

    match NaiveDateTime::parse_from_str(&local_part, TIMESTAMP_FORMAT) {
        Ok(local) => format_timestamp(&attach_offset(local, policy)),
        Err(err) => {
            warn!("cannot parse timestamp {:?}: {}", timestamp, err);
            timestamp.to_string()
        }
    }
}

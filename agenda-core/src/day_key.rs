//! Day-boundary normalization.
//!
//! Every date used as an index key goes through here. Caller values are
//! never mutated; a new [`DayKey`] is returned instead.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A calendar date truncated to midnight, used as the ordering key of the
/// event index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        DayKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// 00:00:00.000 on this day.
    pub fn midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey(date)
    }
}

impl From<NaiveDateTime> for DayKey {
    fn from(timestamp: NaiveDateTime) -> Self {
        normalize_to_day_boundary(timestamp)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Truncate a wall-clock timestamp to its day.
pub fn normalize_to_day_boundary(timestamp: NaiveDateTime) -> DayKey {
    DayKey(timestamp.date())
}

/// Truncate an instant to its day as seen in the locale's timezone.
pub fn normalize_instant<T: TimeZone>(instant: &DateTime<T>, locale: &Locale) -> DayKey {
    DayKey(instant.with_timezone(&locale.timezone).date_naive())
}

/// Epoch milliseconds to a day in the locale's timezone.
/// Returns `None` for timestamps chrono cannot represent.
pub fn normalize_timestamp_millis(millis: i64, locale: &Locale) -> Option<DayKey> {
    DateTime::from_timestamp_millis(millis).map(|instant| normalize_instant(&instant, locale))
}

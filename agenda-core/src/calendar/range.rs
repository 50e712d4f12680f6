//! Week and day generation for a date range.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::day::Day;
use crate::locale::Locale;
use crate::week::Week;

/// Generate the weeks covering `[min, max)` and the flat list of their days.
///
/// `max` is exclusive, so it is pulled back one minute before its month and
/// year are taken. The loop then compares months and years of the running
/// cursor, not days: a final week starting inside the last month is kept
/// even when it spills into the next one.
pub(crate) fn build_weeks(
    min: NaiveDateTime,
    max: NaiveDateTime,
    locale: &Locale,
    today: NaiveDate,
) -> (Vec<Week>, Vec<Day>) {
    let last_included = max - Duration::minutes(1);
    let max_month = last_included.month();
    let max_year = last_included.year();

    let mut weeks = Vec::new();
    let mut days = Vec::new();

    let mut cursor = min;
    while (cursor.month() <= max_month || cursor.year() < max_year) && cursor.year() < max_year + 1
    {
        let week = Week::spanning(cursor, locale, today);
        days.extend(week.days().iter().cloned());
        weeks.push(week);

        match cursor.checked_add_signed(Duration::weeks(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    (weeks, days)
}

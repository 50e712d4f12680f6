//! Week model.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::day::Day;
use crate::locale::Locale;

/// Seven consecutive days starting on the locale's first weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Week {
    week_of_year: u32,
    year: i32,
    /// 1-based month of the representative date.
    month: u32,
    date: NaiveDateTime,
    label: String,
    days: [Day; 7],
}

impl Week {
    pub fn new(
        week_of_year: u32,
        year: i32,
        month: u32,
        date: NaiveDateTime,
        label: String,
        days: [Day; 7],
    ) -> Self {
        Week {
            week_of_year,
            year,
            month,
            date,
            label,
            days,
        }
    }

    /// The week containing `cursor`, with `cursor` as its representative date.
    pub fn spanning(cursor: NaiveDateTime, locale: &Locale, today: NaiveDate) -> Self {
        let first = locale.week_start(cursor.date());
        let days = std::array::from_fn(|i| {
            let date = first.checked_add_days(Days::new(i as u64)).unwrap_or(NaiveDate::MAX);
            Day::new(date, today)
        });

        Week {
            week_of_year: locale.week_of_year(cursor.date()),
            year: cursor.year(),
            month: cursor.month(),
            date: cursor,
            label: cursor.format(&locale.month_label_format).to_string(),
            days,
        }
    }

    pub fn week_of_year(&self) -> u32 {
        self.week_of_year
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn days(&self) -> &[Day; 7] {
        &self.days
    }

    pub(crate) fn days_mut(&mut self) -> &mut [Day; 7] {
        &mut self.days
    }

    pub fn first_day(&self) -> &Day {
        &self.days[0]
    }

    pub fn last_day(&self) -> &Day {
        &self.days[6]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day().date() <= date && date <= self.last_day().date()
    }

    /// Column of `date` within this week.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| d.date() == date)
    }

    /// Full month name for the week holding the 15th, so the grid shows one
    /// label per month. The year is appended when it isn't `today_year`.
    pub fn mid_month_label(&self, locale: &Locale, today_year: i32) -> Option<String> {
        self.days.iter().find(|d| d.day_of_month() == 15)?;

        let month = self
            .date
            .format(&locale.month_name_format)
            .to_string()
            .to_uppercase();

        if self.year != today_year {
            Some(format!("{} {}", month, self.year))
        } else {
            Some(month)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn spanning_aligns_to_first_weekday() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let week = Week::spanning(at(2024, 1, 3), &Locale::us(), today);

        assert_eq!(week.first_day().date(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(week.last_day().date(), NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
        assert_eq!(week.year(), 2024);
        assert_eq!(week.month(), 1);
        assert_eq!(week.label(), "Jan");
        assert_eq!(week.week_of_year(), 1);
    }

    #[test]
    fn days_are_consecutive() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let week = Week::spanning(at(2024, 2, 29), &Locale::iso(), today);
        for pair in week.days().windows(2) {
            assert_eq!(pair[0].date() + Duration::days(1), pair[1].date());
        }
    }

    #[test]
    fn column_lookup() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let week = Week::spanning(at(2024, 1, 3), &Locale::us(), today);
        assert_eq!(week.column_of(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()), Some(3));
        assert_eq!(week.column_of(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()), None);
        assert!(week.contains(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
    }

    #[test]
    fn mid_month_label_only_on_the_fifteenth() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let locale = Locale::us();

        let with_15th = Week::spanning(at(2024, 1, 15), &locale, today);
        assert_eq!(with_15th.mid_month_label(&locale, 2024).as_deref(), Some("JANUARY"));
        assert_eq!(
            with_15th.mid_month_label(&locale, 2023).as_deref(),
            Some("JANUARY 2024")
        );

        let without = Week::spanning(at(2024, 1, 3), &locale, today);
        assert_eq!(without.mid_month_label(&locale, 2024), None);
    }
}

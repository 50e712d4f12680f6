//! Day model.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::day_key::DayKey;
use crate::locale::Locale;

/// One calendar day in the week grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    date: DayKey,
    is_today: bool,
    is_selected: bool,
}

impl Day {
    pub fn new(date: impl Into<DayKey>, today: NaiveDate) -> Self {
        let date = date.into();
        Day {
            is_today: date.date() == today,
            date,
            is_selected: false,
        }
    }

    pub fn key(&self) -> DayKey {
        self.date
    }

    pub fn date(&self) -> NaiveDate {
        self.date.date()
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.date().day()
    }

    pub fn is_first_of_month(&self) -> bool {
        self.day_of_month() == 1
    }

    pub fn is_today(&self) -> bool {
        self.is_today
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    /// Strictly before `today`; today itself is never past.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date.date() < today
    }

    /// Short month name, shown on the first day of a month.
    pub fn month_label(&self, locale: &Locale) -> String {
        self.date
            .date()
            .format(&locale.month_label_format)
            .to_string()
    }

    pub(crate) fn refresh_today(&mut self, today: NaiveDate) {
        self.is_today = self.date.date() == today;
    }
}

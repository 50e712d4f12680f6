//! Locale rules that shape the week grid.
//!
//! A locale decides which weekday opens a week, how week-of-year numbers are
//! counted, which timezone "today" is evaluated in, and the strftime patterns
//! used for labels.

use chrono::{Datelike, Days, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

fn default_weekday_format() -> String {
    "%a".to_string()
}

fn default_month_label_format() -> String {
    "%b".to_string()
}

fn default_month_name_format() -> String {
    "%B".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    pub tag: String,
    pub first_weekday: Weekday,
    /// Days of the new year a week needs before it counts as week 1.
    pub min_days_in_first_week: u8,
    pub timezone: Tz,
    #[serde(default = "default_weekday_format")]
    pub weekday_format: String,
    #[serde(default = "default_month_label_format")]
    pub month_label_format: String,
    #[serde(default = "default_month_name_format")]
    pub month_name_format: String,
}

impl Locale {
    /// Resolve a locale from a language tag such as `en-US` or `de-DE`.
    pub fn from_tag(tag: &str, timezone: Tz) -> AgendaResult<Self> {
        let (first_weekday, min_days_in_first_week) = match tag {
            "en-US" | "en-CA" | "ja-JP" | "pt-BR" | "he-IL" => (Weekday::Sun, 1),
            "en-GB" | "en-IE" | "fr-FR" | "de-DE" | "es-ES" | "it-IT" | "nl-NL" | "sv-SE"
            | "ISO" => (Weekday::Mon, 4),
            "ar-EG" | "fa-IR" => (Weekday::Sat, 1),
            _ => return Err(AgendaError::UnknownLocale(tag.to_string())),
        };

        Ok(Locale {
            tag: tag.to_string(),
            first_weekday,
            min_days_in_first_week,
            timezone,
            weekday_format: default_weekday_format(),
            month_label_format: default_month_label_format(),
            month_name_format: default_month_name_format(),
        })
    }

    /// Sunday-first weeks, week 1 contains January 1st.
    pub fn us() -> Self {
        Locale {
            tag: "en-US".to_string(),
            first_weekday: Weekday::Sun,
            min_days_in_first_week: 1,
            timezone: Tz::UTC,
            weekday_format: default_weekday_format(),
            month_label_format: default_month_label_format(),
            month_name_format: default_month_name_format(),
        }
    }

    /// Monday-first weeks, week 1 is the first with four days in the new year.
    pub fn iso() -> Self {
        Locale {
            tag: "ISO".to_string(),
            first_weekday: Weekday::Mon,
            min_days_in_first_week: 4,
            ..Locale::us()
        }
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Current date in this locale's timezone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Days to move from `date` back to the first weekday. Always in `-6..=0`.
    pub fn week_offset(&self, date: NaiveDate) -> i64 {
        let mut offset = self.first_weekday.number_from_sunday() as i64
            - date.weekday().number_from_sunday() as i64;
        if offset > 0 {
            offset -= 7;
        }
        offset
    }

    /// First day of the week containing `date`, clamped to the earliest
    /// representable date.
    pub fn week_start(&self, date: NaiveDate) -> NaiveDate {
        date.checked_add_signed(Duration::days(self.week_offset(date)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Week-of-year number under this locale's counting rule.
    ///
    /// Days at the end of December can fall into week 1 of the next year and
    /// days at the start of January into the last week of the previous year.
    pub fn week_of_year(&self, date: NaiveDate) -> u32 {
        let jan1 = start_of_year(date);

        if let Some(next_jan1) = jan1.checked_add_days(Days::new(366)).map(start_of_year)
            && date >= self.first_week_start(next_jan1)
        {
            return 1;
        }

        let this_year = self.first_week_start(jan1);
        let base = match jan1.pred_opt() {
            Some(last_day) if date < this_year => self.first_week_start(start_of_year(last_day)),
            _ => this_year,
        };

        ((self.week_start(date) - base).num_days() / 7 + 1).max(1) as u32
    }

    fn first_week_start(&self, jan1: NaiveDate) -> NaiveDate {
        let start = self.week_start(jan1);
        let days_in_new_year = 7 - (jan1 - start).num_days();
        if days_in_new_year >= i64::from(self.min_days_in_first_week) {
            start
        } else {
            start.checked_add_days(Days::new(7)).unwrap_or(start)
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::us()
    }
}

fn start_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal0(0).unwrap_or(date)
}

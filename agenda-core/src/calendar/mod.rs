//! Calendar index: the week grid plus the per-day event index.

mod event_index;
mod range;

pub use event_index::EventIndex;

use std::collections::{BTreeMap, HashMap};

use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::day::Day;
use crate::day_key::DayKey;
use crate::error::{AgendaError, AgendaResult};
use crate::event::{CalendarEvent, DayRef, WeekRef};
use crate::locale::Locale;
use crate::week::Week;

/// Title given to placeholder instances when none is configured.
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "No events";

/// Room needed around a range for week alignment and the following year's
/// week numbering.
const RANGE_MARGIN_DAYS: u64 = 400;

/// Inputs for [`CalendarIndex`]. Unset dates or locale fail the build.
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    min_date: Option<NaiveDateTime>,
    max_date: Option<NaiveDateTime>,
    locale: Option<Locale>,
    placeholder_text: Option<String>,
    show_placeholders: bool,
    today: Option<NaiveDate>,
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        CalendarBuilder {
            min_date: None,
            max_date: None,
            locale: None,
            placeholder_text: None,
            show_placeholders: true,
            today: None,
        }
    }
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// First instant covered (inclusive).
    pub fn min_date(mut self, min_date: NaiveDateTime) -> Self {
        self.min_date = Some(min_date);
        self
    }

    /// End of the range (exclusive).
    pub fn max_date(mut self, max_date: NaiveDateTime) -> Self {
        self.max_date = Some(max_date);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = Some(text.into());
        self
    }

    pub fn show_placeholders(mut self, show: bool) -> Self {
        self.show_placeholders = show;
        self
    }

    /// Override "today" instead of reading the clock in the locale's timezone.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn build<E: CalendarEvent>(self) -> AgendaResult<CalendarIndex<E>> {
        let (Some(min), Some(max)) = (self.min_date, self.max_date) else {
            return Err(AgendaError::InvalidRange(
                "min_date and max_date must be set".to_string(),
            ));
        };
        let Some(locale) = self.locale else {
            return Err(AgendaError::InvalidRange("locale must be set".to_string()));
        };
        if min >= max {
            return Err(AgendaError::InvalidRange(format!(
                "min_date {} must be before max_date {}",
                min, max
            )));
        }

        if min.date().checked_sub_days(Days::new(RANGE_MARGIN_DAYS)).is_none()
            || max.date().checked_add_days(Days::new(RANGE_MARGIN_DAYS)).is_none()
        {
            return Err(AgendaError::InvalidRange(format!(
                "{} to {} is too close to the limits of representable dates",
                min, max
            )));
        }

        let today = self.today.unwrap_or_else(|| locale.today());
        let (weeks, days) = range::build_weeks(min, max, &locale, today);

        info!(
            weeks = weeks.len(),
            days = days.len(),
            locale = %locale.tag,
            "built calendar range"
        );

        Ok(CalendarIndex {
            locale,
            today,
            placeholder_text: self
                .placeholder_text
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_TEXT.to_string()),
            show_placeholders: self.show_placeholders,
            weeks,
            days,
            events: EventIndex::new(),
        })
    }
}

/// Shared calendar state: weeks and days for the grid, event instances for
/// the agenda list.
///
/// Weeks, days and events are replaced wholesale by [`CalendarBuilder::build`],
/// [`CalendarIndex::load_events`] and [`CalendarIndex::set_events`]; only the
/// today/selected flags are edited in place.
#[derive(Debug, Clone)]
pub struct CalendarIndex<E> {
    locale: Locale,
    today: NaiveDate,
    placeholder_text: String,
    show_placeholders: bool,
    weeks: Vec<Week>,
    days: Vec<Day>,
    events: EventIndex<E>,
}

impl<E: CalendarEvent> CalendarIndex<E> {
    /// Install weeks, days and events built elsewhere. Events go through
    /// [`CalendarIndex::set_events`], so no placeholders are added.
    pub fn from_prebuilt(
        locale: Locale,
        weeks: Vec<Week>,
        days: Vec<Day>,
        events: impl IntoIterator<Item = E>,
    ) -> Self {
        let today = days
            .iter()
            .find(|d| d.is_today())
            .map(Day::date)
            .unwrap_or_else(|| locale.today());

        let mut calendar = CalendarIndex {
            locale,
            today,
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            show_placeholders: true,
            weeks,
            days,
            events: EventIndex::new(),
        };
        calendar.set_events(events);
        calendar
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder_text
    }

    pub fn show_placeholders(&self) -> bool {
        self.show_placeholders
    }

    pub fn set_show_placeholders(&mut self, show: bool) {
        self.show_placeholders = show;
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn week(&self, week: WeekRef) -> Option<&Week> {
        self.weeks.get(week.0)
    }

    pub fn day(&self, day: DayRef) -> Option<&Day> {
        self.days.get(day.0)
    }

    pub fn events(&self) -> &EventIndex<E> {
        &self.events
    }

    /// Expand `events` into per-day instances bound to this calendar's days.
    ///
    /// Days with no matching event get one placeholder from `placeholder`,
    /// titled with the placeholder text. Events dated outside the grid are
    /// dropped.
    pub fn load_events<I, F>(&mut self, events: I, mut placeholder: F)
    where
        I: IntoIterator<Item = E>,
        F: FnMut() -> E,
    {
        let mut by_day: BTreeMap<DayKey, Vec<E>> = BTreeMap::new();
        let mut received = 0usize;
        for event in events {
            received += 1;
            by_day.entry(event.day_key()).or_default().push(event);
        }

        let day_refs: HashMap<DayKey, DayRef> = self
            .days
            .iter()
            .enumerate()
            .map(|(i, day)| (day.key(), DayRef(i)))
            .collect();

        let mut index = EventIndex::new();
        let mut bound = 0usize;
        let mut placeholders = 0usize;

        for (w, week) in self.weeks.iter().enumerate() {
            let week_ref = WeekRef(w);
            for day in week.days() {
                let key = day.key();
                let day_ref = day_refs.get(&key).copied();

                match by_day.get(&key).filter(|group| !group.is_empty()) {
                    Some(group) => {
                        for event in group {
                            let mut instance = event.clone();
                            self.bind(&mut instance, key, day_ref, week_ref);
                            index.push(key, instance);
                            bound += 1;
                        }
                    }
                    None => {
                        let mut instance = placeholder();
                        instance.set_location(String::new());
                        instance.set_title(self.placeholder_text.clone());
                        instance.set_placeholder(true);
                        self.bind(&mut instance, key, day_ref, week_ref);
                        index.push(key, instance);
                        placeholders += 1;
                    }
                }
            }
        }

        self.events = index;

        info!(received, bound, placeholders, "loaded events");
    }

    fn bind(&self, instance: &mut E, day: DayKey, day_ref: Option<DayRef>, week: WeekRef) {
        instance.set_instance_day(day);
        instance.set_day_reference(day_ref);
        instance.set_week_reference(Some(week));
        instance.set_show_placeholders(self.show_placeholders);
    }

    /// Replace the event index with `events` as they are: grouped by day,
    /// not bound to weeks, no placeholders.
    pub fn set_events(&mut self, events: impl IntoIterator<Item = E>) {
        self.events = EventIndex::from_events(events);
        debug!(instances = self.events.len(), "replaced event index");
    }

    pub fn flatten(&self) -> Vec<&E> {
        self.events.flatten()
    }

    pub fn event_at(&self, position: usize) -> Option<&E> {
        self.events.event_at(position)
    }

    pub fn index_for_day(&self, day: impl Into<DayKey>) -> Option<usize> {
        self.events.index_for_day(day)
    }

    /// Instances on one day, empty when there are none.
    pub fn events_for_day(&self, day: impl Into<DayKey>) -> &[E] {
        self.events.get(day.into())
    }

    /// Whether the day has at least one real (non-placeholder) instance.
    pub fn has_events(&self, day: impl Into<DayKey>) -> bool {
        self.events_for_day(day).iter().any(|e| !e.is_placeholder())
    }

    /// Grid cell holding `day`: the week and the column within it.
    pub fn grid_position(&self, day: impl Into<DayKey>) -> Option<(WeekRef, usize)> {
        let date = day.into().date();
        let w = self
            .weeks
            .partition_point(|week| week.last_day().date() < date);
        let week = self.weeks.get(w)?;
        week.column_of(date).map(|column| (WeekRef(w), column))
    }

    /// Flat day index for `day`.
    pub fn day_ref(&self, day: impl Into<DayKey>) -> Option<DayRef> {
        let key = day.into();
        self.days.iter().position(|d| d.key() == key).map(DayRef)
    }

    /// Move the "today" flag to `today`.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
        self.for_each_day_mut(|day| day.refresh_today(today));
    }

    /// Select exactly one day, clearing any previous selection.
    pub fn select_day(&mut self, day: impl Into<DayKey>) -> Option<&Day> {
        let key = day.into();
        let target = self.day_ref(key)?;
        self.for_each_day_mut(|day| day.set_selected(day.key() == key));
        self.days.get(target.0)
    }

    pub fn clear_selection(&mut self) {
        self.for_each_day_mut(|day| day.set_selected(false));
    }

    pub fn selected_day(&self) -> Option<&Day> {
        self.days.iter().find(|d| d.is_selected())
    }

    fn for_each_day_mut(&mut self, mut f: impl FnMut(&mut Day)) {
        for week in &mut self.weeks {
            week.days_mut().iter_mut().for_each(&mut f);
        }
        self.days.iter_mut().for_each(f);
    }
}

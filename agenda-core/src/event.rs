//! Event capability contract.
//!
//! The index only touches events through [`CalendarEvent`], so callers can
//! bring their own event types carrying extra fields. [`BaseCalendarEvent`]
//! is the stock implementation.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::day_key::{DayKey, normalize_to_day_boundary};
use crate::error::{AgendaError, AgendaResult};

/// Position of a Day in the calendar's flat day list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRef(pub usize);

/// Position of a Week in the calendar's week list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekRef(pub usize);

/// Renderer key used when an event doesn't name its own kind.
pub const DEFAULT_EVENT_KIND: &str = "default";

/// Fields the calendar index reads and writes on an event.
///
/// `Clone` is the copy contract: every bound instance is an independent
/// value, never a shared reference to the source event.
pub trait CalendarEvent: Clone {
    fn title(&self) -> &str;
    fn set_title(&mut self, title: String);

    fn location(&self) -> &str;
    fn set_location(&mut self, location: String);

    /// ARGB colour.
    fn color(&self) -> u32;

    fn start_time(&self) -> NaiveDateTime;
    fn end_time(&self) -> NaiveDateTime;

    fn instance_day(&self) -> Option<DayKey>;
    fn set_instance_day(&mut self, day: DayKey);

    fn day_reference(&self) -> Option<DayRef>;
    fn set_day_reference(&mut self, day: Option<DayRef>);

    fn week_reference(&self) -> Option<WeekRef>;
    fn set_week_reference(&mut self, week: Option<WeekRef>);

    fn is_placeholder(&self) -> bool;
    fn set_placeholder(&mut self, placeholder: bool);

    fn show_placeholders(&self) -> bool;
    fn set_show_placeholders(&mut self, show: bool);

    /// Copy with no day or week binding. The instance day is kept.
    fn detached(&self) -> Self {
        let mut copy = self.clone();
        copy.set_day_reference(None);
        copy.set_week_reference(None);
        copy
    }

    /// Key for renderer lookup.
    fn kind(&self) -> &str {
        DEFAULT_EVENT_KIND
    }

    /// Day this event is grouped under: the bound instance day, or the
    /// normalized start time for events that were never bound.
    fn day_key(&self) -> DayKey {
        self.instance_day()
            .unwrap_or_else(|| normalize_to_day_boundary(self.start_time()))
    }
}

fn default_color() -> u32 {
    0xFF33_B5E5
}

/// Stock event type, deserializable from JSON event files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCalendarEvent {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_color")]
    pub color: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,

    // Binding fields, written by the calendar index
    #[serde(skip)]
    instance_day: Option<DayKey>,
    #[serde(skip)]
    day_ref: Option<DayRef>,
    #[serde(skip)]
    week_ref: Option<WeekRef>,
    #[serde(skip)]
    placeholder: bool,
    #[serde(skip)]
    show_placeholders: bool,
}

impl BaseCalendarEvent {
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        BaseCalendarEvent {
            id: 0,
            title: title.into(),
            description: String::new(),
            location: location.into(),
            color: default_color(),
            start,
            end,
            all_day: false,
            instance_day: Some(normalize_to_day_boundary(start)),
            day_ref: None,
            week_ref: None,
            placeholder: false,
            show_placeholders: true,
        }
    }

    /// Empty template for "no events" placeholder instances.
    pub fn empty() -> Self {
        let mut event = BaseCalendarEvent::new(
            "",
            "",
            NaiveDateTime::default(),
            NaiveDateTime::default(),
        );
        event.instance_day = None;
        event
    }

    pub fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Read a JSON array of events.
    pub fn read_json(path: &Path) -> AgendaResult<Vec<Self>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| match e {
            AgendaError::Serialization(msg) => {
                AgendaError::Serialization(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_json(content: &str) -> AgendaResult<Vec<Self>> {
        serde_json::from_str(content).map_err(|e| AgendaError::Serialization(e.to_string()))
    }
}

impl CalendarEvent for BaseCalendarEvent {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn set_location(&mut self, location: String) {
        self.location = location;
    }

    fn color(&self) -> u32 {
        self.color
    }

    fn start_time(&self) -> NaiveDateTime {
        self.start
    }

    fn end_time(&self) -> NaiveDateTime {
        self.end
    }

    fn instance_day(&self) -> Option<DayKey> {
        self.instance_day
    }

    fn set_instance_day(&mut self, day: DayKey) {
        self.instance_day = Some(day);
    }

    fn day_reference(&self) -> Option<DayRef> {
        self.day_ref
    }

    fn set_day_reference(&mut self, day: Option<DayRef>) {
        self.day_ref = day;
    }

    fn week_reference(&self) -> Option<WeekRef> {
        self.week_ref
    }

    fn set_week_reference(&mut self, week: Option<WeekRef>) {
        self.week_ref = week;
    }

    fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    fn set_placeholder(&mut self, placeholder: bool) {
        self.placeholder = placeholder;
    }

    fn show_placeholders(&self) -> bool {
        self.show_placeholders
    }

    fn set_show_placeholders(&mut self, show: bool) {
        self.show_placeholders = show;
    }

    fn kind(&self) -> &str {
        if self.all_day { "all-day" } else { DEFAULT_EVENT_KIND }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_event_is_keyed_by_start_day() {
        let event = BaseCalendarEvent::new("Standup", "Room 4", at(15, 9), at(15, 10));
        assert_eq!(event.day_key().to_string(), "2024-01-15");
        assert!(!event.is_placeholder());
    }

    #[test]
    fn detached_copy_drops_grid_bindings() {
        let mut event = BaseCalendarEvent::new("Standup", "Room 4", at(15, 9), at(15, 10));
        event.set_day_reference(Some(DayRef(14)));
        event.set_week_reference(Some(WeekRef(2)));

        let copy = event.detached();
        assert_eq!(copy.day_reference(), None);
        assert_eq!(copy.week_reference(), None);
        assert_eq!(copy.day_key(), event.day_key());
    }

    #[test]
    fn json_events_fall_back_to_start_day() {
        let json = r#"[
            {"title": "Dentist", "start": "2024-01-20T14:00:00", "end": "2024-01-20T15:00:00"},
            {"title": "Holiday", "start": "2024-01-22T00:00:00", "end": "2024-01-23T00:00:00", "all_day": true}
        ]"#;
        let events = BaseCalendarEvent::from_json(json).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].instance_day(), None);
        assert_eq!(events[0].day_key().to_string(), "2024-01-20");
        assert_eq!(events[0].location(), "");
        assert_eq!(events[0].kind(), DEFAULT_EVENT_KIND);
        assert_eq!(events[1].kind(), "all-day");
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = BaseCalendarEvent::from_json("[{\"title\": 3}]").unwrap_err();
        assert!(matches!(err, AgendaError::Serialization(_)));
    }

    #[test]
    fn clones_are_independent() {
        let source = BaseCalendarEvent::new("Review", "", at(3, 9), at(3, 10));
        let mut copy = source.clone();
        copy.set_title("Changed".to_string());
        copy.set_week_reference(Some(WeekRef(2)));

        assert_eq!(source.title(), "Review");
        assert_eq!(source.week_reference(), None);
    }
}

//! Calendar and agenda indexing engine.
//!
//! This crate holds everything a week-grid picker and an agenda list share:
//! - `Locale`, `DayKey` and day-boundary normalization
//! - `Day` and `Week` cells built by `CalendarBuilder`
//! - `CalendarIndex`, which expands events into one instance per day and
//!   maps agenda positions to days and back
//! - `ScrollSync`, `RendererRegistry` and the `Agenda` coordinator

pub mod agenda;
pub mod calendar;
pub mod config;
pub mod controller;
pub mod day;
pub mod day_key;
pub mod error;
pub mod event;
pub mod highlight;
pub mod locale;
pub mod render;
pub mod scroll;
pub mod week;

pub use agenda::Agenda;
pub use calendar::{CalendarBuilder, CalendarIndex, DEFAULT_PLACEHOLDER_TEXT, EventIndex};
pub use config::AgendaConfig;
pub use controller::{NoopController, PickerController};
pub use day::Day;
pub use day_key::{DayKey, normalize_instant, normalize_timestamp_millis, normalize_to_day_boundary};
pub use error::{AgendaError, AgendaResult};
pub use event::{BaseCalendarEvent, CalendarEvent, DayRef, WeekRef};
pub use highlight::{HighlightDecorator, NoHighlight};
pub use locale::Locale;
pub use render::{EventRenderer, PlainEventRenderer, RendererRegistry};
pub use scroll::{IndicatorRotation, ScrollRequest, ScrollSync};
pub use week::Week;

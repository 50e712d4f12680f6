//! The coordinating context shared by the grid and the agenda list.
//!
//! One [`Agenda`] owns the calendar index and hands out references to it.
//! Before [`Agenda::init`] runs every query answers with an empty or absent
//! result instead of failing, so views can show an empty state.

use tracing::debug;

use crate::calendar::{CalendarBuilder, CalendarIndex};
use crate::controller::PickerController;
use crate::day::Day;
use crate::day_key::{DayKey, normalize_timestamp_millis};
use crate::error::AgendaResult;
use crate::event::CalendarEvent;
use crate::locale::Locale;
use crate::render::{EventRenderer, RendererRegistry};
use crate::scroll::{IndicatorRotation, ScrollRequest, ScrollSync};
use crate::week::Week;

pub struct Agenda<E, C> {
    calendar: Option<CalendarIndex<E>>,
    controller: C,
    scroll: ScrollSync,
    renderers: RendererRegistry<E>,
}

impl<E, C> Agenda<E, C>
where
    E: CalendarEvent + 'static,
    C: PickerController<E>,
{
    pub fn new(controller: C) -> Self {
        Agenda {
            calendar: None,
            controller,
            scroll: ScrollSync::default(),
            renderers: RendererRegistry::default(),
        }
    }

    pub fn with_renderers(mut self, renderers: RendererRegistry<E>) -> Self {
        self.renderers = renderers;
        self
    }

    /// Build the range, expand `events` and queue a scroll to today.
    pub fn init<I, F>(&mut self, builder: CalendarBuilder, events: I, placeholder: F) -> AgendaResult<()>
    where
        I: IntoIterator<Item = E>,
        F: FnMut() -> E,
    {
        let mut calendar = builder.build()?;
        calendar.load_events(events, placeholder);
        self.install(calendar);
        Ok(())
    }

    /// Use weeks, days and a complete event list prepared by the caller.
    /// The list is taken as is; empty days stay empty.
    pub fn init_prebuilt(
        &mut self,
        locale: Locale,
        weeks: Vec<Week>,
        days: Vec<Day>,
        events: impl IntoIterator<Item = E>,
    ) {
        self.install(CalendarIndex::from_prebuilt(locale, weeks, days, events));
    }

    fn install(&mut self, calendar: CalendarIndex<E>) {
        self.scroll.take_pending();
        self.scroll.anchor_to_today(&calendar);
        self.scroll.request_agenda_scroll(&calendar, calendar.today());
        self.calendar = Some(calendar);
    }

    pub fn is_ready(&self) -> bool {
        self.calendar.is_some()
    }

    pub fn calendar(&self) -> Option<&CalendarIndex<E>> {
        self.calendar.as_ref()
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn add_event_renderer(&mut self, renderer: impl EventRenderer<E> + 'static) {
        self.renderers.add(renderer);
    }

    pub fn renderers(&self) -> &RendererRegistry<E> {
        &self.renderers
    }

    /// Replace the agenda's events wholesale. Ignored before initialization.
    pub fn set_events(&mut self, events: impl IntoIterator<Item = E>) {
        match self.calendar.as_mut() {
            Some(calendar) => calendar.set_events(events),
            None => debug!("set_events called before initialization; ignoring"),
        }
    }

    /// The flattened agenda list, `None` before initialization.
    pub fn event_list(&self) -> Option<Vec<&E>> {
        self.calendar.as_ref().map(CalendarIndex::flatten)
    }

    /// Rendered agenda row at `position`.
    pub fn render_row(&self, position: usize) -> Option<String> {
        let event = self.calendar.as_ref()?.event_at(position)?;
        self.renderers.render(event)
    }

    pub fn selected_day(&self) -> Option<&Day> {
        self.calendar.as_ref()?.selected_day()
    }

    /// Agenda row tapped.
    pub fn on_item_click(&mut self, position: usize) {
        let Some(calendar) = self.calendar.as_ref() else {
            return;
        };
        if let Some(event) = calendar.event_at(position) {
            self.controller.on_event_selected(event);
        }
    }

    /// Grid cell tapped: select it, tell the controller, scroll the agenda.
    pub fn on_day_clicked(&mut self, day: impl Into<DayKey>) {
        let day = day.into();
        let Some(calendar) = self.calendar.as_mut() else {
            return;
        };
        if let Some(selected) = calendar.select_day(day) {
            self.controller.on_day_selected(selected);
        }
        self.scroll.request_agenda_scroll(&*calendar, day);
    }

    /// The agenda's sticky header now shows the day of `position`: follow
    /// with the grid.
    pub fn on_sticky_header_changed(&mut self, position: usize) {
        let Some(calendar) = self.calendar.as_ref() else {
            return;
        };
        if calendar.events().is_empty() {
            return;
        }
        if let Some(event) = calendar.event_at(position) {
            let day = event.day_key();
            self.scroll.request_grid_scroll(calendar, day);
            self.controller.on_scroll_to_date(day);
        }
    }

    /// Day header tapped: move the grid and report the event under it.
    pub fn on_header_click(&mut self, position: usize) {
        let Some(calendar) = self.calendar.as_ref() else {
            return;
        };
        if calendar.events().is_empty() {
            return;
        }
        if let Some(event) = calendar.event_at(position) {
            let copy = event.detached();
            self.scroll.request_grid_scroll(calendar, copy.day_key());
            self.controller.on_event_selected(&copy);
        }
    }

    /// Scroll the agenda to the day of an epoch-milliseconds timestamp.
    /// Zero means "no selection" and is ignored.
    pub fn set_selected_day(&mut self, timestamp_millis: i64) {
        if timestamp_millis == 0 {
            return;
        }
        let Some(calendar) = self.calendar.as_ref() else {
            return;
        };
        match normalize_timestamp_millis(timestamp_millis, calendar.locale()) {
            Some(day) => {
                self.scroll.request_agenda_scroll(&*calendar, day);
            }
            None => debug!(timestamp_millis, "timestamp out of range; ignoring"),
        }
    }

    /// Floating indicator pressed: go back to today.
    pub fn scroll_to_today(&mut self) -> Option<usize> {
        let calendar = self.calendar.as_ref()?;
        self.scroll.request_agenda_scroll(calendar, calendar.today())
    }

    /// Agenda scroll callback. `None` before initialization.
    pub fn on_agenda_scroll(&mut self, first_visible: usize, visible_count: usize) -> Option<IndicatorRotation> {
        self.calendar.as_ref()?;
        Some(self.scroll.on_agenda_scroll(first_visible, visible_count))
    }

    /// Scrolls queued since the last layout pass.
    pub fn take_pending_scrolls(&mut self) -> Vec<ScrollRequest> {
        self.scroll.take_pending()
    }
}

//! Notifications published to the embedding application.

use crate::day::Day;
use crate::day_key::DayKey;

/// Receives selection and scroll notifications from [`crate::Agenda`].
pub trait PickerController<E> {
    fn on_day_selected(&mut self, day: &Day);

    fn on_event_selected(&mut self, event: &E);

    fn on_scroll_to_date(&mut self, date: DayKey);
}

/// Controller that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopController;

impl<E> PickerController<E> for NoopController {
    fn on_day_selected(&mut self, _day: &Day) {}

    fn on_event_selected(&mut self, _event: &E) {}

    fn on_scroll_to_date(&mut self, _date: DayKey) {}
}

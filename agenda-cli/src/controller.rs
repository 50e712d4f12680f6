//! Terminal controller: echoes picker notifications.

use agenda_core::{BaseCalendarEvent, Day, DayKey, PickerController};
use owo_colors::OwoColorize;

#[derive(Debug, Default)]
pub struct PrintController {
    pub notifications: usize,
}

impl PickerController<BaseCalendarEvent> for PrintController {
    fn on_day_selected(&mut self, day: &Day) {
        self.notifications += 1;
        println!("{} {}", "day selected:".dimmed(), day.key());
    }

    fn on_event_selected(&mut self, event: &BaseCalendarEvent) {
        self.notifications += 1;
        println!("{} {} on {}", "event selected:".dimmed(), event.title.bold(), event.start.date());
    }

    fn on_scroll_to_date(&mut self, date: DayKey) {
        self.notifications += 1;
        println!("{} {}", "scrolled to:".dimmed(), date);
    }
}

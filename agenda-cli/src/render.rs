//! Terminal rendering for agenda-core types.
//!
//! Grid cells and agenda rows are plain strings colored with owo_colors.

use agenda_core::{
    BaseCalendarEvent, CalendarEvent, CalendarIndex, Day, EventRenderer, HighlightDecorator, Locale,
    Week,
};
use chrono::{Datelike, NaiveDate, Weekday};
use owo_colors::OwoColorize;

/// Width of one day cell in the week grid.
const CELL_WIDTH: usize = 4;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, grid: &GridContext<'_>) -> String;
}

/// What a grid cell needs beyond the day itself.
pub struct GridContext<'a> {
    pub locale: &'a Locale,
    pub today: NaiveDate,
    pub highlight: &'a dyn HighlightDecorator,
    pub has_events: &'a dyn Fn(&Day) -> bool,
}

fn rgb(argb: u32) -> (u8, u8, u8) {
    ((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
}

/// Timeline mark for the highlighted halves of a day: `┃` for both,
/// `╹` morning only, `╻` evening only.
fn half_day_mark(day: &Day, highlight: &dyn HighlightDecorator) -> Option<&'static str> {
    if !highlight.is_highlighted(day) {
        return None;
    }
    match (highlight.highlight_morning(day), highlight.highlight_evening(day)) {
        (true, true) => Some("┃"),
        (true, false) => Some("╹"),
        (false, true) => Some("╻"),
        (false, false) => None,
    }
}

impl Render for Day {
    fn render(&self, grid: &GridContext<'_>) -> String {
        let marker = if (grid.has_events)(self) { "•" } else { " " };
        let number = format!("{:>2}", self.day_of_month());

        let number = if self.is_today() {
            number.bold().reversed().to_string()
        } else if grid.highlight.is_highlighted(self)
            && (grid.highlight.highlight_past() || !self.is_past(grid.today))
        {
            let (r, g, b) = rgb(grid.highlight.highlight_text_color());
            number.truecolor(r, g, b).to_string()
        } else if self.is_past(grid.today) {
            number.dimmed().to_string()
        } else {
            number
        };

        let number = if self.is_selected() {
            number.underline().to_string()
        } else {
            number
        };

        let lead = match half_day_mark(self, grid.highlight) {
            Some(mark) => {
                let (r, g, b) = rgb(grid.highlight.highlight_line_color());
                mark.truecolor(r, g, b).to_string()
            }
            None => " ".to_string(),
        };

        format!("{}{}{}", lead, number, marker)
    }
}

impl Render for Week {
    fn render(&self, grid: &GridContext<'_>) -> String {
        let cells: String = self.days().iter().map(|d| d.render(grid)).collect();
        let label = self
            .days()
            .iter()
            .find(|d| d.is_first_of_month())
            .map(|d| d.month_label(grid.locale))
            .unwrap_or_default();
        format!("{:>4} {}{:>4}", self.week_of_year().dimmed(), cells, label.bold())
    }
}

/// Weekday header aligned with the grid cells.
pub fn render_header(week: &Week, format: &str) -> String {
    let names: String = week
        .days()
        .iter()
        .map(|d| {
            let name: String = d.date().format(format).to_string().chars().take(CELL_WIDTH - 1).collect();
            format!("{:>width$}", name, width = CELL_WIDTH)
        })
        .collect();
    format!("{:>4} {}", "", names.bold())
}

/// The whole grid, with one month heading per mid-month week.
pub fn render_grid<E: CalendarEvent>(
    calendar: &CalendarIndex<E>,
    highlight: &dyn HighlightDecorator,
) -> String {
    let Some(first) = calendar.weeks().first() else {
        return "No weeks in range".dimmed().to_string();
    };

    let has_events = |day: &Day| calendar.has_events(day.key());
    let grid = GridContext {
        locale: calendar.locale(),
        today: calendar.today(),
        highlight,
        has_events: &has_events,
    };

    let mut lines = vec![render_header(first, &calendar.locale().weekday_format)];
    for week in calendar.weeks() {
        let mut line = week.render(&grid);
        if let Some(label) = week.mid_month_label(calendar.locale(), calendar.today().year()) {
            line.push_str(&format!("  {}", label.dimmed()));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Format a day heading (e.g. "Today", "Tomorrow", "Wed Feb 25").
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Timed events: colored bullet, start time, title and an optional
/// location line.
pub struct TerminalEventRenderer;

impl EventRenderer<BaseCalendarEvent> for TerminalEventRenderer {
    fn kind(&self) -> &str {
        agenda_core::event::DEFAULT_EVENT_KIND
    }

    fn render(&self, event: &BaseCalendarEvent) -> Option<String> {
        if event.is_placeholder() {
            if !event.show_placeholders() {
                return None;
            }
            return Some(format!("{:>7} {}", "", event.title().dimmed().italic()));
        }

        let (r, g, b) = rgb(event.color);
        let mut row = format!(
            "{} {:>5} {}",
            "●".truecolor(r, g, b),
            event.start.format("%H:%M"),
            event.title()
        );
        if !event.location().is_empty() {
            row.push_str(&format!("\n{:>8}{}", "", event.location().dimmed()));
        }
        Some(row)
    }
}

/// All-day events carry no time.
pub struct AllDayRenderer;

impl EventRenderer<BaseCalendarEvent> for AllDayRenderer {
    fn kind(&self) -> &str {
        "all-day"
    }

    fn render(&self, event: &BaseCalendarEvent) -> Option<String> {
        let (r, g, b) = rgb(event.color);
        Some(format!("{} {} {}", "●".truecolor(r, g, b), "all-day".dimmed(), event.title()))
    }
}

/// Highlights Saturdays and Sundays.
pub struct WeekendHighlight;

impl HighlightDecorator for WeekendHighlight {
    fn highlight_line_color(&self) -> u32 {
        0xFFFF_8800
    }

    fn highlight_text_color(&self) -> u32 {
        0xFFE5_7373
    }

    fn is_highlighted(&self, day: &Day) -> bool {
        matches!(day.date().weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// The weekend starts Saturday evening.
    fn highlight_morning(&self, day: &Day) -> bool {
        day.date().weekday() == Weekday::Sun
    }

    fn highlight_evening(&self, _day: &Day) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::{CalendarBuilder, NoHighlight};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn date_labels_are_relative_near_today() {
        assert_eq!(format_date_label(date(10), date(10)), "Today");
        assert_eq!(format_date_label(date(11), date(10)), "Tomorrow");
        assert_eq!(format_date_label(date(9), date(10)), "Yesterday");
        assert_eq!(format_date_label(date(20), date(10)), "Sat Jan 20");
    }

    #[test]
    fn placeholders_hide_when_disabled() {
        let mut placeholder = BaseCalendarEvent::empty();
        placeholder.set_placeholder(true);
        placeholder.set_show_placeholders(false);
        assert!(TerminalEventRenderer.render(&placeholder).is_none());

        placeholder.set_show_placeholders(true);
        assert!(TerminalEventRenderer.render(&placeholder).is_some());
    }

    #[test]
    fn location_line_only_when_present() {
        let start = date(5).and_hms_opt(9, 30, 0).unwrap();
        let bare = BaseCalendarEvent::new("Standup", "", start, start);
        let placed = BaseCalendarEvent::new("Standup", "Room 4", start, start);

        let bare = TerminalEventRenderer.render(&bare).unwrap();
        assert!(bare.contains("09:30"));
        assert!(!bare.contains('\n'));
        assert!(TerminalEventRenderer.render(&placed).unwrap().contains("Room 4"));
    }

    #[test]
    fn all_day_rows_have_no_time() {
        let start = date(22).and_hms_opt(0, 0, 0).unwrap();
        let holiday = BaseCalendarEvent::new("Holiday", "", start, start).all_day();

        let row = AllDayRenderer.render(&holiday).unwrap();
        assert!(row.contains("all-day"));
        assert!(row.contains("Holiday"));
        assert!(!row.contains("00:00"));
    }

    #[test]
    fn weekend_highlight() {
        assert!(WeekendHighlight.is_highlighted(&Day::new(date(6), date(1))));
        assert!(!WeekendHighlight.is_highlighted(&Day::new(date(8), date(1))));
    }

    #[test]
    fn highlighted_halves_are_marked() {
        let locale = Locale::us();
        let no_events = |_: &Day| false;
        let grid = GridContext {
            locale: &locale,
            today: date(1),
            highlight: &WeekendHighlight,
            has_events: &no_events,
        };

        // Jan 6 2024 is a Saturday, Jan 7 a Sunday, Jan 8 a Monday
        let saturday = Day::new(date(6), date(1));
        let sunday = Day::new(date(7), date(1));
        let monday = Day::new(date(8), date(1));
        assert_eq!(half_day_mark(&saturday, &WeekendHighlight), Some("╻"));
        assert_eq!(half_day_mark(&sunday, &WeekendHighlight), Some("┃"));
        assert_eq!(half_day_mark(&monday, &WeekendHighlight), None);
        assert_eq!(half_day_mark(&sunday, &NoHighlight), None);

        assert!(sunday.render(&grid).contains('┃'));
        assert!(monday.render(&grid).starts_with(' '));
    }

    #[test]
    fn grid_has_header_and_one_line_per_week() {
        let calendar: CalendarIndex<BaseCalendarEvent> = CalendarBuilder::new()
            .min_date(date(1).and_hms_opt(0, 0, 0).unwrap())
            .max_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap())
            .locale(Locale::us())
            .today(date(10))
            .build()
            .unwrap();

        let grid = render_grid(&calendar, &NoHighlight);
        assert_eq!(grid.lines().count(), 1 + calendar.weeks().len());
        assert!(grid.contains("JANUARY"));
    }
}

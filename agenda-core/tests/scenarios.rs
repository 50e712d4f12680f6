use agenda_core::{
    Agenda, BaseCalendarEvent, CalendarBuilder, CalendarEvent, CalendarIndex, DEFAULT_PLACEHOLDER_TEXT,
    Locale, NoopController, ScrollRequest,
};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
}

fn event(title: &str, day: NaiveDate, hour: u32) -> BaseCalendarEvent {
    let start = day.and_hms_opt(hour, 0, 0).unwrap();
    BaseCalendarEvent::new(title, "", start, start + Duration::hours(1))
}

fn january(locale: Locale) -> CalendarIndex<BaseCalendarEvent> {
    CalendarBuilder::new()
        .min_date(midnight(2024, 1, 1))
        .max_date(midnight(2024, 2, 1))
        .locale(locale)
        .today(date(2024, 1, 10))
        .build()
        .unwrap()
}

#[test]
fn january_grid_starts_on_the_sunday_before() {
    let calendar = january(Locale::us());

    let first = calendar.weeks().first().unwrap().first_day();
    assert_eq!(first.date(), date(2023, 12, 31));
    assert_eq!(first.date().weekday(), Weekday::Sun);

    let last = calendar.weeks().last().unwrap();
    assert!(last.contains(date(2024, 1, 31)));
}

#[test]
fn weeks_are_seven_contiguous_days() {
    for locale in [Locale::us(), Locale::iso()] {
        let calendar: CalendarIndex<BaseCalendarEvent> = CalendarBuilder::new()
            .min_date(midnight(2023, 11, 1))
            .max_date(midnight(2024, 3, 1))
            .locale(locale.clone())
            .today(date(2024, 1, 10))
            .build()
            .unwrap();

        let mut expected = calendar.weeks()[0].first_day().date();
        assert_eq!(expected.weekday(), locale.first_weekday);
        for week in calendar.weeks() {
            assert_eq!(week.days().len(), 7);
            for day in week.days() {
                assert_eq!(day.date(), expected);
                expected = expected.succ_opt().unwrap();
            }
        }
        assert_eq!(calendar.days().len(), calendar.weeks().len() * 7);
    }
}

#[test]
fn one_event_and_placeholders_everywhere_else() {
    let mut calendar = january(Locale::us());
    calendar.load_events(vec![event("Review", date(2024, 1, 15), 10)], BaseCalendarEvent::empty);

    for day in calendar.days() {
        let entries = calendar.events_for_day(day.date());
        assert_eq!(entries.len(), 1, "{}", day.date());
        if day.date() == date(2024, 1, 15) {
            assert!(!entries[0].is_placeholder());
            assert_eq!(entries[0].title, "Review");
        } else {
            assert!(entries[0].is_placeholder());
            assert_eq!(entries[0].title, DEFAULT_PLACEHOLDER_TEXT);
        }
    }
    assert_eq!(calendar.flatten().len(), calendar.days().len());
}

#[test]
fn positions_past_the_end_are_not_found() {
    let mut calendar = january(Locale::us());
    calendar.load_events(Vec::new(), BaseCalendarEvent::empty);

    let total = calendar.flatten().len();
    assert!(calendar.event_at(total - 1).is_some());
    assert!(calendar.event_at(total).is_none());
    assert!(calendar.event_at(usize::MAX).is_none());
}

#[test]
fn index_for_day_lands_in_the_right_group() {
    let mut calendar = january(Locale::iso());
    let busy = date(2024, 1, 9);
    calendar.load_events(
        vec![
            event("a", busy, 8),
            event("b", busy, 9),
            event("c", busy, 10),
            event("d", date(2024, 1, 10), 8),
        ],
        BaseCalendarEvent::empty,
    );

    for day in calendar.days() {
        let position = calendar.index_for_day(day.date()).unwrap();
        assert_eq!(calendar.event_at(position).unwrap().day_key(), day.key());
    }
    assert_eq!(calendar.index_for_day(date(2024, 3, 1)), None);
}

#[test]
fn flatten_is_stable_and_ordered_by_day() {
    let mut calendar = january(Locale::us());
    calendar.load_events(
        vec![
            event("late", date(2024, 1, 20), 18),
            event("early", date(2024, 1, 5), 7),
        ],
        BaseCalendarEvent::empty,
    );

    let first: Vec<_> = calendar.flatten().iter().map(|e| e.day_key()).collect();
    let second: Vec<_> = calendar.flatten().iter().map(|e| e.day_key()).collect();
    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn set_events_groups_by_day_keeping_input_order() {
    let mut calendar = january(Locale::us());
    calendar.set_events(vec![
        event("second day, first", date(2024, 1, 3), 9),
        event("first day", date(2024, 1, 2), 12),
        event("second day, second", date(2024, 1, 3), 8),
    ]);

    let flat = calendar.flatten();
    let titles: Vec<_> = flat.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["first day", "second day, first", "second day, second"]);
    assert!(flat.iter().all(|e| !e.is_placeholder()));
}

#[test]
fn agenda_follows_grid_and_back() {
    let mut agenda: Agenda<BaseCalendarEvent, NoopController> = Agenda::new(NoopController);
    agenda
        .init(
            CalendarBuilder::new()
                .min_date(midnight(2024, 1, 1))
                .max_date(midnight(2024, 2, 1))
                .locale(Locale::us())
                .today(date(2024, 1, 10)),
            vec![event("Review", date(2024, 1, 15), 10)],
            BaseCalendarEvent::empty,
        )
        .unwrap();
    agenda.take_pending_scrolls();

    agenda.on_day_clicked(date(2024, 1, 15));
    let Some(ScrollRequest::Agenda { position }) = agenda.take_pending_scrolls().pop() else {
        panic!("expected an agenda scroll");
    };
    assert_eq!(agenda.render_row(position).as_deref(), Some("Review"));

    agenda.on_sticky_header_changed(position);
    let Some(ScrollRequest::Grid { week, column }) = agenda.take_pending_scrolls().pop() else {
        panic!("expected a grid scroll");
    };
    let calendar = agenda.calendar().unwrap();
    assert_eq!(calendar.week(week).unwrap().days()[column].date(), date(2024, 1, 15));
}

use agenda_core::{BaseCalendarEvent, CalendarEvent, NoopController, ScrollRequest};
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{RangeArgs, open};
use crate::render::format_date_label;

/// One agenda row as emitted by `--json`.
#[derive(Serialize)]
struct Row<'a> {
    position: usize,
    day: agenda_core::DayKey,
    id: u64,
    title: &'a str,
    description: &'a str,
    location: &'a str,
    placeholder: bool,
    kind: &'a str,
}

impl<'a> Row<'a> {
    fn new(position: usize, event: &'a BaseCalendarEvent) -> Self {
        Row {
            position,
            day: event.day_key(),
            id: event.id,
            title: event.title(),
            description: &event.description,
            location: event.location(),
            placeholder: event.is_placeholder(),
            kind: event.kind(),
        }
    }
}

pub fn run(args: &RangeArgs, all: bool, limit: usize, json: bool) -> Result<()> {
    let mut agenda = open(args, NoopController)?;

    // Init queues a scroll to today; the list starts there unless --all.
    let start = if all {
        0
    } else {
        agenda
            .take_pending_scrolls()
            .into_iter()
            .find_map(|request| match request {
                ScrollRequest::Agenda { position } => Some(position),
                ScrollRequest::Grid { .. } => None,
            })
            .unwrap_or(0)
    };

    let Some(events) = agenda.event_list() else {
        return Ok(());
    };
    let end = if all { events.len() } else { start.saturating_add(limit).min(events.len()) };

    if json {
        let rows: Vec<Row<'_>> = (start..end)
            .map(|position| Row::new(position, events[position]))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let Some(calendar) = agenda.calendar() else {
        return Ok(());
    };

    let mut current_day = None;
    let mut printed = 0usize;
    for position in start..end {
        let Some(row) = agenda.render_row(position) else {
            continue;
        };

        let day = events[position].day_key();
        if current_day != Some(day) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", format_date_label(day.date(), calendar.today()).bold());
            current_day = Some(day);
        }
        println!("  {}", row);
        printed += 1;
    }

    if printed == 0 {
        println!("{}", "No events found".dimmed());
    }

    Ok(())
}

use agenda_core::{ScrollRequest, ScrollSync};
use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::{RangeArgs, open};
use crate::controller::PrintController;

/// Where to jump.
pub enum Target {
    Date(NaiveDate),
    Position(usize),
    Timestamp(i64),
}

/// Rows assumed visible when reporting the back-to-today indicator.
const VISIBLE_ROWS: usize = 10;

pub fn run(args: &RangeArgs, target: Target) -> Result<()> {
    let mut agenda = open(args, PrintController::default())?;
    agenda.take_pending_scrolls();

    match target {
        Target::Date(date) => agenda.on_day_clicked(date),
        Target::Position(position) => agenda.on_sticky_header_changed(position),
        Target::Timestamp(millis) => agenda.set_selected_day(millis),
    }

    let requests = agenda.take_pending_scrolls();
    if requests.is_empty() && agenda.controller().notifications == 0 {
        println!("{}", "Nothing to scroll to".dimmed());
        return Ok(());
    }

    let Some(calendar) = agenda.calendar() else {
        return Ok(());
    };

    let mut agenda_position = None;
    for request in requests {
        match request {
            ScrollRequest::Agenda { position } => {
                let cell = ScrollSync::cell_for_agenda_position(calendar, position);
                println!("{} {}", "agenda →".bold(), position);
                if let Some((week, column)) = cell {
                    println!("{} week {} column {}", "grid   →".bold(), week.0, column);
                }
                agenda_position = Some(position);
            }
            ScrollRequest::Grid { week, column } => {
                println!("{} week {} column {}", "grid   →".bold(), week.0, column);
                if let Some(position) = ScrollSync::agenda_position_for_cell(calendar, week, column) {
                    println!("{} {}", "agenda →".bold(), position);
                }
            }
        }
    }

    if let Some(position) = agenda_position
        && let Some(rotation) = agenda.on_agenda_scroll(position, VISIBLE_ROWS)
        && rotation.visible
    {
        println!("{} {}°", "today indicator:".dimmed(), rotation.to);
    }

    Ok(())
}

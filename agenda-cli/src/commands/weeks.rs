use agenda_core::{HighlightDecorator, NoHighlight, NoopController};
use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::{RangeArgs, open};
use crate::render::{WeekendHighlight, render_grid};

pub fn run(args: &RangeArgs, select: Option<NaiveDate>, highlight_weekends: bool, json: bool) -> Result<()> {
    let mut agenda = open(args, NoopController)?;

    if let Some(date) = select {
        agenda.on_day_clicked(date);
        if agenda.selected_day().is_none() {
            anyhow::bail!("{date} is outside the calendar range");
        }
    }

    let Some(calendar) = agenda.calendar() else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(calendar.weeks())?);
        return Ok(());
    }

    let highlight: &dyn HighlightDecorator = if highlight_weekends {
        &WeekendHighlight
    } else {
        &NoHighlight
    };

    println!("{}", render_grid(calendar, highlight));
    println!(
        "{}",
        format!(
            "{} weeks, {} days, {} entries",
            calendar.weeks().len(),
            calendar.days().len(),
            calendar.events().len()
        )
        .dimmed()
    );

    Ok(())
}

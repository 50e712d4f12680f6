pub mod config;
pub mod goto;
pub mod list;
pub mod weeks;

use std::path::PathBuf;

use agenda_core::config::default_range;
use agenda_core::{Agenda, AgendaConfig, BaseCalendarEvent, PickerController, RendererRegistry};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use clap::Args;
use tracing::debug;

use crate::render::{AllDayRenderer, TerminalEventRenderer};

/// Range, locale and event source shared by every view.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First day of the calendar (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Day after the last one shown (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Locale tag deciding the first weekday (e.g. en-US, en-GB, de-DE)
    #[arg(long)]
    pub locale: Option<String>,

    /// IANA timezone used for "today" (defaults to the system timezone)
    #[arg(long)]
    pub timezone: Option<String>,

    /// JSON file holding an array of events
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Hide the row shown on days without events
    #[arg(long)]
    pub no_placeholders: bool,

    /// Title of the row shown on days without events
    #[arg(long)]
    pub placeholder_text: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl RangeArgs {
    /// Fold command-line overrides into the loaded configuration.
    fn apply(&self, mut config: AgendaConfig) -> AgendaConfig {
        if let Some(from) = self.from {
            config.min_date = Some(from);
        }
        if let Some(to) = self.to {
            config.max_date = Some(to);
        }
        if let Some(locale) = &self.locale {
            config.locale = Some(locale.clone());
        }
        if let Some(timezone) = &self.timezone {
            config.timezone = Some(timezone.clone());
        }
        if let Some(text) = &self.placeholder_text {
            config.placeholder_text = Some(text.clone());
        }
        if self.no_placeholders {
            config.show_placeholders = false;
        }
        config
    }
}

/// System timezone, or UTC when it can't be determined.
pub fn system_timezone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}

/// Load config and events, then build an initialized agenda.
pub fn open<C>(args: &RangeArgs, controller: C) -> Result<Agenda<BaseCalendarEvent, C>>
where
    C: PickerController<BaseCalendarEvent>,
{
    let config = args.apply(AgendaConfig::load()?);
    let timezone = system_timezone();
    let locale = config.resolve_locale(timezone)?;
    let today = args.today.unwrap_or_else(|| locale.today());

    let (default_min, default_max) = default_range(today);
    let min = config.min_date.unwrap_or(default_min);
    let max = config.max_date.unwrap_or(default_max);
    if min >= max {
        anyhow::bail!("--from ({min}) must be before --to ({max})");
    }

    let events = match &args.events {
        Some(path) => BaseCalendarEvent::read_json(path)?,
        None => Vec::new(),
    };
    debug!(count = events.len(), %min, %max, "opening agenda");

    let builder = config
        .builder(timezone)?
        .min_date(min.and_time(NaiveTime::MIN))
        .max_date(max.and_time(NaiveTime::MIN))
        .today(today);

    let mut renderers = RendererRegistry::new(TerminalEventRenderer);
    renderers.add(AllDayRenderer);

    let mut agenda = Agenda::new(controller).with_renderers(renderers);
    agenda.init(builder, events, BaseCalendarEvent::empty)?;
    Ok(agenda)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let config = AgendaConfig {
            locale: Some("en-US".into()),
            placeholder_text: Some("Nothing".into()),
            ..Default::default()
        };
        let args = RangeArgs {
            locale: Some("en-GB".into()),
            no_placeholders: true,
            ..Default::default()
        };

        let merged = args.apply(config);
        assert_eq!(merged.locale.as_deref(), Some("en-GB"));
        assert_eq!(merged.placeholder_text.as_deref(), Some("Nothing"));
        assert!(!merged.show_placeholders);
    }
}

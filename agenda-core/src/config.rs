//! Agenda configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarBuilder;
use crate::error::{AgendaError, AgendaResult};
use crate::locale::Locale;

static DEFAULT_LOCALE_TAG: &str = "en-US";

fn default_show_placeholders() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

/// Configuration at ~/.config/agenda/config.toml
///
/// Every field is optional. Dates are quoted `YYYY-MM-DD` strings; the
/// range ends before `max_date`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AgendaConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_text: Option<String>,

    #[serde(default = "default_show_placeholders", skip_serializing_if = "is_true")]
    pub show_placeholders: bool,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            min_date: None,
            max_date: None,
            locale: None,
            timezone: None,
            placeholder_text: None,
            show_placeholders: default_show_placeholders(),
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> AgendaResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> AgendaResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AgendaError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        toml::from_str(&content)
            .map_err(|e| AgendaError::Config(format!("Invalid {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AgendaResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AgendaResult<()> {
        let contents = format!(
            "\
# agenda configuration

# First and last day of the calendar (the last day is not shown):
# min_date = \"2024-01-01\"
# max_date = \"2025-01-01\"

# Week layout and labels:
# locale = \"{DEFAULT_LOCALE_TAG}\"

# Timezone used to decide what \"today\" is:
# timezone = \"Europe/Paris\"

# Title of the row shown on days without events:
# placeholder_text = \"No events\"
# show_placeholders = true
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Locale from the configured tag and timezone, falling back to
    /// `en-US` and `default_timezone`.
    pub fn resolve_locale(&self, default_timezone: Tz) -> AgendaResult<Locale> {
        let timezone = match self.timezone.as_deref() {
            Some(name) => {
                Tz::from_str(name).map_err(|_| AgendaError::UnknownTimezone(name.to_string()))?
            }
            None => default_timezone,
        };
        let tag = self.locale.as_deref().unwrap_or(DEFAULT_LOCALE_TAG);
        Locale::from_tag(tag, timezone)
    }

    /// Builder carrying everything configured. Unset dates stay unset.
    pub fn builder(&self, default_timezone: Tz) -> AgendaResult<CalendarBuilder> {
        let mut builder = CalendarBuilder::new()
            .locale(self.resolve_locale(default_timezone)?)
            .show_placeholders(self.show_placeholders);

        if let Some(min) = self.min_date {
            builder = builder.min_date(min.and_time(chrono::NaiveTime::MIN));
        }
        if let Some(max) = self.max_date {
            builder = builder.max_date(max.and_time(chrono::NaiveTime::MIN));
        }
        if let Some(text) = &self.placeholder_text {
            builder = builder.placeholder_text(text.clone());
        }

        Ok(builder)
    }
}

/// Default range around `today`: from the first of the month two months
/// back to one year ahead.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let month_start = today.with_day(1).unwrap_or(today);
    let min = month_start
        .checked_sub_months(Months::new(2))
        .unwrap_or(month_start);
    let max = today
        .checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX);
    (min, max)
}

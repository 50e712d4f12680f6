use agenda_core::AgendaConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

use super::system_timezone;

pub fn run(init: bool) -> Result<()> {
    let config_path = AgendaConfig::config_path()?;

    if init {
        if config_path.exists() {
            anyhow::bail!("{} already exists", config_path.display());
        }
        AgendaConfig::create_default_config(&config_path)?;
        println!("Created {}", config_path.display());
        return Ok(());
    }

    let config = AgendaConfig::load_from(&config_path)?;
    let locale = config.resolve_locale(system_timezone())?;

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    if !config_path.exists() {
        println!("  {}", "(not created yet, run `agenda config --init`)".dimmed());
    }

    println!("{}", "Effective".bold());
    println!("  Locale:    {} (weeks start on {})", locale.tag, locale.first_weekday);
    println!("  Timezone:  {}", locale.timezone);
    println!("  Today:     {}", locale.today());
    println!(
        "  Placeholders: {}",
        if config.show_placeholders { "shown" } else { "hidden" }
    );

    Ok(())
}

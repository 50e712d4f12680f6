mod commands;
mod controller;
mod logging;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use commands::RangeArgs;
use commands::goto::Target;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Week grid and agenda list for a set of events")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the week grid
    Weeks {
        #[command(flatten)]
        range: RangeArgs,

        /// Mark this day as selected (YYYY-MM-DD)
        #[arg(long)]
        select: Option<NaiveDate>,

        /// Color Saturdays and Sundays
        #[arg(long)]
        highlight_weekends: bool,

        /// Print weeks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the agenda list, starting at today
    List {
        #[command(flatten)]
        range: RangeArgs,

        /// Print every row from the start of the range
        #[arg(long)]
        all: bool,

        /// Number of rows to print
        #[arg(short = 'n', long, default_value_t = 30)]
        limit: usize,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Translate a date, agenda position or timestamp between the two views
    Goto {
        #[command(flatten)]
        range: RangeArgs,

        /// Day tapped in the grid (YYYY-MM-DD)
        #[arg(long, conflicts_with_all = ["position", "timestamp"])]
        date: Option<NaiveDate>,

        /// Agenda row now under the sticky header
        #[arg(long, conflicts_with = "timestamp")]
        position: Option<usize>,

        /// Epoch milliseconds to select (0 selects nothing)
        #[arg(long)]
        timestamp: Option<i64>,
    },
    /// Show configuration paths and effective settings
    Config {
        /// Write a commented default config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Weeks {
            range,
            select,
            highlight_weekends,
            json,
        } => commands::weeks::run(&range, select, highlight_weekends, json),
        Commands::List {
            range,
            all,
            limit,
            json,
        } => commands::list::run(&range, all, limit, json),
        Commands::Goto {
            range,
            date,
            position,
            timestamp,
        } => {
            let target = match (date, position, timestamp) {
                (Some(date), _, _) => Target::Date(date),
                (_, Some(position), _) => Target::Position(position),
                (_, _, Some(millis)) => Target::Timestamp(millis),
                _ => anyhow::bail!("Pass one of --date, --position or --timestamp"),
            };
            commands::goto::run(&range, target)
        }
        Commands::Config { init } => commands::config::run(init),
    }
}

mod commands;
mod render;
mod store;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use planbook_core::Preferences;

#[derive(Parser)]
#[command(name = "planbook")]
#[command(about = "Lay out and view your planbook items in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one day as a time grid
    Day {
        /// Date to show (e.g. "2025-03-20", "today", "next friday")
        date: Option<String>,

        /// Container width in pixels, to preview responsive compression
        #[arg(short, long)]
        width: Option<f32>,

        /// Print the computed layout as JSON instead of drawing it
        #[arg(long)]
        json: bool,

        /// Hide Saturday and Sunday
        #[arg(long)]
        no_weekends: bool,
    },
    /// Show lane assignments for each day of a week
    Week {
        /// Any date inside the week to show
        date: Option<String>,

        /// Hide Saturday and Sunday
        #[arg(long)]
        no_weekends: bool,
    },
    /// Flat chronological listing of upcoming items
    Agenda {
        /// Show items from this date (default: today)
        #[arg(long)]
        from: Option<String>,

        /// Show items until this date (default: from + 7 days)
        #[arg(long)]
        to: Option<String>,
    },
    /// Run canned sample items through the layout pipeline
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let prefs = Preferences::load()?;

    match cli.command {
        Commands::Day { date, width, json, no_weekends } => {
            let date = parse_date_arg(date.as_deref())?;
            commands::day::run(&prefs, date, width, json, no_weekends)
        }
        Commands::Week { date, no_weekends } => {
            let date = parse_date_arg(date.as_deref())?;
            commands::week::run(&prefs, date, no_weekends)
        }
        Commands::Agenda { from, to } => {
            let from = parse_date_arg(from.as_deref())?;
            let to = to.as_deref().map(parse_date).transpose()?;
            commands::agenda::run(&prefs, from, to)
        }
        Commands::Demo => commands::demo::run(&prefs),
    }
}

fn parse_date_arg(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        None => Ok(Local::now().date_naive()),
        Some(s) => parse_date(s),
    }
}

/// Parse a date argument, accepting "2025-03-20" as well as fuzzy phrases
/// like "today" or "next friday".
fn parse_date(s: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    let dt = fuzzydate::parse(s)
        .map_err(|e| anyhow::anyhow!("Could not parse date '{}': {:?}", s, e))?;
    Ok(dt.date())
}

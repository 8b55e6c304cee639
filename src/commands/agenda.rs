use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use owo_colors::OwoColorize;
use planbook_core::layout::sort::sort_items;
use planbook_core::{ItemKind, Preferences};

use crate::store::load_items;

pub fn run(prefs: &Preferences, from: NaiveDate, to: Option<NaiveDate>) -> Result<()> {
    let to = to.unwrap_or(from + Duration::days(7));
    let now = Local::now().naive_local();

    let mut items = load_items(prefs)?;
    sort_items(&mut items);

    let mut current_date: Option<NaiveDate> = None;
    let mut shown = 0;

    for item in &items {
        let span = item.resolve_span(now);
        let date = span.start.date();
        if date < from || date >= to {
            continue;
        }
        shown += 1;

        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(date).bold());
            current_date = Some(date);
        }

        let time = format!(
            "{}-{}",
            span.start.format("%H:%M"),
            span.end.format("%H:%M")
        );
        let tag = match item.kind {
            ItemKind::Plan => "plan".blue().to_string(),
            ItemKind::Record => "record".green().to_string(),
        };
        let title = if item.is_draft {
            item.title.dimmed().to_string()
        } else {
            item.title.clone()
        };
        println!("  {} {} {}", time.dimmed(), title, format!("[{}]", tag).dimmed());
    }

    if shown == 0 {
        println!("{}", "No items in this range".dimmed());
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

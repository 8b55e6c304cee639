use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;
use planbook_core::layout::layout_day;
use planbook_core::{ItemKind, Preferences, ScheduledItem};

use crate::render::render_day_grid;

fn at(date: NaiveDate, hour: u32, min: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, min, 0).unwrap()
}

/// Render a canned set of overlapping, multi-day and draft items so the
/// layout pipeline can be seen without any .ics files on disk.
pub fn run(prefs: &Preferences) -> Result<()> {
    let config = prefs.layout_config();
    config.validate()?;

    let today = Local::now().date_naive();
    let now = Local::now().naive_local();

    let mut morning_run = ScheduledItem::new(
        "demo-run",
        "Morning run",
        Some(at(today, 7, 0)),
        Some(at(today, 8, 0)),
    );
    morning_run.kind = ItemKind::Record;

    let items = vec![
        morning_run,
        ScheduledItem::new(
            "demo-standup",
            "Team standup",
            Some(at(today, 9, 0)),
            Some(at(today, 10, 0)),
        ),
        ScheduledItem::new(
            "demo-review",
            "Design review",
            Some(at(today, 9, 30)),
            Some(at(today, 10, 30)),
        ),
        ScheduledItem::new(
            "demo-incident",
            "Incident call",
            Some(at(today, 9, 45)),
            Some(at(today, 10, 15)),
        ),
        ScheduledItem::new(
            "demo-conf",
            "Conference",
            Some(at(today - Duration::days(1), 15, 0)),
            Some(at(today + Duration::days(1), 13, 0)),
        ),
        ScheduledItem::draft("Lunch?", Some(at(today, 12, 0)), None),
    ];

    let layout = layout_day(&items, today, prefs.show_weekends, None, &config, now);

    println!("{}", format!("Demo day: {}", today.format("%A, %B %-d")).bold());
    println!("{}", render_day_grid(&layout, &config));
    println!();
    println!(
        "{}",
        "Three overlapping morning items share two lanes; the third stacks in the last one."
            .dimmed()
    );

    Ok(())
}

use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use planbook_core::layout::layout_day;
use planbook_core::Preferences;

use crate::render::render_day_grid;
use crate::store::load_items;

pub fn run(
    prefs: &Preferences,
    date: NaiveDate,
    width: Option<f32>,
    json: bool,
    no_weekends: bool,
) -> Result<()> {
    let config = prefs.layout_config();
    config.validate()?;

    let items = load_items(prefs)?;
    let show_weekends = prefs.show_weekends && !no_weekends;
    let now = Local::now().naive_local();

    let layout = layout_day(&items, date, show_weekends, width, &config, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    println!("{}", date.format("%A, %B %-d").to_string().bold());
    if layout.items.is_empty() {
        println!("{}", "No plans on this day".dimmed());
        return Ok(());
    }
    println!("{}", render_day_grid(&layout, &config));
    Ok(())
}

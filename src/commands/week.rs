use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use planbook_core::layout::{layout_days, Viewport};
use planbook_core::Preferences;

use crate::render::render_day_lines;
use crate::store::load_items;

pub fn run(prefs: &Preferences, date: NaiveDate, no_weekends: bool) -> Result<()> {
    let config = prefs.layout_config();
    config.validate()?;

    let items = load_items(prefs)?;
    let show_weekends = prefs.show_weekends && !no_weekends;

    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    let viewport = Viewport {
        dates: (0..7).map(|offset| monday + Duration::days(offset)).collect(),
        show_weekends,
        container_width: None,
        now: Local::now().naive_local(),
    };

    let layouts = layout_days(&items, &viewport, &config);
    for (index, layout) in layouts.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", render_day_lines(layout));
    }

    Ok(())
}
